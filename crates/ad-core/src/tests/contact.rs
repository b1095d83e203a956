use crate::validation::contact::{
    is_valid_email, is_valid_handle, is_valid_phone, normalize_phone, validate_bundle,
};
use crate::ContactBundle;

#[test]
fn test_normalize_phone_eleven_digits() {
    assert_eq!(normalize_phone("89123456789"), "+7 (912) 345-67-89");
    assert_eq!(normalize_phone("79123456789"), "+7 (912) 345-67-89");
    assert_eq!(normalize_phone("8 (912) 345-67-89"), "+7 (912) 345-67-89");
}

#[test]
fn test_normalize_phone_passes_through_other_lengths() {
    assert_eq!(normalize_phone("12345"), "12345");
    assert_eq!(normalize_phone(""), "");
    assert_eq!(normalize_phone("not a phone"), "not a phone");
}

#[test]
fn test_normalize_phone_idempotent_on_normalized_input() {
    let once = normalize_phone("89123456789");
    let twice = normalize_phone(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_is_valid_phone() {
    assert!(is_valid_phone(""));
    assert!(is_valid_phone("+7 (912) 345-67-89"));
    assert!(is_valid_phone("89123456789"));
    assert!(!is_valid_phone("19123456789")); // wrong leading digit
    assert!(!is_valid_phone("8912345678")); // 10 digits
    assert!(!is_valid_phone("phone"));
}

#[test]
fn test_is_valid_email() {
    assert!(is_valid_email(""));
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("a.b+c@mail.example.ru"));
    assert!(is_valid_email("user@[192.168.1.1]"));
    assert!(!is_valid_email("user"));
    assert!(!is_valid_email("user@"));
    assert!(!is_valid_email("us er@example.com"));
    assert!(!is_valid_email("<user>@example.com"));
}

#[test]
fn test_is_valid_handle() {
    assert!(is_valid_handle(""));
    assert!(is_valid_handle("@ivan_petrov"));
    assert!(is_valid_handle("@abcde"));
    assert!(!is_valid_handle("@abcd")); // too short
    assert!(!is_valid_handle("ivan_petrov")); // missing @
    assert!(!is_valid_handle("@иван")); // non-latin
    assert!(!is_valid_handle(&format!("@{}", "a".repeat(33))));
}

#[test]
fn test_validate_bundle_requires_one_channel() {
    let reason = validate_bundle(&ContactBundle::default());
    assert!(reason.unwrap().contains("at least one contact method"));
}

#[test]
fn test_validate_bundle_any_single_channel_passes() {
    let bundle = ContactBundle {
        phone: Some("any".to_string()),
        ..Default::default()
    };
    assert_eq!(validate_bundle(&bundle), None);
}

#[test]
fn test_validate_bundle_rejects_bad_email() {
    let bundle = ContactBundle {
        email: Some("not-an-email".to_string()),
        ..Default::default()
    };
    assert!(validate_bundle(&bundle).unwrap().contains("email"));
}

#[test]
fn test_validate_bundle_rejects_bad_handle() {
    let bundle = ContactBundle {
        phone: Some("89123456789".to_string()),
        handle: Some("@x".to_string()),
        ..Default::default()
    };
    assert!(validate_bundle(&bundle).unwrap().contains("handle"));
}

#[test]
fn test_validate_bundle_blank_strings_count_as_empty() {
    let bundle = ContactBundle {
        phone: Some("   ".to_string()),
        email: Some("".to_string()),
        ..Default::default()
    };
    assert!(validate_bundle(&bundle).is_some());
}
