use crate::validation::listing::{validate_listing, ListingDraft};
use crate::{ContactBundle, CoreError};

fn draft() -> ListingDraft {
    ListingDraft {
        title: "Велосипед".to_string(),
        tagline: None,
        description: "Горный, почти новый".to_string(),
        city: "москва".to_string(),
        price: 12500.0,
        contacts: ContactBundle {
            phone: Some("89123456789".to_string()),
            ..Default::default()
        },
    }
}

#[test]
fn test_valid_draft_canonicalizes_city_and_phone() {
    let valid = validate_listing(draft()).unwrap();

    assert_eq!(valid.city, "Москва");
    assert_eq!(valid.contacts.phone.as_deref(), Some("+7 (912) 345-67-89"));
}

#[test]
fn test_missing_title_rejected() {
    let mut d = draft();
    d.title = "  ".to_string();

    match validate_listing(d) {
        Err(CoreError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("title")),
        other => panic!("expected title validation error, got {other:?}"),
    }
}

#[test]
fn test_non_positive_price_rejected() {
    for price in [0.0, -10.0, f64::NAN, f64::INFINITY] {
        let mut d = draft();
        d.price = price;
        assert!(validate_listing(d).is_err(), "price {price} should fail");
    }
}

#[test]
fn test_unknown_city_carries_suggestion() {
    let mut d = draft();
    d.city = "моск".to_string();

    match validate_listing(d) {
        Err(CoreError::UnknownCity {
            name, suggestion, ..
        }) => {
            assert_eq!(name, "моск");
            assert_eq!(suggestion.as_deref(), Some("Москва"));
        }
        other => panic!("expected unknown city error, got {other:?}"),
    }
}

#[test]
fn test_empty_contacts_rejected() {
    let mut d = draft();
    d.contacts = ContactBundle::default();

    match validate_listing(d) {
        Err(CoreError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("contacts")),
        other => panic!("expected contacts validation error, got {other:?}"),
    }
}

#[test]
fn test_malformed_phone_rejected_after_normalization() {
    let mut d = draft();
    d.contacts.phone = Some("12345".to_string());

    match validate_listing(d) {
        Err(CoreError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("phone")),
        other => panic!("expected phone validation error, got {other:?}"),
    }
}

#[test]
fn test_blank_tagline_dropped() {
    let mut d = draft();
    d.tagline = Some("   ".to_string());

    let valid = validate_listing(d).unwrap();
    assert_eq!(valid.tagline, None);
}
