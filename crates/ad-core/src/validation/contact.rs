//! Contact channel validation and phone normalization.
//!
//! Each channel validates independently; every channel is optional, so the
//! empty string always passes. Presence is a bundle-level concern handled
//! by [`validate_bundle`].

use crate::ContactBundle;

use once_cell::sync::Lazy;
use regex::Regex;

/// local-part@dotted-domain, or local-part@[IPv4]
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^[^\s@<>"]+@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$|^[^\s@<>"]+@\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\]$"#,
    )
    .unwrap()
});

static HANDLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^@[A-Za-z0-9_]{5,32}$").unwrap());

fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Reformat an 11-digit phone number as `+7 (XXX) XXX-XX-XX`.
///
/// The leading digit ("7" or "8" by domestic dialing convention) is dropped
/// in favor of the literal `+7` prefix. Anything that doesn't strip to
/// exactly 11 digits is returned unchanged and left for [`is_valid_phone`]
/// to reject.
pub fn normalize_phone(raw: &str) -> String {
    let d = digits(raw);
    if d.len() != 11 {
        return raw.to_string();
    }
    // All ASCII digits, so byte slicing is safe
    format!("+7 ({}) {}-{}-{}", &d[1..4], &d[4..7], &d[7..9], &d[9..11])
}

pub fn is_valid_phone(value: &str) -> bool {
    if value.trim().is_empty() {
        return true;
    }
    let d = digits(value);
    d.len() == 11 && (d.starts_with('7') || d.starts_with('8'))
}

pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || EMAIL_RE.is_match(value)
}

pub fn is_valid_handle(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || HANDLE_RE.is_match(value)
}

/// Bundle-level check: at least one channel present, plus raw email and
/// handle format. The phone goes through normalize-then-validate as a
/// separate step owned by the caller.
pub fn validate_bundle(bundle: &ContactBundle) -> Option<String> {
    if bundle.is_empty() {
        return Some("at least one contact method is required".to_string());
    }

    let email = bundle.email_or_default();
    if !is_valid_email(email) {
        return Some(format!("invalid email address: {email}"));
    }

    let handle = bundle.handle_or_default();
    if !is_valid_handle(handle) {
        return Some(format!("invalid messenger handle: {handle}"));
    }

    None
}
