//! Shared listing validation.
//!
//! The one interface every boundary validates against - the HTTP layer here,
//! and any browser-side build that wants the same rules without drift.

use crate::validation::contact;
use crate::{cities, ContactBundle, CoreError, ErrorLocation, Result};

use std::panic::Location;

/// Raw submission as collected from the client, before any normalization.
#[derive(Debug, Clone, Default)]
pub struct ListingDraft {
    pub title: String,
    pub tagline: Option<String>,
    pub description: String,
    pub city: String,
    pub price: f64,
    pub contacts: ContactBundle,
}

/// A draft that passed every rule: trimmed text, directory-canonical city,
/// normalized phone.
#[derive(Debug, Clone)]
pub struct ValidListing {
    pub title: String,
    pub tagline: Option<String>,
    pub description: String,
    pub city: &'static str,
    pub price: f64,
    pub contacts: ContactBundle,
}

/// Validate a submission in full, rejecting on the first failed rule.
pub fn validate_listing(draft: ListingDraft) -> Result<ValidListing> {
    let title = draft.title.trim().to_string();
    if title.is_empty() {
        return Err(CoreError::field("title", "title is required"));
    }

    let description = draft.description.trim().to_string();
    if description.is_empty() {
        return Err(CoreError::field("description", "description is required"));
    }

    if !draft.price.is_finite() || draft.price <= 0.0 {
        return Err(CoreError::field("price", "price must be a positive number"));
    }

    let city = cities::canonical(&draft.city).ok_or_else(|| CoreError::UnknownCity {
        name: draft.city.clone(),
        suggestion: cities::suggest(&draft.city).map(str::to_string),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let mut contacts = draft.contacts;
    contacts.phone = contacts.phone.map(|p| contact::normalize_phone(&p));

    if let Some(reason) = contact::validate_bundle(&contacts) {
        return Err(CoreError::field("contacts", reason));
    }

    let phone = contacts.phone_or_default();
    if !contact::is_valid_phone(phone) {
        return Err(CoreError::field(
            "phone",
            format!("invalid phone number: {phone}"),
        ));
    }

    let tagline = draft.tagline.and_then(|t| {
        let t = t.trim().to_string();
        if t.is_empty() {
            None
        } else {
            Some(t)
        }
    });

    Ok(ValidListing {
        title,
        tagline,
        description,
        city,
        price: draft.price,
        contacts,
    })
}
