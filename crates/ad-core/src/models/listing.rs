//! Listing entity - a single published classified.

use crate::ContactBundle;

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published listing. Immutable after creation; the only lifecycle
/// transition is deletion by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    pub description: String,
    /// Directory-canonical casing; matched a directory entry at creation
    /// time and is never re-validated afterward
    pub city: String,
    pub price: f64,
    pub contacts: ContactBundle,
    /// Relative path of the uploaded image, if one was attached
    #[serde(default)]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Listing {
    /// Create a new listing with a fresh id and the current timestamp
    pub fn new(
        title: String,
        tagline: Option<String>,
        description: String,
        city: String,
        price: f64,
        contacts: ContactBundle,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            tagline,
            description,
            city,
            price,
            contacts,
            image: None,
            created_at: Utc::now(),
        }
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Calendar day of creation in the server's local timezone
    pub fn created_on(&self) -> NaiveDate {
        self.created_at.with_timezone(&Local).date_naive()
    }
}
