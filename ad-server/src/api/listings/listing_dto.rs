use ad_core::Listing;

use serde::Serialize;

/// Listing DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ListingDto {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    pub description: String,
    pub city: String,
    pub price: f64,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub handle: Option<String>,
    pub other: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: i64,
}

impl From<Listing> for ListingDto {
    fn from(l: Listing) -> Self {
        Self {
            id: l.id.to_string(),
            title: l.title,
            tagline: l.tagline,
            description: l.description,
            city: l.city,
            price: l.price,
            phone: l.contacts.phone,
            email: l.contacts.email,
            handle: l.contacts.handle,
            other: l.contacts.other,
            image: l.image,
            created_at: l.created_at.timestamp(),
        }
    }
}
