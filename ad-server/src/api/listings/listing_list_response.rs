use crate::ListingDto;

use serde::Serialize;

/// Listing collection response
#[derive(Debug, Serialize)]
pub struct ListingListResponse {
    pub listings: Vec<ListingDto>,
}
