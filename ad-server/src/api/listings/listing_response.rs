use crate::ListingDto;

use serde::Serialize;

/// Single listing response
#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub listing: ListingDto,
}
