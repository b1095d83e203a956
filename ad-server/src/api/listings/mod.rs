pub mod list_listings_query;
pub mod listing_dto;
pub mod listing_list_response;
pub mod listing_response;
pub mod listings;
