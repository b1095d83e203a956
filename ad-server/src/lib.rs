pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    cities::{
        cities::{popular_cities, search_cities, validate_city},
        city_check_response::CityCheckResponse,
        city_list_response::CityListResponse,
        city_search_query::CitySearchQuery,
        city_validate_query::CityValidateQuery,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    listings::{
        list_listings_query::ListListingsQuery,
        listing_dto::ListingDto,
        listing_list_response::ListingListResponse,
        listing_response::ListingResponse,
        listings::{
            create_listing, delete_listing, export_listings, get_listing, list_listings,
        },
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
