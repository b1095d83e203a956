//! City directory REST API handlers
//!
//! Thin wrappers over `ad_core::cities` - the directory is a process-wide
//! constant, so these handlers take no state.

use crate::{CityCheckResponse, CityListResponse, CitySearchQuery, CityValidateQuery};

use ad_core::cities;

use axum::{extract::Query, Json};

/// GET /api/v1/cities/search?q=
///
/// Prefix/word search over the directory, capped at 15 results. A blank
/// query yields an empty list; clients fall back to the popular endpoint.
pub async fn search_cities(Query(query): Query<CitySearchQuery>) -> Json<CityListResponse> {
    Json(CityListResponse {
        cities: cities::search(&query.q)
            .iter()
            .map(|c| c.to_string())
            .collect(),
    })
}

/// GET /api/v1/cities/popular
pub async fn popular_cities() -> Json<CityListResponse> {
    Json(CityListResponse {
        cities: cities::popular().iter().map(|c| c.to_string()).collect(),
    })
}

/// GET /api/v1/cities/validate?name=
pub async fn validate_city(Query(query): Query<CityValidateQuery>) -> Json<CityCheckResponse> {
    let valid = cities::is_valid(&query.name);
    let suggestion = if valid {
        None
    } else {
        cities::suggest(&query.name).map(str::to_string)
    };

    Json(CityCheckResponse { valid, suggestion })
}
