use crate::state::AppState;
use crate::{
    create_listing, delete_listing, export_listings, get_listing, health, list_listings,
    popular_cities, search_cities, validate_city,
};

use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // Multipart bodies carry the image plus the form fields; leave headroom
    // above the configured image cap.
    let body_limit = state.upload.max_bytes + 64 * 1024;

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        // Listings
        .route("/api/v1/listings", get(list_listings).post(create_listing))
        .route("/api/v1/listings/export.csv", get(export_listings))
        .route(
            "/api/v1/listings/{id}",
            get(get_listing).delete(delete_listing),
        )
        // Cities
        .route("/api/v1/cities/search", get(search_cities))
        .route("/api/v1/cities/popular", get(popular_cities))
        .route("/api/v1/cities/validate", get(validate_city))
        .layer(DefaultBodyLimit::max(body_limit))
        // Add shared state
        .with_state(state)
        // CORS middleware (the browser frontend is served separately)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
