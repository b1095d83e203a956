use serde::Deserialize;

/// Query parameters for GET /api/v1/cities/search
#[derive(Debug, Deserialize)]
pub struct CitySearchQuery {
    #[serde(default)]
    pub q: String,
}
