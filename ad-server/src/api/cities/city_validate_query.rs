use serde::Deserialize;

/// Query parameters for GET /api/v1/cities/validate
#[derive(Debug, Deserialize)]
pub struct CityValidateQuery {
    #[serde(default)]
    pub name: String,
}
