use serde::Serialize;

/// City name collection response
#[derive(Debug, Serialize)]
pub struct CityListResponse {
    pub cities: Vec<String>,
}
