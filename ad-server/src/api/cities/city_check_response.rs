use serde::Serialize;

/// Response for city validity checks
#[derive(Debug, Serialize)]
pub struct CityCheckResponse {
    pub valid: bool,
    /// Closest known city when the name is invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}
