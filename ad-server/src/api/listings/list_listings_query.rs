use serde::Deserialize;

/// Query parameters for GET /api/v1/listings
#[derive(Debug, Deserialize)]
pub struct ListListingsQuery {
    /// Restrict to listings created on this server-local day (YYYY-MM-DD)
    #[serde(default)]
    pub date: Option<String>,
}
