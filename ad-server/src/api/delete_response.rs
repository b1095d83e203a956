use serde::Serialize;

/// Response body for DELETE endpoints
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub id: String,
}
