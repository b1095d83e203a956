use ad_config::UploadConfig;
use ad_store::{ImageStore, ListingStore};

use std::sync::Arc;

/// Shared state handed to every handler.
///
/// The city directory needs no slot here - it is a process-wide constant
/// in `ad_core::cities`, safe for unsynchronized concurrent reads.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ListingStore>,
    pub images: Arc<ImageStore>,
    pub upload: UploadConfig,
}
