pub mod error;
pub mod image_store;
pub mod listing_store;

pub use error::{Result, StoreError};
pub use image_store::ImageStore;
pub use listing_store::ListingStore;
