pub mod cities;
pub mod error;
pub mod export;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, ErrorLocation, Result};
pub use models::contact_bundle::ContactBundle;
pub use models::listing::Listing;
