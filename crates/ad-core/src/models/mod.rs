pub mod contact_bundle;
pub mod listing;
