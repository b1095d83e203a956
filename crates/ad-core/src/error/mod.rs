pub mod location;

// -------------------------------------------------------------------------- //

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

pub use location::ErrorLocation;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Unknown city: {name} {location}")]
    UnknownCity {
        name: String,
        suggestion: Option<String>,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error with no field attribution
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a validation error attributed to a single field
    #[track_caller]
    pub fn field<S: Into<String>>(field: &str, message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
