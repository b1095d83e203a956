use ad_core::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed listings document {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid image reference: {reference} {location}")]
    InvalidReference {
        reference: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn parse(path: &Path, source: serde_json::Error) -> Self {
        StoreError::Parse {
            path: path.to_path_buf(),
            source,
        }
    }

    #[track_caller]
    pub(crate) fn invalid_reference<S: Into<String>>(reference: S) -> Self {
        StoreError::InvalidReference {
            reference: reference.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, StoreError>;
