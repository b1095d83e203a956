#![allow(dead_code)]

//! Test infrastructure for ad-server API tests

use ad_config::UploadConfig;
use ad_server::AppState;
use ad_store::{ImageStore, ListingStore};

use std::sync::Arc;

use tempfile::TempDir;

pub const BOUNDARY: &str = "x-test-boundary";

/// Create AppState backed by a temp directory. The TempDir must stay alive
/// for the duration of the test.
pub fn create_test_state() -> (AppState, TempDir) {
    let temp = TempDir::new().unwrap();

    let state = AppState {
        store: Arc::new(ListingStore::new(temp.path().join("listings.json"))),
        images: Arc::new(ImageStore::new(temp.path().join("uploads"))),
        upload: UploadConfig::default(),
    };

    (state, temp)
}

/// Build a multipart/form-data body from text fields plus an optional
/// image part (content type, bytes).
pub fn multipart_body(fields: &[(&str, &str)], image: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((content_type, bytes)) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"photo\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

/// Fields for a listing that passes every validation rule
pub fn valid_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("title", "Продам велосипед"),
        ("description", "Горный велосипед, почти новый"),
        ("city", "москва"),
        ("price", "12500"),
        ("phone", "89123456789"),
    ]
}
