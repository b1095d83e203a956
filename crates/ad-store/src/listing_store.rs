//! Whole-document persistence for listings.
//!
//! The backing store is one JSON array rewritten wholesale on every
//! mutation. Writes go to a temp file in the same directory and are renamed
//! over the document. A missing document reads as an empty collection; any
//! other read failure is an error the caller can surface - never masked as
//! an empty result.

use crate::{Result as StoreResult, StoreError};

use ad_core::Listing;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tokio::fs;
use tokio::sync::Mutex;
use uuid::Uuid;

pub struct ListingStore {
    path: PathBuf,
    /// Single-writer lock: append/remove are load-modify-save cycles and
    /// must not interleave.
    write_lock: Mutex<()>,
}

impl ListingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and deserialize the whole document.
    pub async fn load_all(&self) -> StoreResult<Vec<Listing>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        serde_json::from_slice(&bytes).map_err(|e| StoreError::parse(&self.path, e))
    }

    /// Serialize and overwrite the whole document.
    pub async fn save_all(&self, listings: &[Listing]) -> StoreResult<()> {
        let json =
            serde_json::to_vec_pretty(listings).map_err(|e| StoreError::parse(&self.path, e))?;

        // Same directory as the document so the rename stays on one filesystem
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json)
            .await
            .map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;

        Ok(())
    }

    pub async fn append(&self, listing: Listing) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut all = self.load_all().await?;
        all.push(listing);
        self.save_all(&all).await
    }

    /// Remove by id, returning the removed record so the caller can clean
    /// up any uploaded image it references.
    pub async fn remove(&self, id: Uuid) -> StoreResult<Option<Listing>> {
        let _guard = self.write_lock.lock().await;

        let mut all = self.load_all().await?;
        let Some(index) = all.iter().position(|l| l.id == id) else {
            return Ok(None);
        };

        let removed = all.remove(index);
        self.save_all(&all).await?;
        Ok(Some(removed))
    }

    pub async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Listing>> {
        Ok(self.load_all().await?.into_iter().find(|l| l.id == id))
    }

    /// All listings created on the given server-local calendar day.
    pub async fn find_by_date(&self, date: NaiveDate) -> StoreResult<Vec<Listing>> {
        Ok(self
            .load_all()
            .await?
            .into_iter()
            .filter(|l| l.created_on() == date)
            .collect())
    }
}
