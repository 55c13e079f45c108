//! Snapshot Reader
//!
//! Loads the snapshot file on open.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, StoreError};

use super::Snapshot;

/// Reads the snapshot file
pub struct SnapshotReader;

impl SnapshotReader {
    /// Load the snapshot at `path`
    ///
    /// Returns:
    /// - `Ok(Some(snapshot))`: file exists and decodes
    /// - `Ok(None)`: no file (treated as an empty store)
    /// - `Err(Corrupt)`: file exists but is not a valid document
    /// - `Err(StorageIo)`: file exists but could not be read
    pub fn load(path: &Path) -> Result<Option<Snapshot>> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io("read store file", path, e)),
        };

        let snapshot = Snapshot::decode(&bytes).map_err(|e| StoreError::Corrupt {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::debug!(
            path = %path.display(),
            bytes = bytes.len(),
            tasks = snapshot.tasks.len(),
            "loaded snapshot"
        );

        Ok(Some(snapshot))
    }
}
