//! Snapshot Writer
//!
//! Replaces the snapshot file via write-temp-then-rename.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::SyncStrategy;
use crate::error::{Result, StoreError};
use crate::table::TaskTable;

use super::Snapshot;

/// Writes full snapshots to the backing file
///
/// Holds no mutable state; callers serialize writes (the store does so
/// under its write lock), since every write reuses the same temp path.
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    /// Target snapshot file
    path: PathBuf,
    /// `{path}.tmp`, same directory as the target so rename stays atomic
    tmp_path: PathBuf,
    sync_strategy: SyncStrategy,
}

impl SnapshotWriter {
    pub fn new(path: &Path, sync_strategy: SyncStrategy) -> Self {
        Self {
            path: path.to_path_buf(),
            tmp_path: Self::tmp_path_for(path),
            sync_strategy,
        }
    }

    /// Temp path used for `path`: "tasks.json" → "tasks.json.tmp"
    pub fn tmp_path_for(path: &Path) -> PathBuf {
        let mut name = OsString::from(path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Encode `table` and atomically replace the snapshot
    ///
    /// Returns the number of bytes written.
    pub fn write(&self, table: &TaskTable) -> Result<usize> {
        let bytes = Snapshot::encode(table)?;
        self.write_bytes(&bytes)?;

        tracing::debug!(
            path = %self.path.display(),
            bytes = bytes.len(),
            tasks = table.len(),
            next_id = table.next_id(),
            "persisted snapshot"
        );

        Ok(bytes.len())
    }

    /// Atomically replace the snapshot with `bytes`
    pub fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        // Step 1: Write everything to the temp file
        if let Err(e) = self.write_tmp(bytes) {
            let _ = fs::remove_file(&self.tmp_path);
            return Err(e);
        }

        // Step 2: Install it with a single rename
        fs::rename(&self.tmp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&self.tmp_path);
            StoreError::io("replace store file", &self.path, e)
        })?;

        // Step 3: Make the rename itself durable. The new snapshot is
        // already in place, so failure here is logged, not returned.
        if self.sync_strategy == SyncStrategy::EveryWrite {
            self.sync_parent_dir();
        }

        Ok(())
    }

    /// Remove a temp file left behind by an interrupted write
    ///
    /// Returns true if one was found and removed.
    pub fn discard_stale_tmp(&self) -> bool {
        if !self.tmp_path.is_file() {
            return false;
        }
        match fs::remove_file(&self.tmp_path) {
            Ok(()) => {
                tracing::warn!(
                    path = %self.tmp_path.display(),
                    "removed leftover temp file from an interrupted write"
                );
                true
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.tmp_path.display(),
                    error = %e,
                    "could not remove leftover temp file"
                );
                false
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tmp_path(&self) -> &Path {
        &self.tmp_path
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn write_tmp(&self, bytes: &[u8]) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.tmp_path)
            .map_err(|e| StoreError::io("write temp store file", &self.tmp_path, e))?;

        file.write_all(bytes)
            .map_err(|e| StoreError::io("write temp store file", &self.tmp_path, e))?;

        if self.sync_strategy == SyncStrategy::EveryWrite {
            file.sync_all()
                .map_err(|e| StoreError::io("sync temp store file", &self.tmp_path, e))?;
        }

        Ok(())
    }

    #[cfg(unix)]
    fn sync_parent_dir(&self) {
        let dir = parent_dir(&self.path);
        if let Err(e) = fs::File::open(dir).and_then(|d| d.sync_all()) {
            tracing::warn!(dir = %dir.display(), error = %e, "directory fsync failed");
        }
    }

    #[cfg(not(unix))]
    fn sync_parent_dir(&self) {}
}

/// Parent directory of `path`, "." for bare file names
pub(crate) fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}
