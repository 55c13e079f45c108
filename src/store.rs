//! Store Module
//!
//! The task store: the single owner of task state and the serialization
//! point for writes.
//!
//! ## Responsibilities
//! - Load existing state on open
//! - Validate input and allocate IDs
//! - Persist every mutation before reporting success
//! - Roll back in-memory changes when persistence fails

use std::fs;
use std::path::Path;

use chrono::Utc;
use parking_lot::RwLock;

use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::snapshot::{parent_dir, SnapshotReader, SnapshotWriter};
use crate::table::TaskTable;
use crate::task::Task;

/// The contract surrounding layers (HTTP handlers, CLI) consume
///
/// Every method is synchronous and safe to call from concurrent callers.
pub trait TaskRepository: Send + Sync {
    /// Create a task with the given title (trimmed, must be non-empty)
    fn create(&self, title: &str) -> Result<Task>;

    /// Delete a task; `Ok(false)` if no such task
    fn delete(&self, id: i64) -> Result<bool>;

    /// All live tasks, newest first
    fn list(&self) -> Result<Vec<Task>>;

    /// Persist the current state one final time
    fn close(&self) -> Result<()>;
}

/// File-backed task store
///
/// ## Concurrency Model: Single RwLock
///
/// - **Reads** (`list`): shared lock; many run in parallel, none touch disk
/// - **Writes** (`create`/`delete`/`close`): exclusive lock held through
///   the snapshot write, so at most one write to the temp file is ever in
///   flight and the file always reflects a prefix of the mutation order
///
/// A mutation is committed only once it is both applied in memory and
/// durably on disk. If the write fails, the in-memory change is undone
/// before the lock is released.
pub struct TaskStore {
    config: Config,

    /// Aggregate state (tasks + next_id)
    state: RwLock<TaskTable>,

    /// Snapshot writer (stateless; exclusivity comes from `state`)
    writer: SnapshotWriter,
}

impl TaskStore {
    /// Open or create a store at `path` with default settings
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let config = Config::builder().db_path(path.as_ref()).build();
        Self::open_with_config(config)
    }

    /// Open or create a store with the given config
    ///
    /// On startup:
    /// 1. Create the parent directory if missing
    /// 2. Drop any temp file left by an interrupted write
    /// 3. Load the snapshot if present (missing = empty store)
    /// 4. Normalize `next_id`
    pub fn open_with_config(config: Config) -> Result<Self> {
        let path = config.db_path.clone();

        // Step 1: Ensure the directory exists
        let dir = parent_dir(&path);
        fs::create_dir_all(dir).map_err(|e| StoreError::io("create store directory", dir, e))?;

        // Step 2: The previous snapshot is authoritative over a stray temp file
        let writer = SnapshotWriter::new(&path, config.sync_strategy);
        writer.discard_stale_tmp();

        // Step 3 + 4: Load and normalize
        let table = match SnapshotReader::load(&path)? {
            Some(snapshot) => {
                let stored_next_id = snapshot.next_id;
                let table = snapshot.into_table();
                if table.next_id() != stored_next_id {
                    tracing::warn!(
                        path = %path.display(),
                        stored = stored_next_id,
                        derived = table.next_id(),
                        "next_id re-derived from stored tasks"
                    );
                }
                table
            }
            None => TaskTable::new(),
        };

        tracing::info!(
            path = %path.display(),
            tasks = table.len(),
            next_id = table.next_id(),
            "task store opened"
        );

        Ok(Self {
            config,
            state: RwLock::new(table),
            writer,
        })
    }

    /// Create a task
    ///
    /// The title is trimmed; an empty result is rejected before any lock is
    /// taken. Returns the stored task with its assigned ID and timestamp.
    pub fn create(&self, title: &str) -> Result<Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::Validation("title required".to_string()));
        }

        let mut state = self.state.write();

        let task = state
            .insert_new(title.to_string(), Utc::now())
            .ok_or(StoreError::IdsExhausted)?;

        if let Err(e) = self.writer.write(&state) {
            state.rollback_insert(&task);
            tracing::warn!(id = task.id, error = %e, "create rolled back after failed write");
            return Err(e);
        }

        Ok(task)
    }

    /// Delete a task by ID
    ///
    /// Returns `Ok(false)` without touching disk when the ID is unknown.
    /// IDs are never reused after deletion.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let mut state = self.state.write();

        let Some(task) = state.remove(id) else {
            return Ok(false);
        };

        if let Err(e) = self.writer.write(&state) {
            state.restore(task);
            tracing::warn!(id, error = %e, "delete rolled back after failed write");
            return Err(e);
        }

        Ok(true)
    }

    /// All live tasks, newest first (ties: larger ID first)
    pub fn list(&self) -> Result<Vec<Task>> {
        Ok(self.state.read().sorted())
    }

    /// Look up a single task
    pub fn get(&self, id: i64) -> Option<Task> {
        self.state.read().get(id).cloned()
    }

    /// Persist the current state one final time
    ///
    /// Safe to call repeatedly; the store stays usable afterwards.
    pub fn close(&self) -> Result<()> {
        let state = self.state.write();
        self.writer.write(&state)?;
        tracing::info!(path = %self.writer.path().display(), "task store closed");
        Ok(())
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Backing snapshot path
    pub fn path(&self) -> &Path {
        self.writer.path()
    }

    /// Next ID that `create` will allocate
    pub fn next_id(&self) -> i64 {
        self.state.read().next_id()
    }

    /// Number of live tasks
    pub fn len(&self) -> usize {
        self.state.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().is_empty()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl TaskRepository for TaskStore {
    fn create(&self, title: &str) -> Result<Task> {
        TaskStore::create(self, title)
    }

    fn delete(&self, id: i64) -> Result<bool> {
        TaskStore::delete(self, id)
    }

    fn list(&self) -> Result<Vec<Task>> {
        TaskStore::list(self)
    }

    fn close(&self) -> Result<()> {
        TaskStore::close(self)
    }
}
