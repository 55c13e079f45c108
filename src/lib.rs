//! # TaskStore
//!
//! A crash-safe task record store with:
//! - In-memory state behind a single reader/writer lock
//! - Whole-file JSON snapshots on every mutation
//! - Atomic replace (write temp file, then rename) for crash safety
//! - Monotonic IDs that are never reused
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Callers (handlers, CLI, threads)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  create / delete / list / close
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     TaskStore                                │
//! │        (RwLock: shared for list, exclusive for writes)       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌──────────────────┐
//!   │  TaskTable  │ ───────► │  SnapshotWriter  │
//!   │ (in memory) │          │ (.tmp + rename)  │
//!   └─────────────┘          └──────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod task;
pub mod table;
pub mod snapshot;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StoreError, Result};
pub use config::{Config, SyncStrategy};
pub use task::Task;
pub use store::{TaskRepository, TaskStore};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of TaskStore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
