//! Snapshot Module
//!
//! Whole-file persistence of the task table.
//!
//! ## Responsibilities
//! - Encode/decode the snapshot document
//! - Load the snapshot on open (missing file = empty store)
//! - Replace the snapshot atomically on every mutation
//!
//! ## File Format
//! ```text
//! {
//!   "next_id": <integer >= 1>,
//!   "tasks": [
//!     {"id": <integer>, "title": <string>, "created_at": <RFC 3339 UTC>},
//!     ...
//!   ]
//! }
//! ```
//!
//! ## Write Protocol
//! ```text
//!   encode ──► write {path}.tmp ──► fsync ──► rename onto {path} ──► fsync dir
//!                   │                 │              │
//!                   └── failure: {path} untouched, temp removed
//! ```
//! A crash before the rename leaves the previous snapshot; a crash after
//! leaves the new one. There is no window with a partial `{path}`.

mod document;
mod reader;
mod writer;

pub use document::Snapshot;
pub use reader::SnapshotReader;
pub use writer::SnapshotWriter;

pub(crate) use writer::parent_dir;
