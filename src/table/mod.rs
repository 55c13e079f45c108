//! Table Module
//!
//! In-memory aggregate of live tasks plus the ID counter.
//!
//! ## Responsibilities
//! - Allocate IDs (`next_id` only ever moves forward on success)
//! - Insert/remove tasks, and undo either after a failed write
//! - Normalize state loaded from disk
//! - Produce the ordered listing
//!
//! ## Data Structure Choice
//! BTreeMap keyed by ID:
//! - Snapshots come out in ascending ID order for free
//! - List order is NOT taken from the map; it is sorted on read
//!
//! The table itself is not synchronized. The store wraps it in a single
//! RwLock.

mod state;

pub use state::TaskTable;
