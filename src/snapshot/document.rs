//! Snapshot document
//!
//! Serde shape of the on-disk file.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::table::TaskTable;
use crate::task::Task;

/// Decoded snapshot document
///
/// Missing fields decode as zero/empty; `TaskTable::from_parts` fixes up
/// `next_id` afterwards.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub next_id: i64,

    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Borrowed view used for encoding, so a write never clones the table
#[derive(Serialize)]
struct SnapshotView<'a> {
    next_id: i64,
    tasks: Vec<&'a Task>,
}

impl Snapshot {
    /// Encode a table as a pretty-printed document (tasks in ID order)
    pub fn encode(table: &TaskTable) -> Result<Vec<u8>> {
        let view = SnapshotView {
            next_id: table.next_id(),
            tasks: table.iter().collect(),
        };
        let mut bytes = serde_json::to_vec_pretty(&view)?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    /// Decode raw file contents
    pub fn decode(bytes: &[u8]) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Build the in-memory table, normalizing `next_id`
    pub fn into_table(self) -> TaskTable {
        TaskTable::from_parts(self.next_id, self.tasks)
    }
}
