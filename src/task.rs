//! Task record
//!
//! The single entity held by the store.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single task entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique, monotonically assigned, never reused
    pub id: i64,

    /// Trimmed, non-empty title
    pub title: String,

    /// Creation time (UTC)
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// List order: newest `created_at` first, larger `id` first on ties
    pub fn newest_first(a: &Task, b: &Task) -> Ordering {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    }
}
