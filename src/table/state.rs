//! TaskTable implementation

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::task::Task;

/// In-memory aggregate: live tasks and the next ID to allocate
///
/// Invariants:
/// - `next_id >= 1`
/// - every key is `< next_id`
#[derive(Debug, Clone, PartialEq)]
pub struct TaskTable {
    next_id: i64,
    tasks: BTreeMap<i64, Task>,
}

impl TaskTable {
    /// Create an empty table (`next_id = 1`)
    pub fn new() -> Self {
        Self {
            next_id: 1,
            tasks: BTreeMap::new(),
        }
    }

    /// Rebuild a table from loaded parts
    ///
    /// `next_id` is raised to at least 1 and past every loaded ID. Duplicate
    /// IDs keep the last occurrence.
    pub fn from_parts(next_id: i64, tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut table = Self {
            next_id: next_id.max(1),
            tasks: BTreeMap::new(),
        };
        for task in tasks {
            if task.id >= table.next_id {
                table.next_id = task.id.saturating_add(1);
            }
            table.tasks.insert(task.id, task);
        }
        table
    }

    /// Allocate the next ID and insert a task with it
    ///
    /// `title` must already be validated. Returns `None` once the ID space
    /// is exhausted.
    pub fn insert_new(&mut self, title: String, created_at: DateTime<Utc>) -> Option<Task> {
        let id = self.next_id;
        let next_id = id.checked_add(1)?;
        let task = Task {
            id,
            title,
            created_at,
        };
        self.tasks.insert(id, task.clone());
        self.next_id = next_id;
        Some(task)
    }

    /// Undo the most recent `insert_new`
    ///
    /// Only valid while the caller still holds exclusive access since that
    /// insert; the ID was never exposed, so it is handed back.
    pub fn rollback_insert(&mut self, task: &Task) {
        self.tasks.remove(&task.id);
        if self.next_id == task.id + 1 {
            self.next_id = task.id;
        }
    }

    /// Remove a task, returning it if present
    pub fn remove(&mut self, id: i64) -> Option<Task> {
        self.tasks.remove(&id)
    }

    /// Put back a task taken out by `remove`
    pub fn restore(&mut self, task: Task) {
        self.tasks.insert(task.id, task);
    }

    /// All live tasks, newest first
    pub fn sorted(&self) -> Vec<Task> {
        let mut tasks: Vec<Task> = self.tasks.values().cloned().collect();
        tasks.sort_by(Task::newest_first);
        tasks
    }

    /// Iterate tasks in ascending ID order
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values()
    }

    pub fn get(&self, id: i64) -> Option<&Task> {
        self.tasks.get(&id)
    }

    pub fn next_id(&self) -> i64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Default for TaskTable {
    fn default() -> Self {
        Self::new()
    }
}
