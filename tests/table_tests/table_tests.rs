//! Tests for TaskTable
//!
//! These tests verify:
//! - ID allocation and monotonicity
//! - Rollback helpers (undo insert, restore after remove)
//! - Normalization of loaded state
//! - Listing order

use chrono::{DateTime, TimeZone, Utc};
use taskstore::table::TaskTable;
use taskstore::Task;

// =============================================================================
// Helper Functions
// =============================================================================

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn task(id: i64, secs: i64) -> Task {
    Task {
        id,
        title: format!("task {}", id),
        created_at: at(secs),
    }
}

fn ids(tasks: &[Task]) -> Vec<i64> {
    tasks.iter().map(|t| t.id).collect()
}

// =============================================================================
// Allocation Tests
// =============================================================================

#[test]
fn test_new_table_is_empty() {
    let table = TaskTable::new();

    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
    assert_eq!(table.next_id(), 1);
}

#[test]
fn test_insert_allocates_sequential_ids() {
    let mut table = TaskTable::new();

    let a = table.insert_new("a".to_string(), at(1)).unwrap();
    let b = table.insert_new("b".to_string(), at(2)).unwrap();

    assert_eq!(a.id, 1);
    assert_eq!(b.id, 2);
    assert_eq!(table.next_id(), 3);
    assert_eq!(table.get(1), Some(&a));
}

#[test]
fn test_remove_does_not_rewind_next_id() {
    let mut table = TaskTable::new();
    table.insert_new("a".to_string(), at(1)).unwrap();
    table.insert_new("b".to_string(), at(2)).unwrap();

    let removed = table.remove(2).unwrap();
    assert_eq!(removed.id, 2);
    assert_eq!(table.next_id(), 3);

    let c = table.insert_new("c".to_string(), at(3)).unwrap();
    assert_eq!(c.id, 3);
}

#[test]
fn test_remove_unknown_returns_none() {
    let mut table = TaskTable::new();
    assert!(table.remove(999).is_none());
    assert_eq!(table.next_id(), 1);
}

#[test]
fn test_insert_fails_when_ids_exhausted() {
    let mut table = TaskTable::from_parts(i64::MAX, Vec::new());

    assert!(table.insert_new("x".to_string(), at(1)).is_none());
    assert!(table.is_empty());
    assert_eq!(table.next_id(), i64::MAX);
}

// =============================================================================
// Rollback Tests
// =============================================================================

#[test]
fn test_rollback_insert_restores_previous_state() {
    let mut table = TaskTable::new();
    table.insert_new("keep".to_string(), at(1)).unwrap();
    let before = table.clone();

    let task = table.insert_new("undo".to_string(), at(2)).unwrap();
    table.rollback_insert(&task);

    assert_eq!(table, before);
}

#[test]
fn test_restore_after_remove() {
    let mut table = TaskTable::new();
    table.insert_new("a".to_string(), at(1)).unwrap();
    let before = table.clone();

    let task = table.remove(1).unwrap();
    table.restore(task);

    assert_eq!(table, before);
}

// =============================================================================
// Normalization Tests
// =============================================================================

#[test]
fn test_from_parts_raises_next_id_to_one() {
    let table = TaskTable::from_parts(0, Vec::new());
    assert_eq!(table.next_id(), 1);

    let table = TaskTable::from_parts(-5, Vec::new());
    assert_eq!(table.next_id(), 1);
}

#[test]
fn test_from_parts_derives_next_id_past_max_id() {
    let table = TaskTable::from_parts(2, vec![task(1, 1), task(7, 2), task(3, 3)]);

    assert_eq!(table.next_id(), 8);
    assert_eq!(table.len(), 3);
}

#[test]
fn test_from_parts_keeps_larger_stored_next_id() {
    let table = TaskTable::from_parts(50, vec![task(1, 1)]);
    assert_eq!(table.next_id(), 50);
}

#[test]
fn test_from_parts_duplicate_ids_keep_last() {
    let mut second = task(4, 9);
    second.title = "second".to_string();

    let table = TaskTable::from_parts(1, vec![task(4, 1), second.clone()]);

    assert_eq!(table.len(), 1);
    assert_eq!(table.get(4), Some(&second));
    assert_eq!(table.next_id(), 5);
}

// =============================================================================
// Ordering Tests
// =============================================================================

#[test]
fn test_sorted_newest_first() {
    let table = TaskTable::from_parts(1, vec![task(1, 100), task(2, 300), task(3, 200)]);

    assert_eq!(ids(&table.sorted()), vec![2, 3, 1]);
}

#[test]
fn test_sorted_ties_prefer_larger_id() {
    let table = TaskTable::from_parts(1, vec![task(5, 100), task(9, 100), task(2, 100)]);

    assert_eq!(ids(&table.sorted()), vec![9, 5, 2]);
}

#[test]
fn test_sorted_is_stable_across_calls() {
    let table = TaskTable::from_parts(
        1,
        vec![task(1, 10), task(2, 10), task(3, 5), task(4, 20)],
    );

    let first = table.sorted();
    for _ in 0..10 {
        assert_eq!(table.sorted(), first);
    }
}

#[test]
fn test_iter_is_ascending_by_id() {
    let table = TaskTable::from_parts(1, vec![task(3, 1), task(1, 2), task(2, 3)]);

    let order: Vec<i64> = table.iter().map(|t| t.id).collect();
    assert_eq!(order, vec![1, 2, 3]);
}
