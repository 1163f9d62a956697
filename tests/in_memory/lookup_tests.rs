//! Lookup tests for [`InMemoryTasks`] driven through the `Tasks` port.
//!
//! Covers the single-task lookup's not-found contract and the plural
//! lookups' filter, ordering, and empty-result behaviour against seeded
//! stores.

use crate::in_memory::helpers::{build_task, seed_two_assignees, tasks, verify_single_match};
use rstest::rstest;
use taskviewer::task::adapters::memory::{InMemoryTasks, StoredTask};
use taskviewer::task::domain::Status;
use taskviewer::task::ports::{TaskQueryError, Tasks};

#[rstest]
fn task_returns_the_stored_task(tasks: InMemoryTasks) {
    let stored = build_task(1, "Test", "Task for test", "HIGH", 1, 6000).expect("valid task");
    tasks
        .insert(StoredTask::new("testUsername", "test@example.com", stored.clone()))
        .expect("insert should succeed");

    let found = tasks.task(1).expect("lookup should succeed");

    assert_eq!(found, stored);
}

#[rstest]
fn task_fails_with_not_found_when_nothing_matches(tasks: InMemoryTasks) {
    let error = tasks.task(0).expect_err("lookup should fail");

    assert_eq!(error.to_string(), "Task with id 0 not found");
    assert!(matches!(error, TaskQueryError::NotFound(_)));
}

#[rstest]
fn iterate_returns_every_stored_task_in_insertion_order(tasks: InMemoryTasks) {
    let (first, second) = seed_two_assignees(&tasks).expect("seeding should succeed");

    let found = tasks.iterate().expect("lookup should succeed");

    assert_eq!(found, vec![first, second]);
}

#[rstest]
fn by_username_returns_only_that_assignees_tasks(tasks: InMemoryTasks) {
    let (first, _second) = seed_two_assignees(&tasks).expect("seeding should succeed");

    let found = tasks.by_username("testUsername").expect("lookup should succeed");

    verify_single_match(&found, &first).expect("only testUsername's task should match");
}

#[rstest]
fn by_email_returns_only_that_assignees_tasks(tasks: InMemoryTasks) {
    let (_first, second) = seed_two_assignees(&tasks).expect("seeding should succeed");

    let found = tasks.by_email("other@example.com").expect("lookup should succeed");

    verify_single_match(&found, &second).expect("only the matching assignee's task should match");
}

#[rstest]
fn by_priority_returns_every_task_with_that_priority(tasks: InMemoryTasks) {
    let first = build_task(1, "Test", "Task for test", "HIGH", 1, 6000).expect("valid task");
    let second = build_task(2, "Another", "Second task", "URGENT", 1, 7200).expect("valid task");
    tasks
        .insert(StoredTask::new("testUsername", "test@example.com", first.clone()))
        .expect("insert should succeed");
    tasks
        .insert(StoredTask::new("otherUser", "other@example.com", second.clone()))
        .expect("insert should succeed");

    let found = tasks.by_priority(1).expect("lookup should succeed");

    assert_eq!(found, vec![first, second]);
}

#[rstest]
fn with_status_returns_every_task_with_that_label(tasks: InMemoryTasks) {
    let first = build_task(1, "Test", "Task for test", "HIGH", 1, 6000).expect("valid task");
    let second = build_task(2, "Another", "Second task", "HIGH", 1, 7200).expect("valid task");
    tasks
        .insert(StoredTask::new("testUsername", "test@example.com", first.clone()))
        .expect("insert should succeed");
    tasks
        .insert(StoredTask::new("otherUser", "other@example.com", second.clone()))
        .expect("insert should succeed");

    let found = tasks.with_status("HIGH").expect("lookup should succeed");

    assert_eq!(found, vec![first, second]);
    assert!(found.iter().all(|task| task.status() == &Status::simple("HIGH", 1)));
}

#[rstest]
fn plural_lookups_report_no_matches_as_empty(tasks: InMemoryTasks) {
    seed_two_assignees(&tasks).expect("seeding should succeed");

    assert!(tasks.by_username("unknownUser").expect("lookup").is_empty());
    assert!(tasks.by_email("unknown@example.com").expect("lookup").is_empty());
    assert!(tasks.by_priority(9).expect("lookup").is_empty());
    assert!(tasks.with_status("UNKNOWN").expect("lookup").is_empty());
}
