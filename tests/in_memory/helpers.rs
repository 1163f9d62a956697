//! Shared test helpers for in-memory lookup integration tests.

use chrono::{DateTime, Utc};
use rstest::fixture;
use taskviewer::task::adapters::memory::{InMemoryTasks, StoredTask};
use taskviewer::task::domain::{Status, Task, TimeEstimate};

/// Provides a fresh in-memory lookup for each test.
#[fixture]
pub fn tasks() -> InMemoryTasks {
    InMemoryTasks::new()
}

/// Returns the instant `secs` seconds after the Unix epoch.
///
/// # Errors
///
/// Returns an error when `secs` falls outside the representable range.
pub fn instant(secs: i64) -> Result<DateTime<Utc>, eyre::Report> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| eyre::eyre!("timestamp out of range: {secs}"))
}

/// Builds a task whose estimate window starts and ends at `secs`.
///
/// # Errors
///
/// Returns an error when the window instant cannot be represented.
pub fn build_task(
    id: i64,
    title: &str,
    about: &str,
    label: &str,
    priority: i32,
    secs: i64,
) -> Result<Task, eyre::Report> {
    let at = instant(secs)?;
    Ok(Task::new(
        id,
        title,
        about,
        Status::simple(label, priority),
        TimeEstimate::in_minutes(at, at),
    ))
}

/// Seeds two tasks under distinct assignees and returns them in insertion
/// order.
///
/// # Errors
///
/// Returns an error if any build or insert step fails.
pub fn seed_two_assignees(tasks: &InMemoryTasks) -> Result<(Task, Task), eyre::Report> {
    let first = build_task(1, "Test", "Task for test", "HIGH", 1, 6000)?;
    let second = build_task(2, "Review", "Review the fix", "MEDIUM", 2, 7200)?;

    tasks.insert(StoredTask::new("testUsername", "test@example.com", first.clone()))?;
    tasks.insert(StoredTask::new("otherUser", "other@example.com", second.clone()))?;

    Ok((first, second))
}

/// Asserts the result set contains exactly the expected task.
///
/// # Errors
///
/// Returns an error if the result set differs from `[expected]`.
pub fn verify_single_match(found: &[Task], expected: &Task) -> Result<(), eyre::Report> {
    eyre::ensure!(found.len() == 1, "expected exactly one task, found {}", found.len());
    let task = found.first().ok_or_else(|| eyre::eyre!("expected at least one task"))?;
    eyre::ensure!(task == expected, "task mismatch: {task:?}");
    Ok(())
}
