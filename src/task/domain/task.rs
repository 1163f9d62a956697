//! Task entity returned by lookups.

use super::{Status, TimeEstimate};
use serde::{Deserialize, Serialize};

/// Stored task.
///
/// Tasks are read-only values on this side of the system: they are
/// reconstructed from storage rows and never mutated or written back.
/// Equality is structural, so a task built directly and one mapped from a
/// row compare equal when their fields match.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use taskviewer::task::domain::{Status, Task, TimeEstimate};
///
/// let at = DateTime::from_timestamp(6000, 0).expect("valid timestamp");
/// let task = Task::new(
///     1,
///     "Test",
///     "Task for test",
///     Status::simple("HIGH", 1),
///     TimeEstimate::in_minutes(at, at),
/// );
/// assert_eq!(task.id(), 1);
/// assert_eq!(task.title(), "Test");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: i64,
    title: String,
    about: String,
    status: Status,
    time: TimeEstimate,
}

impl Task {
    /// Creates a task from its stored fields.
    #[must_use]
    pub fn new(
        id: i64,
        title: impl Into<String>,
        about: impl Into<String>,
        status: Status,
        time: TimeEstimate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            about: about.into(),
            status,
            time,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the free-text task description.
    #[must_use]
    pub fn about(&self) -> &str {
        &self.about
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> &Status {
        &self.status
    }

    /// Returns the task time estimate.
    #[must_use]
    pub const fn time(&self) -> TimeEstimate {
        self.time
    }
}
