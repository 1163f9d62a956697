//! Row-to-task mapping shared by every lookup.

use crate::task::domain::{Status, Task, TimeEstimate};
use crate::task::ports::{TaskRow, TaskRowMapper};

/// Maps one result row into a [`Task`].
///
/// Mapping is a pure function of the row: the `status` and `priority`
/// columns rebuild [`Status::Simple`], the two time columns rebuild
/// [`TimeEstimate::InMinutes`]. One shared instance serves all lookups.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewTask;

impl ViewTask {
    /// Creates a row mapper.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TaskRowMapper for ViewTask {
    fn task(&self, row: TaskRow) -> Task {
        let TaskRow {
            id,
            title,
            about,
            status,
            priority,
            time_start,
            time_end,
        } = row;

        Task::new(
            id,
            title,
            about,
            Status::Simple {
                label: status,
                priority,
            },
            TimeEstimate::InMinutes {
                start: time_start,
                end: time_end,
            },
        )
    }
}
