//! Error type for failed single-task lookup.

use thiserror::Error;

/// Error returned when no stored task matches a requested identifier.
///
/// Only the single-task lookup produces this error; lookups that return
/// sequences report an unmatched filter as an empty result instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Task with id {id} not found")]
pub struct TaskNotFound {
    /// Identifier that matched no stored task.
    pub id: i64,
}

impl TaskNotFound {
    /// Creates a not-found error for the given identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self { id }
    }
}
