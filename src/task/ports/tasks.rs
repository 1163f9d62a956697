//! Lookup port for stored tasks.

use super::executor::QueryExecutorError;
use crate::task::domain::{Task, TaskNotFound};
use thiserror::Error;

/// Result type for task lookup operations.
pub type TaskQueryResult<T> = Result<T, TaskQueryError>;

/// Task lookup contract.
///
/// One single-task lookup and five plural lookups. The two shapes treat
/// absence differently: [`Tasks::task`] fails with [`TaskNotFound`] when
/// nothing matches, while every plural lookup reports an unmatched filter
/// as an empty vector.
pub trait Tasks: Send + Sync {
    /// Returns the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskQueryError::NotFound`] when no stored task matches and
    /// [`TaskQueryError::Executor`] when query execution fails.
    fn task(&self, id: i64) -> TaskQueryResult<Task>;

    /// Returns every stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskQueryError::Executor`] when query execution fails.
    fn iterate(&self) -> TaskQueryResult<Vec<Task>>;

    /// Returns the tasks assigned to the given username.
    ///
    /// # Errors
    ///
    /// Returns [`TaskQueryError::Executor`] when query execution fails.
    fn by_username(&self, username: &str) -> TaskQueryResult<Vec<Task>>;

    /// Returns the tasks whose assignee has the given email.
    ///
    /// # Errors
    ///
    /// Returns [`TaskQueryError::Executor`] when query execution fails.
    fn by_email(&self, email: &str) -> TaskQueryResult<Vec<Task>>;

    /// Returns the tasks with the given status priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskQueryError::Executor`] when query execution fails.
    fn by_priority(&self, priority: i32) -> TaskQueryResult<Vec<Task>>;

    /// Returns the tasks whose status carries the given label.
    ///
    /// # Errors
    ///
    /// Returns [`TaskQueryError::Executor`] when query execution fails.
    fn with_status(&self, label: &str) -> TaskQueryResult<Vec<Task>>;
}

/// Errors returned by task lookup implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskQueryError {
    /// No stored task matched a single-task lookup.
    #[error(transparent)]
    NotFound(#[from] TaskNotFound),

    /// The underlying query execution failed.
    #[error(transparent)]
    Executor(#[from] QueryExecutorError),
}
