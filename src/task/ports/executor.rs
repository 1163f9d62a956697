//! Query execution port shared by task lookup implementations.
//!
//! Lookups never assemble SQL from user input. They hand the executor a
//! fixed query string, at most one typed parameter to bind, and a row
//! mapper; the executor runs the query and feeds each result row through
//! the mapper. Keeping the query text `&'static str` makes string-built
//! SQL unrepresentable at this boundary.

use crate::task::domain::Task;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for query executor operations.
pub type QueryExecutorResult<T> = Result<T, QueryExecutorError>;

/// Typed value bound to the single placeholder of a lookup query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// 64-bit integer parameter, used for task identifiers.
    BigInt(i64),
    /// 32-bit integer parameter, used for priorities.
    Int(i32),
    /// Text parameter, used for usernames, emails, and status labels.
    Text(String),
}

/// One raw result row, already decoded into typed columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    /// Task identifier column.
    pub id: i64,
    /// Task title column.
    pub title: String,
    /// Free-text description column.
    pub about: String,
    /// Status label column.
    pub status: String,
    /// Status priority column.
    pub priority: i32,
    /// Estimate window start column, in UTC.
    pub time_start: DateTime<Utc>,
    /// Estimate window end column, in UTC.
    pub time_end: DateTime<Utc>,
}

/// Row-to-task mapping contract.
///
/// Mapping is infallible: by the time a [`TaskRow`] exists, every column
/// has already been decoded, and decode failures surface from the executor
/// as [`QueryExecutorError::Execution`].
pub trait TaskRowMapper: Send + Sync {
    /// Maps one result row into a task.
    fn task(&self, row: TaskRow) -> Task;
}

/// Query execution contract.
pub trait QueryExecutor: Send + Sync {
    /// Runs a fixed query and maps every result row through `view`.
    ///
    /// `binding` carries the value for the query's single placeholder, or
    /// `None` for queries without parameters. A query that matches nothing
    /// produces `Ok` with an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`QueryExecutorError::Connection`] when no connection can be
    /// obtained and [`QueryExecutorError::Execution`] when the query fails
    /// to run or a row fails to decode.
    fn query(
        &self,
        query: &'static str,
        binding: Option<Binding>,
        view: &dyn TaskRowMapper,
    ) -> QueryExecutorResult<Vec<Task>>;
}

/// Errors returned by query executor implementations.
#[derive(Debug, Clone, Error)]
pub enum QueryExecutorError {
    /// A connection could not be obtained.
    #[error("connection error: {0}")]
    Connection(String),

    /// The query failed to execute or a result row failed to decode.
    #[error("query execution error: {0}")]
    Execution(Arc<dyn std::error::Error + Send + Sync>),
}

impl QueryExecutorError {
    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Wraps a query execution error.
    #[must_use]
    pub fn execution(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Execution(Arc::new(err))
    }
}

impl From<diesel::result::Error> for QueryExecutorError {
    fn from(err: diesel::result::Error) -> Self {
        // Row decode failures arrive here too; both are execution errors
        // from the caller's point of view.
        Self::execution(err)
    }
}
