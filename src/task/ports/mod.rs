//! Port contracts for task retrieval.
//!
//! Ports define infrastructure-agnostic interfaces between lookup callers,
//! lookup implementations, and the query execution layer.

pub mod executor;
pub mod tasks;

pub use executor::{
    Binding, QueryExecutor, QueryExecutorError, QueryExecutorResult, TaskRow, TaskRowMapper,
};
pub use tasks::{TaskQueryError, TaskQueryResult, Tasks};
