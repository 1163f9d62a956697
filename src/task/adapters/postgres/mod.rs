//! `PostgreSQL` adapters for task retrieval.
//!
//! [`PgTasks`] implements the lookup port over the fixed query text in
//! [`queries`], and [`PostgresQueryExecutor`] implements the execution
//! port on a pooled Diesel connection. The two compose but do not depend
//! on each other: `PgTasks` works against any executor implementation.

mod executor;
mod models;
pub mod queries;
mod tasks;
mod view;

pub use executor::{PostgresQueryExecutor, TaskPgPool};
pub use tasks::PgTasks;
pub use view::ViewTask;
