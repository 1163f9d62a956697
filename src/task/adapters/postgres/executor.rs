//! Query executor backed by a Diesel `PostgreSQL` connection pool.

use super::models::PgTaskRow;
use crate::task::domain::Task;
use crate::task::ports::{
    Binding, QueryExecutor, QueryExecutorError, QueryExecutorResult, TaskRowMapper,
};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_types::{BigInt, Integer, Text};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// [`QueryExecutor`] that runs lookups on pooled `PostgreSQL` connections.
///
/// Uses Diesel with connection pooling via r2d2. Thread-safe for concurrent
/// access; each call borrows one pooled connection for the duration of a
/// single query round-trip.
///
/// # Example
///
/// ```ignore
/// use diesel::r2d2::{ConnectionManager, Pool};
/// use diesel::PgConnection;
/// use taskviewer::task::adapters::postgres::{PgTasks, PostgresQueryExecutor};
///
/// let manager = ConnectionManager::<PgConnection>::new("postgres://...");
/// let pool = Pool::builder().build(manager).expect("pool");
/// let tasks = PgTasks::new(PostgresQueryExecutor::new(pool));
/// ```
#[derive(Debug, Clone)]
pub struct PostgresQueryExecutor {
    pool: TaskPgPool,
}

impl PostgresQueryExecutor {
    /// Creates an executor from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }
}

impl QueryExecutor for PostgresQueryExecutor {
    fn query(
        &self,
        query: &'static str,
        binding: Option<Binding>,
        view: &dyn TaskRowMapper,
    ) -> QueryExecutorResult<Vec<Task>> {
        let mut connection = self
            .pool
            .get()
            .map_err(|e| QueryExecutorError::connection(e.to_string()))?;

        let rows = load_rows(&mut connection, query, binding)?;
        Ok(rows.into_iter().map(|row| view.task(row.into())).collect())
    }
}

/// Runs `query` with its optional binding and decodes the result rows.
fn load_rows(
    connection: &mut PgConnection,
    query: &'static str,
    binding: Option<Binding>,
) -> QueryExecutorResult<Vec<PgTaskRow>> {
    let statement = diesel::sql_query(query);
    let rows = match binding {
        None => statement.load::<PgTaskRow>(connection)?,
        Some(Binding::BigInt(id)) => statement
            .bind::<BigInt, _>(id)
            .load::<PgTaskRow>(connection)?,
        Some(Binding::Int(value)) => statement
            .bind::<Integer, _>(value)
            .load::<PgTaskRow>(connection)?,
        Some(Binding::Text(value)) => statement
            .bind::<Text, _>(value)
            .load::<PgTaskRow>(connection)?,
    };
    Ok(rows)
}
