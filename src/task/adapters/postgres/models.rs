//! Diesel row models for task lookup queries.

use crate::task::ports::TaskRow;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Result row decoded from the fixed task lookup queries.
///
/// Decoded by column name, so every query must select exactly the columns
/// named here.
#[derive(Debug, Clone, QueryableByName)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PgTaskRow {
    /// Task identifier column.
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    pub id: i64,
    /// Title column.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub title: String,
    /// Description column.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub about: String,
    /// Status label column.
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub status: String,
    /// Status priority column.
    #[diesel(sql_type = diesel::sql_types::Integer)]
    pub priority: i32,
    /// Estimate window start column.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub time_start: DateTime<Utc>,
    /// Estimate window end column.
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub time_end: DateTime<Utc>,
}

impl From<PgTaskRow> for TaskRow {
    fn from(row: PgTaskRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            about: row.about,
            status: row.status,
            priority: row.priority,
            time_start: row.time_start,
            time_end: row.time_end,
        }
    }
}
