//! Adapters for the task retrieval ports.
//!
//! This module provides concrete implementations of the [`Tasks`] and
//! [`QueryExecutor`] ports, following hexagonal architecture principles.
//! Adapters handle all infrastructure concerns while the domain remains
//! pure.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryTasks`]: Thread-safe in-memory lookup for unit
//!   testing
//! - [`postgres::PgTasks`]: Lookup over fixed SQL queries run through any
//!   [`QueryExecutor`]
//! - [`postgres::PostgresQueryExecutor`]: Production-grade executor backed
//!   by a Diesel `PostgreSQL` connection pool
//!
//! [`Tasks`]: crate::task::ports::Tasks
//! [`QueryExecutor`]: crate::task::ports::QueryExecutor

pub mod memory;
pub mod postgres;
