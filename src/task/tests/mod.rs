//! Unit tests for the task retrieval module.
//!
//! Tests are organised by concern: domain value behaviour, the error
//! taxonomy and its conversions, the production executor's connection
//! handling, row-to-task mapping, and the lookup operations' interaction
//! with the query execution port. Shared fixtures live in `fixtures`.
