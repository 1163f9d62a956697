//! Task retrieval for Taskviewer.
//!
//! This module implements the task query surface: looking a single task up by
//! identifier, listing every stored task, and filtering tasks by assignee
//! username, assignee email, priority, or status label. Each lookup runs a
//! fixed parameterised query through an injected executor and maps result
//! rows back into domain tasks. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
