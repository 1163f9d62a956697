//! Taskviewer: typed retrieval of task records from a relational store.
//!
//! This crate is the read side of a task-viewer backend: a fixed set of
//! parameterised lookups over stored tasks, and the mapping that rebuilds a
//! strongly-typed [`task::domain::Task`] (with its [`task::domain::Status`]
//! and [`task::domain::TimeEstimate`] variants) from one raw result row.
//!
//! # Architecture
//!
//! Taskviewer follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task values with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for lookups and query execution
//! - **Adapters**: Concrete implementations of ports (`PostgreSQL`, in-memory)
//!
//! The [`task::ports::Tasks`] port exposes one single-entity lookup and five
//! plural lookups. Absence behaves differently on the two shapes: the
//! single-entity lookup fails with [`task::domain::TaskNotFound`], while a
//! plural lookup that matches nothing returns an empty, valid sequence.

pub mod task;
