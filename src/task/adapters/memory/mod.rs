//! In-memory adapters for task retrieval tests.

mod tasks;

pub use tasks::{InMemoryTasks, StoredTask};
