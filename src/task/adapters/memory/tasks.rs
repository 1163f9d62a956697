//! In-memory implementation of the task lookup port.
//!
//! Provides a simple, thread-safe lookup for unit testing without
//! database dependencies. Not suitable for production use.

use std::sync::{Arc, RwLock};

use crate::task::domain::{Task, TaskNotFound};
use crate::task::ports::{QueryExecutorError, TaskQueryResult, Tasks};

/// One stored task together with its assignment metadata.
///
/// Username and email live beside the task rather than on it, mirroring
/// the relational layout the production queries filter on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredTask {
    /// Assignee username.
    pub username: String,
    /// Assignee email.
    pub email: String,
    /// The stored task itself.
    pub task: Task,
}

impl StoredTask {
    /// Creates a stored task from its assignment metadata.
    #[must_use]
    pub fn new(username: impl Into<String>, email: impl Into<String>, task: Task) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            task,
        }
    }
}

/// In-memory implementation of [`Tasks`].
///
/// Thread-safe via internal [`RwLock`]. Lookups return tasks in insertion
/// order, standing in for the store's natural return order.
///
/// # Example
///
/// ```
/// use taskviewer::task::adapters::memory::InMemoryTasks;
/// use taskviewer::task::ports::Tasks;
///
/// let tasks = InMemoryTasks::new();
/// assert!(tasks.iterate().expect("lookup").is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryTasks {
    state: Arc<RwLock<Vec<StoredTask>>>,
}

impl InMemoryTasks {
    /// Creates an empty lookup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a stored task.
    ///
    /// # Errors
    ///
    /// Returns an executor error when the internal lock is poisoned.
    pub fn insert(&self, stored: StoredTask) -> TaskQueryResult<()> {
        let mut guard = self
            .state
            .write()
            .map_err(|e| QueryExecutorError::connection(format!("lock poisoned: {e}")))?;

        guard.push(stored);
        Ok(())
    }
}

impl Tasks for InMemoryTasks {
    fn task(&self, id: i64) -> TaskQueryResult<Task> {
        let guard = self
            .state
            .read()
            .map_err(|e| QueryExecutorError::connection(format!("lock poisoned: {e}")))?;

        guard
            .iter()
            .find(|stored| stored.task.id() == id)
            .map(|stored| stored.task.clone())
            .ok_or_else(|| TaskNotFound::new(id).into())
    }

    fn iterate(&self) -> TaskQueryResult<Vec<Task>> {
        let guard = self
            .state
            .read()
            .map_err(|e| QueryExecutorError::connection(format!("lock poisoned: {e}")))?;

        Ok(guard.iter().map(|stored| stored.task.clone()).collect())
    }

    fn by_username(&self, username: &str) -> TaskQueryResult<Vec<Task>> {
        let guard = self
            .state
            .read()
            .map_err(|e| QueryExecutorError::connection(format!("lock poisoned: {e}")))?;

        Ok(guard
            .iter()
            .filter(|stored| stored.username == username)
            .map(|stored| stored.task.clone())
            .collect())
    }

    fn by_email(&self, email: &str) -> TaskQueryResult<Vec<Task>> {
        let guard = self
            .state
            .read()
            .map_err(|e| QueryExecutorError::connection(format!("lock poisoned: {e}")))?;

        Ok(guard
            .iter()
            .filter(|stored| stored.email == email)
            .map(|stored| stored.task.clone())
            .collect())
    }

    fn by_priority(&self, priority: i32) -> TaskQueryResult<Vec<Task>> {
        let guard = self
            .state
            .read()
            .map_err(|e| QueryExecutorError::connection(format!("lock poisoned: {e}")))?;

        Ok(guard
            .iter()
            .filter(|stored| stored.task.status().priority() == priority)
            .map(|stored| stored.task.clone())
            .collect())
    }

    fn with_status(&self, label: &str) -> TaskQueryResult<Vec<Task>> {
        let guard = self
            .state
            .read()
            .map_err(|e| QueryExecutorError::connection(format!("lock poisoned: {e}")))?;

        Ok(guard
            .iter()
            .filter(|stored| stored.task.status().label() == label)
            .map(|stored| stored.task.clone())
            .collect())
    }
}
