//! Task lookup over fixed `PostgreSQL` queries.

use super::queries;
use super::view::ViewTask;
use crate::task::domain::{Task, TaskNotFound};
use crate::task::ports::{Binding, QueryExecutor, TaskQueryResult, Tasks};

/// Task lookup backed by the fixed queries in [`queries`].
///
/// Each call binds at most one parameter into a statically fixed query and
/// hands the shared [`ViewTask`] mapper to the executor. The struct holds
/// no per-call state, so one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct PgTasks<E> {
    executor: E,
    view: ViewTask,
}

impl<E> PgTasks<E> {
    /// Creates a lookup over the given executor.
    #[must_use]
    pub const fn new(executor: E) -> Self {
        Self {
            executor,
            view: ViewTask::new(),
        }
    }
}

impl<E: QueryExecutor> Tasks for PgTasks<E> {
    fn task(&self, id: i64) -> TaskQueryResult<Task> {
        let tasks = self
            .executor
            .query(queries::FIND_BY_ID, Some(Binding::BigInt(id)), &self.view)?;

        // The id column is unique by schema contract; should a duplicate
        // ever appear, the first row wins.
        tasks
            .into_iter()
            .next()
            .ok_or_else(|| TaskNotFound::new(id).into())
    }

    fn iterate(&self) -> TaskQueryResult<Vec<Task>> {
        Ok(self.executor.query(queries::FIND_ALL, None, &self.view)?)
    }

    fn by_username(&self, username: &str) -> TaskQueryResult<Vec<Task>> {
        Ok(self.executor.query(
            queries::FIND_BY_USERNAME,
            Some(Binding::Text(username.to_owned())),
            &self.view,
        )?)
    }

    fn by_email(&self, email: &str) -> TaskQueryResult<Vec<Task>> {
        Ok(self.executor.query(
            queries::FIND_BY_EMAIL,
            Some(Binding::Text(email.to_owned())),
            &self.view,
        )?)
    }

    fn by_priority(&self, priority: i32) -> TaskQueryResult<Vec<Task>> {
        Ok(self.executor.query(
            queries::FIND_WITH_PRIORITY,
            Some(Binding::Int(priority)),
            &self.view,
        )?)
    }

    fn with_status(&self, label: &str) -> TaskQueryResult<Vec<Task>> {
        Ok(self.executor.query(
            queries::FIND_WITH_STATUS,
            Some(Binding::Text(label.to_owned())),
            &self.view,
        )?)
    }
}
