//! Fixed query text for task lookups.
//!
//! Every query selects the seven columns the row mapper reads: `id`,
//! `title`, `about`, `status`, `priority`, `time_start`, and `time_end`.
//! Filtered queries carry exactly one `$1` placeholder; caller input only
//! ever reaches the store through that placeholder, never through the
//! query text itself. The `tasks` and `users` tables are an external
//! schema contract this crate reads but does not define.

/// Selects the task with a given identifier.
pub const FIND_BY_ID: &str = concat!(
    "SELECT id, title, about, status, priority, time_start, time_end ",
    "FROM tasks WHERE id = $1",
);

/// Selects every stored task in the store's natural return order.
pub const FIND_ALL: &str = concat!(
    "SELECT id, title, about, status, priority, time_start, time_end ",
    "FROM tasks",
);

/// Selects the tasks assigned to a given username.
pub const FIND_BY_USERNAME: &str = concat!(
    "SELECT id, title, about, status, priority, time_start, time_end ",
    "FROM tasks WHERE username = $1",
);

/// Selects the tasks whose assignee has a given email, resolved through
/// the `users` table.
pub const FIND_BY_EMAIL: &str = concat!(
    "SELECT t.id, t.title, t.about, t.status, t.priority, t.time_start, t.time_end ",
    "FROM tasks t JOIN users u ON t.username = u.username ",
    "WHERE u.email = $1",
);

/// Selects the tasks with a given status priority.
pub const FIND_WITH_PRIORITY: &str = concat!(
    "SELECT id, title, about, status, priority, time_start, time_end ",
    "FROM tasks WHERE priority = $1",
);

/// Selects the tasks whose status carries a given label.
pub const FIND_WITH_STATUS: &str = concat!(
    "SELECT id, title, about, status, priority, time_start, time_end ",
    "FROM tasks WHERE status = $1",
);
