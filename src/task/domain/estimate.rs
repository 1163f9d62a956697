//! Time estimates attached to stored tasks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scheduled time window of a task.
///
/// Like [`Status`](super::Status), the estimate is open-ended; the only
/// stored variant today is a minute-resolution window bounded by two
/// instants. Window ordering is not validated here.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use taskviewer::task::domain::TimeEstimate;
///
/// let start = DateTime::from_timestamp(6000, 0).expect("valid timestamp");
/// let end = DateTime::from_timestamp(7200, 0).expect("valid timestamp");
/// let estimate = TimeEstimate::in_minutes(start, end);
/// assert_eq!(estimate.start(), start);
/// assert_eq!(estimate.end(), end);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimeEstimate {
    /// Minute-resolution window bounded by two instants.
    InMinutes {
        /// Window start, in UTC.
        start: DateTime<Utc>,
        /// Window end, in UTC.
        end: DateTime<Utc>,
    },
}

impl TimeEstimate {
    /// Creates a minute-resolution estimate from its window bounds.
    #[must_use]
    pub const fn in_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::InMinutes { start, end }
    }

    /// Returns the window start.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        match self {
            Self::InMinutes { start, .. } => *start,
        }
    }

    /// Returns the window end.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        match self {
            Self::InMinutes { end, .. } => *end,
        }
    }
}
