//! Workflow status attached to stored tasks.

use serde::{Deserialize, Serialize};

/// Workflow status of a task.
///
/// Status is deliberately open-ended: richer variants can be added without
/// touching lookup or mapping code. Every task currently stored carries a
/// [`Status::Simple`] value.
///
/// # Examples
///
/// ```
/// use taskviewer::task::domain::Status;
///
/// let status = Status::simple("HIGH", 1);
/// assert_eq!(status.label(), "HIGH");
/// assert_eq!(status.priority(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Status {
    /// Label-and-priority status.
    Simple {
        /// Human-readable status label, stored verbatim.
        label: String,
        /// Numeric urgency rank paired with the label.
        priority: i32,
    },
}

impl Status {
    /// Creates a simple status from a label and priority.
    #[must_use]
    pub fn simple(label: impl Into<String>, priority: i32) -> Self {
        Self::Simple {
            label: label.into(),
            priority,
        }
    }

    /// Returns the status label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Simple { label, .. } => label,
        }
    }

    /// Returns the numeric priority.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        match self {
            Self::Simple { priority, .. } => *priority,
        }
    }
}
