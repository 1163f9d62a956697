//! Domain model for task retrieval.
//!
//! The task domain models stored tasks together with their polymorphic
//! status and time estimate, and the failure raised when a single-task
//! lookup matches nothing, while keeping all infrastructure concerns
//! outside of the domain boundary.

mod error;
mod estimate;
mod status;
mod task;

pub use error::TaskNotFound;
pub use estimate::TimeEstimate;
pub use status::Status;
pub use task::Task;
