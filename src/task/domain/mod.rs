//! Domain model for project tasks.
//!
//! The task domain owns field validation (enumerated status and priority,
//! non-empty titles, deadlines) and the listing filter semantics, while
//! keeping every infrastructure concern outside of the domain boundary.

mod deadline;
mod error;
mod ids;
mod query;
mod task;

pub use deadline::parse_deadline;
pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::{ProjectId, TaskId, TaskTitle};
pub use query::{DeadlineRange, PageRequest, TaskFilter, TaskListQuery, TaskPage};
pub use task::{NewTask, PersistedTaskData, Task, TaskChanges, TaskPriority, TaskStatus};
