//! Application services for the task store.

mod lifecycle;

pub use lifecycle::{
    CreateTaskRequest, ListTasksRequest, TaskLifecycleError, TaskLifecycleResult,
    TaskLifecycleService, UpdateTaskRequest,
};
