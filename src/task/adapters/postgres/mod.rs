//! `PostgreSQL` adapters for task persistence.

mod models;
mod repository;
mod schema;

pub use repository::{CREATE_TASKS_SQL, PostgresTaskRepository, TaskPgPool};
