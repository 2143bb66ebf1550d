//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Title.
    pub title: String,
    /// Status in storage vocabulary.
    pub status: String,
    /// Priority.
    pub priority: String,
    /// Due date.
    pub deadline: DateTime<Utc>,
    /// Owning project.
    pub project_id: uuid::Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records. `seq` is assigned by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Title.
    pub title: String,
    /// Status in storage vocabulary.
    pub status: String,
    /// Priority.
    pub priority: String,
    /// Due date.
    pub deadline: DateTime<Utc>,
    /// Owning project.
    pub project_id: uuid::Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Changeset for the mutable task columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangesetRow {
    /// Title.
    pub title: String,
    /// Status in storage vocabulary.
    pub status: String,
    /// Priority.
    pub priority: String,
    /// Due date.
    pub deadline: DateTime<Utc>,
}
