//! Diesel schema for task persistence.

diesel::table! {
    /// Task records scoped to a project.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Insertion sequence; defines natural storage order.
        seq -> Int8,
        /// Trimmed, non-empty title.
        #[max_length = 500]
        title -> Varchar,
        /// Workflow status in storage vocabulary.
        #[max_length = 20]
        status -> Varchar,
        /// Task priority.
        #[max_length = 20]
        priority -> Varchar,
        /// Due date.
        deadline -> Timestamptz,
        /// Owning project.
        project_id -> Uuid,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
