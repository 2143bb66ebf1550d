//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangesetRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{
        PersistedTaskData, ProjectId, Task, TaskId, TaskListQuery, TaskPage, TaskPriority,
        TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Schema applied by [`PostgresTaskRepository::apply_schema`].
pub const CREATE_TASKS_SQL: &str =
    include_str!("../../../../migrations/2026-10-19-000000_create_tasks/up.sql");

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    /// Creates the `tasks` table and its index when they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when a connection cannot
    /// be obtained or the DDL fails.
    pub async fn apply_schema(&self) -> TaskRepositoryResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(CREATE_TASKS_SQL)
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changeset = to_changeset(task);

        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.find(task_id.into_inner()))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(tasks::table.find(id.into_inner()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<u64> {
        self.run_blocking(move |connection| {
            let affected =
                diesel::delete(tasks::table.filter(tasks::project_id.eq(project_id.into_inner())))
                    .execute(connection)
                    .map_err(TaskRepositoryError::persistence)?;
            u64::try_from(affected).map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn list(&self, query: &TaskListQuery) -> TaskRepositoryResult<TaskPage> {
        let list_query = *query;
        self.run_blocking(move |connection| {
            let page = list_query.page();
            let offset = i64::try_from(page.offset()).map_err(TaskRepositoryError::persistence)?;

            let matched = filtered_tasks(&list_query)
                .count()
                .get_result::<i64>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            let rows = filtered_tasks(&list_query)
                .order(tasks::seq.asc())
                .offset(offset)
                .limit(i64::from(page.limit()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;

            let tasks = rows
                .into_iter()
                .map(row_to_task)
                .collect::<TaskRepositoryResult<Vec<_>>>()?;
            let total = u64::try_from(matched).map_err(TaskRepositoryError::persistence)?;
            Ok(TaskPage::new(tasks, total, page))
        })
        .await
    }
}

/// Builds the project-scoped, filtered selection shared by the count and
/// page queries.
fn filtered_tasks(query: &TaskListQuery) -> tasks::BoxedQuery<'static, Pg> {
    let filter = query.filter();
    let mut statement = tasks::table
        .into_boxed()
        .filter(tasks::project_id.eq(query.project_id().into_inner()));
    if let Some(status) = filter.status() {
        statement = statement.filter(tasks::status.eq(status.as_str()));
    }
    if let Some(priority) = filter.priority() {
        statement = statement.filter(tasks::priority.eq(priority.as_str()));
    }
    if let Some(range) = filter.deadline_range() {
        statement = statement
            .filter(tasks::deadline.ge(range.start()))
            .filter(tasks::deadline.le(range.end()));
    }
    statement
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        deadline: task.deadline(),
        project_id: task.project_id().into_inner(),
        created_at: task.created_at(),
    }
}

fn to_changeset(task: &Task) -> TaskChangesetRow {
    TaskChangesetRow {
        title: task.title().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        deadline: task.deadline(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        status,
        priority,
        deadline,
        project_id,
        created_at,
    } = row;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        title: TaskTitle::new(title).map_err(TaskRepositoryError::persistence)?,
        status: TaskStatus::try_from(status.as_str()).map_err(TaskRepositoryError::persistence)?,
        priority: TaskPriority::try_from(priority.as_str())
            .map_err(TaskRepositoryError::persistence)?,
        deadline,
        project_id: ProjectId::from_uuid(project_id),
        created_at,
    };
    Ok(Task::from_persisted(data))
}
