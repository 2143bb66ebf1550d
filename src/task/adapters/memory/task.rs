//! In-memory task repository used by tests and the zero-config server.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{ProjectId, Task, TaskId, TaskListQuery, TaskPage},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Records are kept in insertion order, which is the natural storage order
/// that listings report.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
}

impl InMemoryTaskState {
    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if state.position(task.id()).is_some() {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        state.tasks.push(task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        let slot = state
            .tasks
            .iter_mut()
            .find(|stored| stored.id() == task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *slot = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.iter().find(|task| task.id() == id).cloned())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        let index = state.position(id).ok_or(TaskRepositoryError::NotFound(id))?;
        state.tasks.remove(index);
        Ok(())
    }

    async fn delete_by_project(&self, project_id: ProjectId) -> TaskRepositoryResult<u64> {
        let mut state = self.write()?;
        let before = state.tasks.len();
        state.tasks.retain(|task| task.project_id() != project_id);
        let removed = before.saturating_sub(state.tasks.len());
        u64::try_from(removed).map_err(TaskRepositoryError::persistence)
    }

    async fn list(&self, query: &TaskListQuery) -> TaskRepositoryResult<TaskPage> {
        let state = self.read()?;
        let page = query.page();
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);

        let matching: Vec<&Task> = state.tasks.iter().filter(|task| query.matches(task)).collect();
        let total = u64::try_from(matching.len()).map_err(TaskRepositoryError::persistence)?;
        let tasks = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        Ok(TaskPage::new(tasks, total, page))
    }
}
