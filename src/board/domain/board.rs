//! Three-column grouping of a project's tasks.

use super::BoardColumn;
use crate::task::domain::{Task, TaskId};

/// In-memory Kanban board.
///
/// Each task lives in exactly one column. Columns keep fetch order; moved
/// and added tasks are appended to the end of their target column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    todo: Vec<Task>,
    in_progress: Vec<Task>,
    done: Vec<Task>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Partitions tasks into columns by their status, preserving input order
    /// within each column.
    #[must_use]
    pub fn group(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut board = Self::new();
        for task in tasks {
            board.insert(task);
        }
        board
    }

    /// Returns the tasks in `column`.
    #[must_use]
    pub fn column(&self, column: BoardColumn) -> &[Task] {
        match column {
            BoardColumn::Todo => &self.todo,
            BoardColumn::InProgress => &self.in_progress,
            BoardColumn::Done => &self.done,
        }
    }

    /// Iterates over the columns in board order.
    pub fn columns(&self) -> impl Iterator<Item = (BoardColumn, &[Task])> {
        BoardColumn::ALL
            .into_iter()
            .map(move |column| (column, self.column(column)))
    }

    /// Returns the total number of tasks on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    /// Returns `true` when no column holds a task.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the column holding `task_id`, if any.
    #[must_use]
    pub fn locate(&self, task_id: TaskId) -> Option<BoardColumn> {
        self.columns()
            .find(|(_, tasks)| tasks.iter().any(|task| task.id() == task_id))
            .map(|(column, _)| column)
    }

    /// Returns the task with `task_id`, if it is on the board.
    #[must_use]
    pub fn get(&self, task_id: TaskId) -> Option<&Task> {
        self.columns()
            .flat_map(|(_, tasks)| tasks.iter())
            .find(|task| task.id() == task_id)
    }

    /// Appends a task to the column matching its status.
    pub fn insert(&mut self, task: Task) {
        let column = BoardColumn::from(task.status());
        self.column_mut(column).push(task);
    }

    /// Moves a task to the end of `target`, updating its status and keeping
    /// every other field. Returns `false` when the task is not on the board.
    pub fn relocate(&mut self, task_id: TaskId, target: BoardColumn) -> bool {
        let Some(mut task) = self.remove(task_id) else {
            return false;
        };
        task.set_status(target.to_status());
        self.column_mut(target).push(task);
        true
    }

    /// Removes a task from whichever column holds it.
    pub fn remove(&mut self, task_id: TaskId) -> Option<Task> {
        let column = self.locate(task_id)?;
        let tasks = self.column_mut(column);
        let index = tasks.iter().position(|task| task.id() == task_id)?;
        Some(tasks.remove(index))
    }

    const fn column_mut(&mut self, column: BoardColumn) -> &mut Vec<Task> {
        match column {
            BoardColumn::Todo => &mut self.todo,
            BoardColumn::InProgress => &mut self.in_progress,
            BoardColumn::Done => &mut self.done,
        }
    }
}
