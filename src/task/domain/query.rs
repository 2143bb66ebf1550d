//! Filtering and pagination types for project task listings.

use super::{ProjectId, Task, TaskDomainError, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};

/// Page number and page size of a listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Page returned when the caller does not ask for one.
    pub const DEFAULT_PAGE: u32 = 1;
    /// Page size used when the caller does not ask for one.
    pub const DEFAULT_LIMIT: u32 = 10;
    /// Page size cap applied by the task service unless configured otherwise.
    pub const DEFAULT_MAX_LIMIT: u32 = 100;

    /// Creates a validated page request.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPage`] or
    /// [`TaskDomainError::InvalidLimit`] when either value is zero.
    pub const fn new(page: u32, limit: u32) -> Result<Self, TaskDomainError> {
        if page == 0 {
            return Err(TaskDomainError::InvalidPage);
        }
        if limit == 0 {
            return Err(TaskDomainError::InvalidLimit);
        }
        Ok(Self { page, limit })
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn limit(self) -> u32 {
        self.limit
    }

    /// Number of matching records skipped before this page.
    #[must_use]
    pub const fn offset(self) -> u64 {
        (self.page as u64 - 1) * self.limit as u64
    }

    /// Returns a copy whose page size does not exceed `max_limit`.
    #[must_use]
    pub fn capped(self, max_limit: u32) -> Self {
        Self {
            page: self.page,
            limit: self.limit.min(max_limit.max(1)),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// Inclusive deadline window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DeadlineRange {
    /// Creates an inclusive range.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvertedDeadlineRange`] when `start` is
    /// after `end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TaskDomainError> {
        if start > end {
            return Err(TaskDomainError::InvertedDeadlineRange);
        }
        Ok(Self { start, end })
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn start(self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn end(self) -> DateTime<Utc> {
        self.end
    }

    /// Returns `true` when `deadline` lies within the range, bounds included.
    #[must_use]
    pub fn contains(self, deadline: DateTime<Utc>) -> bool {
        self.start <= deadline && deadline <= self.end
    }
}

/// Exact-match and range filters applied within a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
    deadline: Option<DeadlineRange>,
}

impl TaskFilter {
    /// Restricts the listing to one status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts the listing to one priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restricts the listing to deadlines inside `range`.
    #[must_use]
    pub const fn with_deadline_range(mut self, range: DeadlineRange) -> Self {
        self.deadline = Some(range);
        self
    }

    /// Returns the status filter, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the priority filter, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Returns the deadline range, if any.
    #[must_use]
    pub const fn deadline_range(&self) -> Option<DeadlineRange> {
        self.deadline
    }

    /// Returns `true` when `task` passes every configured filter.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.status.is_none_or(|status| task.status() == status)
            && self.priority.is_none_or(|priority| task.priority() == priority)
            && self.deadline.is_none_or(|range| range.contains(task.deadline()))
    }
}

/// A complete listing request for one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskListQuery {
    project_id: ProjectId,
    filter: TaskFilter,
    page: PageRequest,
}

impl TaskListQuery {
    /// Creates a query for the first default-sized page of a project.
    #[must_use]
    pub fn new(project_id: ProjectId) -> Self {
        Self {
            project_id,
            filter: TaskFilter::default(),
            page: PageRequest::default(),
        }
    }

    /// Sets the filters.
    #[must_use]
    pub const fn with_filter(mut self, filter: TaskFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sets the page.
    #[must_use]
    pub const fn with_page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }

    /// Returns the project scope.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the filters.
    #[must_use]
    pub const fn filter(&self) -> &TaskFilter {
        &self.filter
    }

    /// Returns the page request.
    #[must_use]
    pub const fn page(&self) -> PageRequest {
        self.page
    }

    /// Returns `true` when `task` belongs to the project and passes the
    /// filters.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        task.project_id() == self.project_id && self.filter.matches(task)
    }
}

/// One page of matching tasks together with the unpaginated match count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPage {
    tasks: Vec<Task>,
    total: u64,
    page: u32,
    pages: u64,
}

impl TaskPage {
    /// Builds a page, deriving the page count from `total` and the request's
    /// page size.
    #[must_use]
    pub fn new(tasks: Vec<Task>, total: u64, request: PageRequest) -> Self {
        Self {
            tasks,
            total,
            page: request.page(),
            pages: total.div_ceil(u64::from(request.limit())),
        }
    }

    /// Returns the tasks on this page in storage order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Consumes the page, returning its tasks.
    #[must_use]
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    /// Returns the number of matching tasks across all pages.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the number of pages, `ceil(total / limit)`.
    #[must_use]
    pub const fn pages(&self) -> u64 {
        self.pages
    }
}
