//! Shared application state injected into every handler.

use super::Authenticator;
use crate::task::{ports::TaskRepository, services::TaskLifecycleService};
use mockable::DefaultClock;
use std::sync::Arc;

/// Task service as wired into the server, over any repository.
pub type TaskService = TaskLifecycleService<dyn TaskRepository, DefaultClock>;

/// Services shared by all requests.
pub struct AppState {
    /// Task store operations.
    pub tasks: TaskService,
    /// Bearer-token verification.
    pub authenticator: Arc<dyn Authenticator>,
}

impl AppState {
    /// Creates state over `repository` using the system clock.
    #[must_use]
    pub fn new(
        repository: Arc<dyn TaskRepository>,
        authenticator: Arc<dyn Authenticator>,
        max_page_limit: u32,
    ) -> Self {
        Self {
            tasks: TaskLifecycleService::new(repository, Arc::new(DefaultClock))
                .with_max_page_limit(max_page_limit),
            authenticator,
        }
    }
}
