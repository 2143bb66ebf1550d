//! HTTP surface of the task store.
//!
//! [`routes::build`] assembles the axum router. Every `/tasks` route sits
//! behind bearer-token authentication; `/health` is public. All routes are
//! served both at the root and under `/api`.

pub mod auth;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod schemas;
pub mod state;

pub use auth::{Authenticator, StaticTokenAuthenticator, UserId};
pub use error::ApiError;
pub use routes::build;
pub use state::{AppState, TaskService};
