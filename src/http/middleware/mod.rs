//! Request middleware: tracing spans and bearer authentication.

pub mod auth;
pub mod trace;

pub use auth::require_bearer;
pub use trace::{X_TRACE_ID, trace_requests};
