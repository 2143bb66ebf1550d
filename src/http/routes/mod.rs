//! Axum router construction.

mod health;
mod tasks;

use super::{
    AppState,
    middleware::{require_bearer, trace_requests},
};
use axum::{Router, middleware};
use std::sync::Arc;

/// Builds the complete application router.
///
/// Routes are mounted at the root and again under `/api`. Authentication is
/// attached as a route layer, so unmatched paths answer `404` without
/// consulting credentials.
pub fn build(state: Arc<AppState>) -> Router {
    let tasks = tasks::router().route_layer(middleware::from_fn_with_state(
        Arc::clone(&state),
        require_bearer,
    ));
    let api = Router::new().merge(health::router()).merge(tasks);

    Router::new()
        .merge(api.clone())
        .nest("/api", api)
        .layer(middleware::from_fn(trace_requests))
        .with_state(state)
}
