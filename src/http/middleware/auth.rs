//! Bearer-token guard for the task routes.

use crate::http::{ApiError, AppState};
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{Span, debug};

/// Rejects requests without a recognised `Authorization: Bearer` token.
///
/// On success the resolved [`crate::http::UserId`] is inserted into the
/// request extensions and recorded on the current request span.
pub async fn require_bearer(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Response {
    let resolved = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
        .and_then(|token| state.authenticator.authenticate(token));

    let Some(user) = resolved else {
        debug!("missing or unknown bearer token");
        return ApiError::Unauthorized.into_response();
    };

    Span::current().record("user", user.as_str());
    req.extensions_mut().insert(user);
    next.run(req).await
}

/// Extracts the credential from an `Authorization` header value.
///
/// The scheme name is matched case-insensitively (RFC 7235).
#[must_use]
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, credential) = header.trim_start().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = credential.trim();
    (!token.is_empty()).then_some(token)
}
