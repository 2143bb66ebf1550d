//! Per-request tracing span.

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{Instrument, field::Empty, info, info_span};
use uuid::Uuid;

/// Header carrying the request correlation id.
pub static X_TRACE_ID: &str = "x-trace-id";

/// Wraps each request in an `http_request` span and logs its outcome.
///
/// An incoming `x-trace-id` UUID is reused; otherwise a new one is minted.
/// The id is echoed back on the response.
pub async fn trace_requests(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let trace_id = req
        .headers()
        .get(X_TRACE_ID)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok())
        .unwrap_or_else(Uuid::new_v4);

    let span = info_span!(
        "http_request",
        trace_id = %trace_id,
        method = %req.method(),
        path = %req.uri().path(),
        user = Empty,
    );

    async move {
        let mut response = next.run(req).await;
        if let Ok(value) = HeaderValue::from_str(&trace_id.to_string()) {
            response.headers_mut().insert(X_TRACE_ID, value);
        }
        info!(
            status = response.status().as_u16(),
            latency_ms = start.elapsed().as_millis(),
            "request finished"
        );
        response
    }
    .instrument(span)
    .await
}
