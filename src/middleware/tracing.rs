// ABOUTME: Request tracing helpers for correlation and structured logging
// ABOUTME: Builds the per-request span used by tower-http's TraceLayer

use super::request_id::RequestId;
use axum::{
    body::Body,
    http::{Request, Response},
};
use std::time::Duration;
use tracing::Span;

/// Create a tracing span for HTTP requests
pub fn create_request_span(method: &str, path: &str, request_id: &str) -> Span {
    tracing::info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = %request_id,
        status_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    )
}

/// `MakeSpan` callback for `TraceLayer`, reading the ID set by the request ID middleware
pub fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map_or("unknown", RequestId::as_str);

    create_request_span(request.method().as_str(), request.uri().path(), request_id)
}

/// `OnResponse` callback for `TraceLayer`, filling the span's status and latency fields
pub fn record_response(response: &Response<Body>, latency: Duration, span: &Span) {
    let duration_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
    span.record("status_code", response.status().as_u16());
    span.record("duration_ms", duration_ms);
    tracing::debug!(
        status_code = response.status().as_u16(),
        duration_ms,
        "Request completed"
    );
}
