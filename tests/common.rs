// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Builds the full router and sends form and page requests through it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `parenting_assistant`

use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use parenting_assistant::{config::ServerConfig, server::build_router};
use serde_json::Value;
use std::sync::{Arc, Once};
use tower::ServiceExt;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Router built from default configuration
pub fn test_app() -> Router {
    test_app_with(ServerConfig::default())
}

/// Router built from the given configuration
pub fn test_app_with(config: ServerConfig) -> Router {
    init_test_logging();
    build_router(Arc::new(config))
}

/// Response status, headers of interest, and raw body
pub struct TestResponse {
    pub status: StatusCode,
    pub request_id: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    /// Parse the body as JSON
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Send a request through a fresh copy of the router
pub async fn send(app: &Router, request: Request<Body>) -> Result<TestResponse> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let header_string = |name: &str| {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };
    let request_id = header_string("x-request-id");
    let content_type = header_string(header::CONTENT_TYPE.as_str());

    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(TestResponse {
        status,
        request_id,
        content_type,
        body: String::from_utf8(bytes.to_vec())?,
    })
}

/// POST a URL-encoded form
pub async fn post_form(app: &Router, path: &str, fields: &[(&str, &str)]) -> Result<TestResponse> {
    let body = serde_urlencoded::to_string(fields)?;
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))?;
    send(app, request).await
}

/// GET a path
pub async fn get(app: &Router, path: &str) -> Result<TestResponse> {
    let request = Request::builder().uri(path).body(Body::empty())?;
    send(app, request).await
}
