// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and readiness endpoints for load balancers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite

//! Health check routes for service monitoring

use crate::config::ServerConfig;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(config: Arc<ServerConfig>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(config)
    }

    async fn handle_health(State(config): State<Arc<ServerConfig>>) -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": config.service_name,
            "version": env!("CARGO_PKG_VERSION"),
            "environment": config.environment.to_string(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    // Nothing to warm up, so readiness follows liveness.
    async fn handle_ready(State(config): State<Arc<ServerConfig>>) -> Json<Value> {
        Json(json!({
            "status": "ready",
            "service": config.service_name,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}
