// ABOUTME: HTTP server assembly: router composition, middleware stack, and listener lifecycle
// ABOUTME: Binds the configured address and shuts down gracefully on Ctrl+C or SIGTERM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite

//! # Server
//!
//! [`build_router`] is the single place where routes and middleware are
//! composed. It is used both by [`run`] and by the integration tests.

use crate::{
    config::ServerConfig,
    errors::AppError,
    middleware::{
        make_request_span, record_response, request_id_middleware, setup_cors, RequestId,
    },
    routes::{EmotionsRoutes, HealthRoutes, HomeRoutes, MealsRoutes, PlannerRoutes},
};
use anyhow::{Context, Result};
use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::{Method, Uri},
    middleware, BoxError, Extension, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::{timeout::error::Elapsed, ServiceBuilder};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

/// Compose every route with the shared middleware stack
pub fn build_router(config: Arc<ServerConfig>) -> Router {
    let static_files = ServeDir::new(&config.static_dir);

    Router::new()
        .merge(HomeRoutes::routes(Arc::clone(&config)))
        .merge(PlannerRoutes::routes(Arc::clone(&config)))
        .merge(MealsRoutes::routes(Arc::clone(&config)))
        .merge(EmotionsRoutes::routes(Arc::clone(&config)))
        .merge(HealthRoutes::routes(Arc::clone(&config)))
        .method_not_allowed_fallback(handle_method_not_allowed)
        .nest_service("/static", static_files)
        .fallback(handle_not_found)
        .layer(DefaultBodyLimit::max(config.max_form_bytes))
        .layer(
            ServiceBuilder::new()
                .layer(setup_cors(&config.cors))
                .layer(middleware::from_fn(request_id_middleware))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(make_request_span)
                        .on_response(record_response),
                )
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(config.request_timeout),
        )
}

fn attach_request_id(error: AppError, request_id: Option<Extension<RequestId>>) -> AppError {
    match request_id {
        Some(Extension(id)) => error.with_request_id(id.as_str()),
        None => error,
    }
}

async fn handle_not_found(
    request_id: Option<Extension<RequestId>>,
    method: Method,
    uri: Uri,
) -> AppError {
    attach_request_id(
        AppError::not_found(format!("Route {method} {}", uri.path())),
        request_id,
    )
}

async fn handle_method_not_allowed(
    request_id: Option<Extension<RequestId>>,
    method: Method,
    uri: Uri,
) -> AppError {
    attach_request_id(AppError::method_not_allowed(method, uri.path()), request_id)
}

/// Turn errors raised by the timeout layer into the JSON error envelope
async fn handle_middleware_error(
    request_id: Option<Extension<RequestId>>,
    method: Method,
    uri: Uri,
    error: BoxError,
) -> AppError {
    let error = if error.is::<Elapsed>() {
        AppError::request_timeout(format!("{method} {} timed out", uri.path()))
    } else {
        AppError::internal(format!("Unhandled middleware error: {error}"))
    };
    attach_request_id(error, request_id)
}

/// Bind the configured address and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails
pub async fn run(config: ServerConfig) -> Result<()> {
    let address = config.bind_address();
    let router = build_router(Arc::new(config));

    let listener = TcpListener::bind(address.as_str())
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!(address = %address, "Parenting assistant listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down gracefully"),
        () = terminate => info!("Received SIGTERM, shutting down gracefully"),
    }
}
