// ABOUTME: Main library entry point for the parenting assistant form service
// ABOUTME: Exposes configuration, logging, form validation, tools, routes, and server assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite

#![deny(unsafe_code)]

//! # Parenting Assistant
//!
//! A small web service with three independent forms: a family planner, a
//! meal planner, and an emotional check-in. Each form is shown with
//! `GET /{tool}` and submitted with a URL-encoded `POST /{tool}`, which
//! returns a JSON document echoing the validated input alongside a fixed
//! set of suggestions.
//!
//! ## Architecture
//!
//! - **Config**: `ServerConfig` built once from the environment and shared read-only
//! - **Forms**: explicit per-endpoint schema validation producing typed requests
//! - **Tools**: pure functions from a validated request to a response
//! - **Routes**: thin axum handlers for pages, tools, and health checks
//! - **Server**: middleware stack (CORS, request IDs, tracing, timeouts) and lifecycle
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use parenting_assistant::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     parenting_assistant::server::run(config).await
//! }
//! ```

/// Configuration management
pub mod config;

/// Unified error handling re-exported from the core crate
pub mod errors;

/// Form decoding and schema validation
pub mod forms;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (request IDs, tracing spans, CORS)
pub mod middleware;

/// HTML pages for the landing page and forms
pub mod pages;

/// HTTP route handlers
pub mod routes;

/// Router composition and server lifecycle
pub mod server;

/// The planner, meals, and emotions tools
pub mod tools;
