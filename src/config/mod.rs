// ABOUTME: Configuration management module for server settings
// ABOUTME: Exposes the environment-driven ServerConfig built at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite

//! Configuration module
//!
//! There is no global registry: the binary builds one [`ServerConfig`] and
//! passes it to the router, which shares it read-only with every handler.

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, ServerConfig};
