// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Defaults, environment variable names, and HTTP header names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// Service identity used in logs and pages
pub mod service_names {
    /// Default service name
    pub const PARENTING_ASSISTANT: &str = "parenting-assistant";
    /// Human-readable suite title
    pub const SUITE_TITLE: &str = "AI Parenting Assistant Suite";
}

/// Network defaults
pub mod network {
    /// Default bind address (all interfaces)
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8000;
}

/// Request handling limits
pub mod limits {
    /// Default maximum size of a form body in bytes
    pub const DEFAULT_MAX_FORM_BYTES: usize = 64 * 1024;
    /// Default per-request timeout in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Filesystem defaults
pub mod paths {
    /// Directory served under `/static`
    pub const DEFAULT_STATIC_DIR: &str = "static";
}

/// Environment variable names read at startup
pub mod env_config {
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Static asset directory
    pub const STATIC_DIR: &str = "STATIC_DIR";
    /// Comma-separated CORS origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Maximum form body size in bytes
    pub const MAX_FORM_BYTES: &str = "MAX_FORM_BYTES";
    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Service name override
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
    /// Page title override
    pub const SITE_TITLE: &str = "SITE_TITLE";
}

/// HTTP header names
pub mod headers {
    /// Request correlation header
    pub const REQUEST_ID: &str = "x-request-id";
}

/// Reasons attached to field-level validation failures
pub mod validation_reasons {
    /// Field absent from the form body
    pub const MISSING: &str = "field required";
    /// Field present but empty
    pub const EMPTY: &str = "field must not be empty";
    /// Field is not a valid integer
    pub const NOT_AN_INTEGER: &str = "value is not a valid integer";
    /// Field is not a valid finite number
    pub const NOT_A_NUMBER: &str = "value is not a valid number";
}
