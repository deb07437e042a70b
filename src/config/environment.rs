// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Builds the immutable ServerConfig handed to the router at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite

//! Environment-based configuration for the form service

use anyhow::{Context, Result};
use parenting_core::constants::{env_config, limits, network, paths, service_names};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Environment type for security and other configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed service
    Production,
    /// Automated test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Allowed origins; a single `*` allows any origin
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// True when every origin is allowed
    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_owned()],
        }
    }
}

/// Server configuration, built once at startup and shared read-only
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Cross-origin settings
    pub cors: CorsConfig,
    /// Maximum accepted form body in bytes
    pub max_form_bytes: usize,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Deployment environment
    pub environment: Environment,
    /// Service name used in logs
    pub service_name: String,
    /// Title shown on HTML pages
    pub site_title: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: network::DEFAULT_HOST.to_owned(),
            http_port: network::DEFAULT_HTTP_PORT,
            static_dir: PathBuf::from(paths::DEFAULT_STATIC_DIR),
            cors: CorsConfig::default(),
            max_form_bytes: limits::DEFAULT_MAX_FORM_BYTES,
            request_timeout: Duration::from_secs(limits::DEFAULT_REQUEST_TIMEOUT_SECS),
            environment: Environment::default(),
            service_name: service_names::PARENTING_ASSISTANT.to_owned(),
            site_title: service_names::SUITE_TITLE.to_owned(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from process environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let cors = lookup(env_config::CORS_ALLOWED_ORIGINS).map_or(defaults.cors, |origins| {
            CorsConfig {
                allowed_origins: parse_origins(&origins),
            }
        });

        let timeout_secs = parse_var(
            &lookup,
            env_config::REQUEST_TIMEOUT_SECS,
            limits::DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;

        Ok(Self {
            host: lookup(env_config::HOST).unwrap_or(defaults.host),
            http_port: parse_var(&lookup, env_config::HTTP_PORT, defaults.http_port)?,
            static_dir: lookup(env_config::STATIC_DIR).map_or(defaults.static_dir, PathBuf::from),
            cors,
            max_form_bytes: parse_var(&lookup, env_config::MAX_FORM_BYTES, defaults.max_form_bytes)?,
            request_timeout: Duration::from_secs(timeout_secs),
            environment: lookup(env_config::ENVIRONMENT)
                .map_or(defaults.environment, |s| Environment::from_str_or_default(&s)),
            service_name: lookup(env_config::SERVICE_NAME).unwrap_or(defaults.service_name),
            site_title: lookup(env_config::SITE_TITLE).unwrap_or(defaults.site_title),
        })
    }

    /// Address the listener binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// One-line-per-setting summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} Configuration:\n\
             - Bind Address: {}\n\
             - Environment: {}\n\
             - Static Directory: {}\n\
             - CORS Origins: {}\n\
             - Max Form Bytes: {}\n\
             - Request Timeout: {}s",
            self.service_name,
            self.bind_address(),
            self.environment,
            self.static_dir.display(),
            self.cors.allowed_origins.join(","),
            self.max_form_bytes,
            self.request_timeout.as_secs(),
        )
    }
}

/// Parse an optional variable, falling back to `default` when unset
fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {raw}"))
    })
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
