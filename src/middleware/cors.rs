// ABOUTME: CORS middleware configuration for the form endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for browser clients hosted elsewhere
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite

use crate::config::CorsConfig;
use http::{header, HeaderName, HeaderValue, Method};
use parenting_core::constants::headers::REQUEST_ID;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Configure CORS settings for the form service
///
/// A single `*` (or an empty list) allows any origin; otherwise only the
/// listed origins are allowed. Origins that are not valid header values are
/// skipped, and if none survive the layer falls back to allowing any origin.
pub fn setup_cors(config: &CorsConfig) -> CorsLayer {
    let allow_origin = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();

        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
            HeaderName::from_static(REQUEST_ID),
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID)])
}
