// ABOUTME: HTTP middleware for request correlation, tracing, and CORS
// ABOUTME: Provides request ID generation, span creation, and cross-origin configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite

/// CORS configuration
pub mod cors;
/// Request ID assignment and propagation
pub mod request_id;
/// Request span construction
pub mod tracing;

pub use cors::setup_cors;
pub use request_id::{request_id_middleware, RequestId};
pub use self::tracing::{create_request_span, make_request_span, record_response};
