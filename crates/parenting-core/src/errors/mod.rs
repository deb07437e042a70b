// ABOUTME: Unified error types shared by every route in the service
// ABOUTME: Defines ErrorCode, AppError, the JSON error envelope, and validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite

//! # Unified Error Handling System
//!
//! Every failure a handler can produce is an [`AppError`]. The error code
//! decides the HTTP status; the message and details are rendered into a
//! single JSON envelope:
//!
//! ```json
//! {"error": {"code": "VALIDATION_FAILED", "message": "...", "details": {...}}}
//! ```

/// Field-level validation failures
pub mod validation;

#[cfg(feature = "http-response")]
mod http_response;

pub use validation::{FieldError, ValidationError};

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// The body could not be decoded
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// One or more form fields failed validation
    #[serde(rename = "VALIDATION_FAILED")]
    ValidationFailed = 3004,
    /// The request body used an unsupported content type
    #[serde(rename = "UNSUPPORTED_MEDIA_TYPE")]
    UnsupportedMediaType = 3005,
    /// The request body exceeded the configured limit
    #[serde(rename = "PAYLOAD_TOO_LARGE")]
    PayloadTooLarge = 3006,

    // Resource Management (4000-4999)
    /// Route or resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// Route exists but does not accept the request method
    #[serde(rename = "METHOD_NOT_ALLOWED")]
    MethodNotAllowed = 4001,

    // Request lifecycle (5000-5999)
    /// Handler did not finish within the request timeout
    #[serde(rename = "REQUEST_TIMEOUT")]
    RequestTimeout = 5000,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidFormat => 400,
            Self::ResourceNotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::RequestTimeout => 408,
            Self::PayloadTooLarge => 413,
            Self::UnsupportedMediaType => 415,
            Self::ValidationFailed => 422,
            Self::InternalError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidFormat => "The request body could not be decoded",
            Self::ValidationFailed => "One or more form fields are invalid",
            Self::UnsupportedMediaType => "The request content type is not supported",
            Self::PayloadTooLarge => "The request body is too large",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::MethodNotAllowed => "The request method is not allowed for this route",
            Self::RequestTimeout => "The request took too long to process",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Request ID for correlation, when known
    pub request_id: Option<String>,
    /// Structured details rendered into the response body
    pub details: serde_json::Value,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            request_id: None,
            details: serde_json::Value::Null,
        }
    }

    /// Add a request ID to the error
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Add structured details to the error
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Undecodable request body
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Unsupported request content type
    pub fn unsupported_media_type(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UnsupportedMediaType, message)
    }

    /// Request body exceeded the size limit
    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PayloadTooLarge, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Route matched but the method did not
    pub fn method_not_allowed(method: impl fmt::Display, path: &str) -> Self {
        Self::new(
            ErrorCode::MethodNotAllowed,
            format!("Method {method} not allowed on {path}"),
        )
    }

    /// Request exceeded the configured timeout
    pub fn request_timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RequestTimeout, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let details = serde_json::json!({ "fields": error.fields() });
        Self::new(ErrorCode::ValidationFailed, error.to_string()).with_details(details)
    }
}

/// HTTP error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error body
    pub error: ErrorResponseDetails,
}

/// Body of the error envelope
#[derive(Debug, Serialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Correlation ID of the failing request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Structured details, omitted when empty
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                request_id: error.request_id,
                details: error.details,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::ValidationFailed.http_status(), 422);
        assert_eq!(ErrorCode::UnsupportedMediaType.http_status(), 415);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::MethodNotAllowed.http_status(), 405);
        assert_eq!(ErrorCode::RequestTimeout.http_status(), 408);
        assert_eq!(ErrorCode::InternalError.http_status(), 500);
    }

    #[test]
    fn test_validation_error_converts_with_field_details() {
        let mut validation = ValidationError::default();
        validation.push(FieldError::missing("family_goals"));
        let error = AppError::from(validation).with_request_id("req-123");

        assert_eq!(error.code, ErrorCode::ValidationFailed);
        assert_eq!(error.request_id.as_deref(), Some("req-123"));
        assert_eq!(error.details["fields"][0]["field"], "family_goals");
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::from(AppError::not_found("Page"));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["error"]["code"], "RESOURCE_NOT_FOUND");
        assert_eq!(json["error"]["message"], "Page not found");
        assert!(json["error"].get("details").is_none());
        assert!(json["error"].get("request_id").is_none());
    }

    #[test]
    fn test_method_not_allowed_message() {
        let error = AppError::method_not_allowed("PUT", "/planner");
        assert_eq!(error.code, ErrorCode::MethodNotAllowed);
        assert_eq!(error.message, "Method PUT not allowed on /planner");
    }
}
