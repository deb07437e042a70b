// ABOUTME: axum IntoResponse integration for AppError
// ABOUTME: Renders the JSON error envelope with the status derived from the error code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite

use super::{AppError, ErrorResponse};
use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                error.code = ?self.code,
                request_id = self.request_id.as_deref().unwrap_or("unknown"),
                "Request failed: {}",
                self
            );
        } else {
            tracing::warn!(
                error.code = ?self.code,
                request_id = self.request_id.as_deref().unwrap_or("unknown"),
                "Request rejected: {}",
                self.message
            );
        }

        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
