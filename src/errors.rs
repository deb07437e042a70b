// ABOUTME: Error types used by the server crate
// ABOUTME: Re-exports the unified AppError system from parenting-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite

//! Unified error handling
//!
//! The definitions live in `parenting-core` so they can be shared without
//! pulling in the server; this module re-exports them under `crate::errors`.

pub use parenting_core::errors::{
    AppError, ErrorCode, ErrorResponse, ErrorResponseDetails, FieldError,
    ValidationError,
};
