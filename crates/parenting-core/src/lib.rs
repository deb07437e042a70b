// ABOUTME: Core types and constants for the parenting assistant form service
// ABOUTME: Foundation crate with error handling, field validation errors, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite

#![deny(unsafe_code)]

//! # Parenting Core
//!
//! Shared types for the parenting assistant suite. Kept separate from the
//! server crate so that error and constant definitions change rarely.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ValidationError`
//! - **constants**: Defaults, environment variable names, and header names

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;
