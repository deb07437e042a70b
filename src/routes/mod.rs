// ABOUTME: Route module organization for the parenting assistant HTTP endpoints
// ABOUTME: Groups landing page, tool form, and health routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite

//! Route module
//!
//! Each module contains only route definitions and thin handler functions
//! that delegate to the tools and pages.

/// Health check and readiness routes
pub mod health;
/// Landing page route
pub mod home;
/// Tool form display and submission routes
pub mod tools;

/// Health check route handlers
pub use health::HealthRoutes;
/// Landing page route handlers
pub use home::HomeRoutes;
/// Tool route handlers
pub use tools::{EmotionsRoutes, MealsRoutes, PlannerRoutes, ToolRoutes};
