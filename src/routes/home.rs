// ABOUTME: Landing page route linking to the three assistant tools
// ABOUTME: Renders the home template with the configured site title
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite

use crate::{config::ServerConfig, pages::Page};
use axum::{extract::State, response::Html, routing::get, Router};
use std::sync::Arc;

/// Landing page routes
pub struct HomeRoutes;

impl HomeRoutes {
    /// Create the landing page route
    pub fn routes(config: Arc<ServerConfig>) -> Router {
        Router::new()
            .route("/", get(Self::handle_home))
            .with_state(config)
    }

    async fn handle_home(State(config): State<Arc<ServerConfig>>) -> Html<String> {
        Page::Home.render(&config.site_title)
    }
}
