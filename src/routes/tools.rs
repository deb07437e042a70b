// ABOUTME: Form display and form submission routes shared by every assistant tool
// ABOUTME: GET renders the tool's form page, POST validates the form and returns JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite

//! Tool routes
//!
//! Each tool mounts `GET /{name}` and `POST /{name}`. The handlers are thin:
//! validation happens in the [`ValidatedForm`] extractor and the response is
//! built by the tool itself.

use crate::{
    config::ServerConfig,
    forms::ValidatedForm,
    middleware::RequestId,
    tools::{AssistantTool, EmotionsTool, MealsTool, PlannerTool, ToolEnvelope},
};
use axum::{
    extract::State,
    response::Html,
    routing::get,
    Extension, Json, Router,
};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::info;

/// Routes for a single assistant tool
pub struct ToolRoutes<T>(PhantomData<T>);

impl<T: AssistantTool> ToolRoutes<T> {
    /// Create the form display and submission routes for `T`
    pub fn routes(config: Arc<ServerConfig>) -> Router {
        let path = format!("/{}", T::NAME);
        Router::new()
            .route(&path, get(Self::handle_form).post(Self::handle_submit))
            .with_state(config)
    }

    async fn handle_form(State(config): State<Arc<ServerConfig>>) -> Html<String> {
        T::FORM_PAGE.render(&config.site_title)
    }

    async fn handle_submit(
        request_id: Option<Extension<RequestId>>,
        ValidatedForm(request): ValidatedForm<T::Request>,
    ) -> Json<ToolEnvelope<T>> {
        info!(
            tool = T::NAME,
            request_id = request_id.as_ref().map_or("unknown", |id| id.as_str()),
            "Form submitted"
        );
        Json(ToolEnvelope::respond(request))
    }
}

/// Planner routes: `GET /planner`, `POST /planner`
pub type PlannerRoutes = ToolRoutes<PlannerTool>;
/// Meals routes: `GET /meals`, `POST /meals`
pub type MealsRoutes = ToolRoutes<MealsTool>;
/// Emotions routes: `GET /emotions`, `POST /emotions`
pub type EmotionsRoutes = ToolRoutes<EmotionsTool>;
