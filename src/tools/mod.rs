// ABOUTME: The three assistant tools behind the form endpoints
// ABOUTME: Defines the AssistantTool trait and the envelope that keys each response by tool name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite

//! # Assistant Tools
//!
//! Each tool is a pure function from a validated form to a response that
//! echoes the input and adds a fixed payload. Tools share no state.

/// Emotional support check-in
pub mod emotions;
/// Meal planning
pub mod meals;
/// Family routine planning
pub mod planner;

pub use emotions::{EmotionsRequest, EmotionsResponse, EmotionsTool, UserType};
pub use meals::{MealSuggestion, MealsRequest, MealsResponse, MealsTool};
pub use planner::{PlannerRequest, PlannerResponse, PlannerTool};

use crate::forms::FormSchema;
use crate::pages::Page;
use serde::{ser::SerializeMap, Serialize, Serializer};

/// A form-backed tool with a display page and a JSON submit endpoint
pub trait AssistantTool: Send + Sync + 'static {
    /// Route segment and top-level response key
    const NAME: &'static str;
    /// Page rendered for `GET /{NAME}`
    const FORM_PAGE: Page;

    /// Validated form input
    type Request: FormSchema + Send + 'static;
    /// Response body nested under [`Self::NAME`]
    type Response: Serialize + Send + 'static;

    /// Build the response for a validated request
    fn respond(request: Self::Request) -> Self::Response;
}

/// Wraps a tool response as `{"<tool name>": response}`
pub struct ToolEnvelope<T: AssistantTool>(pub T::Response);

impl<T: AssistantTool> ToolEnvelope<T> {
    /// Run the tool and wrap its response
    pub fn respond(request: T::Request) -> Self {
        Self(T::respond(request))
    }
}

impl<T: AssistantTool> Serialize for ToolEnvelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(T::NAME, &self.0)?;
        map.end()
    }
}
