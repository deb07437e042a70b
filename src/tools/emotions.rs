// ABOUTME: Emotional support tool: mood check-in for a parent or child
// ABOUTME: Echoes the validated form and attaches fixed affirmations and coping strategies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite

use super::AssistantTool;
use crate::errors::ValidationError;
use crate::forms::{FormFields, FormSchema};
use crate::pages::Page;
use serde::{Serialize, Serializer};

/// Affirmations, identical for every submission
pub const SUGGESTED_AFFIRMATIONS: [&str; 2] = [
    "You are strong and loved.",
    "Every day is a new beginning.",
];

/// Coping strategies, identical for every submission
pub const COPING_STRATEGIES: [&str; 2] = [
    "Take deep breaths.",
    "Share your feelings with someone you trust.",
];

/// Who is checking in
///
/// `parent` and `child` are the expected values; anything else is kept
/// verbatim so the response still echoes exactly what was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserType {
    /// A parent or caregiver
    Parent,
    /// A child
    Child,
    /// Any other submitted value
    Other(String),
}

impl UserType {
    /// Classify a submitted value
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "parent" => Self::Parent,
            "child" => Self::Child,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The submitted string
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Parent => "parent",
            Self::Child => "child",
            Self::Other(value) => value,
        }
    }
}

impl Serialize for UserType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Validated emotions form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionsRequest {
    /// Parent or child
    pub user_type: UserType,
    /// Current mood
    pub mood: String,
    /// Optional free-text notes
    pub notes: Option<String>,
}

impl FormSchema for EmotionsRequest {
    fn validate(fields: &FormFields) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::default();
        let user_type = fields.required_text("user_type", &mut errors);
        let mood = fields.required_text("mood", &mut errors);
        let notes = fields.optional_text("notes");

        match (user_type, mood) {
            (Some(user_type), Some(mood)) => Ok(Self {
                user_type: UserType::parse(&user_type),
                mood,
                notes,
            }),
            _ => Err(errors),
        }
    }
}

/// Emotions result under the `emotions` key
#[derive(Debug, Clone, Serialize)]
pub struct EmotionsResponse {
    /// Echo of the submitted user type
    pub user_type: UserType,
    /// Echo of the submitted mood
    pub mood: String,
    /// Echo of the notes, `null` when omitted
    pub notes: Option<String>,
    /// Fixed affirmations
    pub suggested_affirmations: &'static [&'static str],
    /// Fixed coping strategies
    pub coping_strategies: &'static [&'static str],
}

/// Emotional support tool
pub struct EmotionsTool;

impl AssistantTool for EmotionsTool {
    const NAME: &'static str = "emotions";
    const FORM_PAGE: Page = Page::EmotionsForm;

    type Request = EmotionsRequest;
    type Response = EmotionsResponse;

    fn respond(request: EmotionsRequest) -> EmotionsResponse {
        EmotionsResponse {
            user_type: request.user_type,
            mood: request.mood,
            notes: request.notes,
            suggested_affirmations: &SUGGESTED_AFFIRMATIONS,
            coping_strategies: &COPING_STRATEGIES,
        }
    }
}
