// ABOUTME: Family planner tool: child schedule and goals in, routine suggestions out
// ABOUTME: Echoes the validated form and attaches a fixed set of routines and tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite

use super::AssistantTool;
use crate::errors::ValidationError;
use crate::forms::{FormFields, FormSchema};
use crate::pages::Page;
use serde::Serialize;

/// Suggested daily routines, identical for every submission
pub const SUGGESTED_ROUTINES: [&str; 3] = [
    "Morning routine at 7:30 AM",
    "Homework time at 5:00 PM",
    "Family dinner at 7:00 PM",
];

/// Parenting tips, identical for every submission
pub const TIPS: [&str; 2] = [
    "Encourage regular sleep schedule.",
    "Discuss daily highlights at dinner.",
];

/// Validated planner form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerRequest {
    /// Child's age in years
    pub child_age: i64,
    /// Free-text school hours, e.g. "8am-3pm"
    pub school_schedule: String,
    /// What the family wants to work on
    pub family_goals: String,
    /// Optional accommodations
    pub special_needs: Option<String>,
}

impl FormSchema for PlannerRequest {
    fn validate(fields: &FormFields) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::default();
        let child_age = fields.required_integer("child_age", &mut errors);
        let school_schedule = fields.required_text("school_schedule", &mut errors);
        let family_goals = fields.required_text("family_goals", &mut errors);
        let special_needs = fields.optional_text("special_needs");

        match (child_age, school_schedule, family_goals) {
            (Some(child_age), Some(school_schedule), Some(family_goals)) => Ok(Self {
                child_age,
                school_schedule,
                family_goals,
                special_needs,
            }),
            _ => Err(errors),
        }
    }
}

/// Planner result under the `planner` key
#[derive(Debug, Clone, Serialize)]
pub struct PlannerResponse {
    /// Echo of the submitted age
    pub child_age: i64,
    /// Echo of the submitted schedule
    pub school_schedule: String,
    /// Echo of the submitted goals
    pub family_goals: String,
    /// Echo of the submitted needs, `null` when omitted
    pub special_needs: Option<String>,
    /// Fixed routine suggestions
    pub suggested_routines: &'static [&'static str],
    /// Fixed tips
    pub tips: &'static [&'static str],
}

/// Family planner tool
pub struct PlannerTool;

impl AssistantTool for PlannerTool {
    const NAME: &'static str = "planner";
    const FORM_PAGE: Page = Page::PlannerForm;

    type Request = PlannerRequest;
    type Response = PlannerResponse;

    fn respond(request: PlannerRequest) -> PlannerResponse {
        PlannerResponse {
            child_age: request.child_age,
            school_schedule: request.school_schedule,
            family_goals: request.family_goals,
            special_needs: request.special_needs,
            suggested_routines: &SUGGESTED_ROUTINES,
            tips: &TIPS,
        }
    }
}
