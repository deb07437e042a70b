// ABOUTME: Meal planner tool: family preferences and budget in, meal plan and grocery list out
// ABOUTME: Echoes the validated form and attaches a fixed plan and shopping list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite

use super::AssistantTool;
use crate::errors::ValidationError;
use crate::forms::{FormFields, FormSchema};
use crate::pages::Page;
use serde::Serialize;

/// A suggested meal with a short nutrition note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MealSuggestion {
    /// Dish name
    pub name: &'static str,
    /// Nutrition summary
    pub nutrition: &'static str,
}

/// Meal plan, identical for every submission
pub const MEAL_PLAN: [MealSuggestion; 2] = [
    MealSuggestion {
        name: "Veggie Pasta",
        nutrition: "350 kcal",
    },
    MealSuggestion {
        name: "Grilled Chicken Salad",
        nutrition: "400 kcal",
    },
];

/// Grocery list, identical for every submission
pub const GROCERY_LIST: [&str; 5] = ["Pasta", "Chicken breast", "Lettuce", "Tomato", "Olive oil"];

/// Validated meals form
#[derive(Debug, Clone, PartialEq)]
pub struct MealsRequest {
    /// What the family likes to eat
    pub family_preferences: String,
    /// Allergies or diets to respect
    pub dietary_restrictions: String,
    /// Weekly budget
    pub budget: f64,
}

impl FormSchema for MealsRequest {
    fn validate(fields: &FormFields) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::default();
        let family_preferences = fields.required_text("family_preferences", &mut errors);
        let dietary_restrictions = fields.required_text("dietary_restrictions", &mut errors);
        let budget = fields.required_number("budget", &mut errors);

        match (family_preferences, dietary_restrictions, budget) {
            (Some(family_preferences), Some(dietary_restrictions), Some(budget)) => Ok(Self {
                family_preferences,
                dietary_restrictions,
                budget,
            }),
            _ => Err(errors),
        }
    }
}

/// Meals result under the `meals` key
#[derive(Debug, Clone, Serialize)]
pub struct MealsResponse {
    /// Echo of `family_preferences`
    pub preferences: String,
    /// Echo of `dietary_restrictions`
    pub restrictions: String,
    /// Echo of the budget
    pub budget: f64,
    /// Fixed meal plan
    pub meal_plan: &'static [MealSuggestion],
    /// Fixed grocery list
    pub grocery_list: &'static [&'static str],
}

/// Meal planning tool
pub struct MealsTool;

impl AssistantTool for MealsTool {
    const NAME: &'static str = "meals";
    const FORM_PAGE: Page = Page::MealsForm;

    type Request = MealsRequest;
    type Response = MealsResponse;

    fn respond(request: MealsRequest) -> MealsResponse {
        MealsResponse {
            preferences: request.family_preferences,
            restrictions: request.dietary_restrictions,
            budget: request.budget,
            meal_plan: &MEAL_PLAN,
            grocery_list: &GROCERY_LIST,
        }
    }
}
