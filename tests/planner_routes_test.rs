// ABOUTME: Integration tests for the family planner form endpoints
// ABOUTME: Covers echo of inputs, optional special needs, constants, and validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use axum::http::StatusCode;
use common::{get, post_form, test_app};

#[tokio::test]
async fn test_planner_scenario_returns_three_routines() -> Result<()> {
    let app = test_app();
    let response = post_form(
        &app,
        "/planner",
        &[
            ("child_age", "7"),
            ("school_schedule", "8am-3pm"),
            ("family_goals", "more reading"),
        ],
    )
    .await?;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type.as_deref(), Some("application/json"));

    let json = response.json()?;
    let planner = &json["planner"];
    let routines = planner["suggested_routines"].as_array().unwrap();
    assert_eq!(routines.len(), 3);
    assert_eq!(routines[0], "Morning routine at 7:30 AM");
    assert_eq!(planner["child_age"], 7);
    assert_eq!(planner["school_schedule"], "8am-3pm");
    assert_eq!(planner["family_goals"], "more reading");
    assert!(planner["special_needs"].is_null());
    Ok(())
}

#[tokio::test]
async fn test_planner_echoes_special_needs() -> Result<()> {
    let app = test_app();
    let response = post_form(
        &app,
        "/planner",
        &[
            ("child_age", "12"),
            ("school_schedule", "7:45am - 2:30pm & clubs"),
            ("family_goals", "less screen time, more sport"),
            ("special_needs", "dyslexia"),
        ],
    )
    .await?;

    assert_eq!(response.status, StatusCode::OK);
    let planner = &response.json()?["planner"];
    assert_eq!(planner["child_age"], 12);
    assert_eq!(planner["school_schedule"], "7:45am - 2:30pm & clubs");
    assert_eq!(planner["family_goals"], "less screen time, more sport");
    assert_eq!(planner["special_needs"], "dyslexia");
    Ok(())
}

#[tokio::test]
async fn test_planner_constants_do_not_depend_on_input() -> Result<()> {
    let app = test_app();
    let first = post_form(
        &app,
        "/planner",
        &[
            ("child_age", "4"),
            ("school_schedule", "half days"),
            ("family_goals", "potty training"),
        ],
    )
    .await?
    .json()?;
    let second = post_form(
        &app,
        "/planner",
        &[
            ("child_age", "16"),
            ("school_schedule", "online"),
            ("family_goals", "driving lessons"),
            ("special_needs", "none"),
        ],
    )
    .await?
    .json()?;

    assert_eq!(
        first["planner"]["suggested_routines"],
        second["planner"]["suggested_routines"]
    );
    assert_eq!(first["planner"]["tips"], second["planner"]["tips"]);
    Ok(())
}

#[tokio::test]
async fn test_planner_missing_goals_is_client_error() -> Result<()> {
    let app = test_app();
    let response = post_form(
        &app,
        "/planner",
        &[("child_age", "7"), ("school_schedule", "8am-3pm")],
    )
    .await?;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let json = response.json()?;
    assert_eq!(json["error"]["code"], "VALIDATION_FAILED");
    assert_eq!(json["error"]["details"]["fields"][0]["field"], "family_goals");
    assert_eq!(
        json["error"]["details"]["fields"][0]["reason"],
        "field required"
    );
    Ok(())
}

#[tokio::test]
async fn test_planner_non_integer_age_is_client_error() -> Result<()> {
    let app = test_app();
    let response = post_form(
        &app,
        "/planner",
        &[
            ("child_age", "seven"),
            ("school_schedule", "8am-3pm"),
            ("family_goals", "more reading"),
        ],
    )
    .await?;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields = &response.json()?["error"]["details"]["fields"];
    assert_eq!(fields.as_array().map(Vec::len), Some(1));
    assert_eq!(fields[0]["field"], "child_age");
    Ok(())
}

#[tokio::test]
async fn test_planner_age_beyond_i64_is_rejected() -> Result<()> {
    let app = test_app();
    let response = post_form(
        &app,
        "/planner",
        &[
            ("child_age", "99999999999999999999"),
            ("school_schedule", "8am-3pm"),
            ("family_goals", "more reading"),
        ],
    )
    .await?;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields = &response.json()?["error"]["details"]["fields"];
    assert_eq!(fields[0]["field"], "child_age");
    assert_eq!(fields[0]["reason"], "value is not a valid integer");
    Ok(())
}

#[tokio::test]
async fn test_planner_form_page_renders() -> Result<()> {
    let app = test_app();
    let response = get(&app, "/planner").await?;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with("text/html")));
    assert!(response.body.contains("name=\"child_age\""));
    Ok(())
}
