// ABOUTME: Field-level validation error types for form submissions
// ABOUTME: Collects every failing field so clients can fix a form in one round trip
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite

use crate::constants::validation_reasons;
use serde::Serialize;
use std::fmt;

/// A single failing form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the form field
    pub field: String,
    /// Why the field was rejected
    pub reason: String,
}

impl FieldError {
    /// Create a field error with a custom reason
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Required field absent from the body
    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, validation_reasons::MISSING)
    }

    /// Required field present with an empty value
    pub fn empty(field: impl Into<String>) -> Self {
        Self::new(field, validation_reasons::EMPTY)
    }

    /// Field could not be coerced to an integer
    pub fn not_an_integer(field: impl Into<String>) -> Self {
        Self::new(field, validation_reasons::NOT_AN_INTEGER)
    }

    /// Field could not be coerced to a finite number
    pub fn not_a_number(field: impl Into<String>) -> Self {
        Self::new(field, validation_reasons::NOT_A_NUMBER)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// One or more fields of a submitted form failed validation
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
pub struct ValidationError {
    fields: Vec<FieldError>,
}

impl ValidationError {
    /// Record another failing field
    pub fn push(&mut self, error: FieldError) {
        self.fields.push(error);
    }

    /// Failing fields in the order they were checked
    #[must_use]
    pub fn fields(&self) -> &[FieldError] {
        &self.fields
    }

    /// True when no field has failed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid form submission")?;
        for (index, field) in self.fields.iter().enumerate() {
            let separator = if index == 0 { ": " } else { "; " };
            write!(f, "{separator}{field}")?;
        }
        Ok(())
    }
}

impl From<FieldError> for ValidationError {
    fn from(error: FieldError) -> Self {
        Self {
            fields: vec![error],
        }
    }
}
