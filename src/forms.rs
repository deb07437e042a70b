// ABOUTME: Explicit schema validation for URL-encoded form submissions
// ABOUTME: Turns raw form pairs into typed requests or a field-level ValidationError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Parenting Assistant Suite

//! Form validation
//!
//! Every POST endpoint declares a request type implementing [`FormSchema`].
//! The [`ValidatedForm`] extractor decodes the body into [`FormFields`],
//! runs the schema, and rejects with an [`AppError`] carrying the request ID
//! when decoding or validation fails.

use crate::errors::{AppError, FieldError, ValidationError};
use crate::middleware::RequestId;
use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRequest, Request},
    http::StatusCode,
    Form,
};
use std::collections::HashMap;

/// Decoded form body, one value per field name
///
/// When a field is repeated the last value wins.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    values: HashMap<String, String>,
}

impl FormFields {
    /// Build from decoded key/value pairs
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            values: pairs.into_iter().collect(),
        }
    }

    /// Raw value of a field, if submitted
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Required text field; absent or empty values are recorded as failures
    pub fn required_text(&self, name: &str, errors: &mut ValidationError) -> Option<String> {
        match self.get(name) {
            None => {
                errors.push(FieldError::missing(name));
                None
            }
            Some("") => {
                errors.push(FieldError::empty(name));
                None
            }
            Some(value) => Some(value.to_owned()),
        }
    }

    /// Optional text field; an empty value counts as absent
    #[must_use]
    pub fn optional_text(&self, name: &str) -> Option<String> {
        self.get(name)
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
    }

    /// Required integer field
    pub fn required_integer(&self, name: &str, errors: &mut ValidationError) -> Option<i64> {
        let raw = self.required_text(name, errors)?;
        raw.trim().parse().map_or_else(
            |_| {
                errors.push(FieldError::not_an_integer(name));
                None
            },
            Some,
        )
    }

    /// Required finite number field
    pub fn required_number(&self, name: &str, errors: &mut ValidationError) -> Option<f64> {
        let raw = self.required_text(name, errors)?;
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Some(value),
            _ => {
                errors.push(FieldError::not_a_number(name));
                None
            }
        }
    }
}

/// A typed request that can be validated from submitted form fields
pub trait FormSchema: Sized {
    /// Validate and coerce the submitted fields
    ///
    /// # Errors
    ///
    /// Returns every field that is missing, empty, or fails type coercion
    fn validate(fields: &FormFields) -> Result<Self, ValidationError>;
}

/// Extractor yielding a request that passed its [`FormSchema`]
#[derive(Debug, Clone)]
pub struct ValidatedForm<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedForm<T>
where
    T: FormSchema,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let request_id = req.extensions().get::<RequestId>().cloned();
        let attach_id = |error: AppError| match &request_id {
            Some(id) => error.with_request_id(id.as_str()),
            None => error,
        };

        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
            .await
            .map_err(|rejection| attach_id(rejection_to_error(&rejection)))?;

        T::validate(&FormFields::from_pairs(pairs))
            .map(ValidatedForm)
            .map_err(|error| attach_id(AppError::from(error)))
    }
}

/// Map axum's form decoding rejections onto the error envelope
fn rejection_to_error(rejection: &FormRejection) -> AppError {
    let message = rejection.body_text();
    match rejection.status() {
        StatusCode::UNSUPPORTED_MEDIA_TYPE => AppError::unsupported_media_type(message),
        StatusCode::PAYLOAD_TOO_LARGE => AppError::payload_too_large(message),
        _ => AppError::invalid_format(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parenting_core::constants::validation_reasons;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        FormFields::from_pairs(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned())),
        )
    }

    #[test]
    fn test_required_text_missing_and_empty() {
        let form = fields(&[("mood", "")]);
        let mut errors = ValidationError::default();

        assert_eq!(form.required_text("mood", &mut errors), None);
        assert_eq!(form.required_text("user_type", &mut errors), None);

        let reasons: Vec<_> = errors.fields().iter().map(|f| f.reason.as_str()).collect();
        assert_eq!(
            reasons,
            vec![validation_reasons::EMPTY, validation_reasons::MISSING]
        );
    }

    #[test]
    fn test_text_is_not_trimmed() {
        let form = fields(&[("mood", "  calm ")]);
        let mut errors = ValidationError::default();
        assert_eq!(
            form.required_text("mood", &mut errors).as_deref(),
            Some("  calm ")
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_optional_text_treats_empty_as_absent() {
        let form = fields(&[("notes", "")]);
        assert_eq!(form.optional_text("notes"), None);
        assert_eq!(form.optional_text("special_needs"), None);
    }

    #[test]
    fn test_integer_coercion() {
        let form = fields(&[("a", " 7 "), ("b", "7.5"), ("c", "seven")]);
        let mut errors = ValidationError::default();

        assert_eq!(form.required_integer("a", &mut errors), Some(7));
        assert_eq!(form.required_integer("b", &mut errors), None);
        assert_eq!(form.required_integer("c", &mut errors), None);
        assert_eq!(errors.fields().len(), 2);
    }

    #[test]
    fn test_number_coercion_rejects_non_finite() {
        let form = fields(&[("a", "100"), ("b", "12.5"), ("c", "NaN"), ("d", "inf")]);
        let mut errors = ValidationError::default();

        assert_eq!(form.required_number("a", &mut errors), Some(100.0));
        assert_eq!(form.required_number("b", &mut errors), Some(12.5));
        assert_eq!(form.required_number("c", &mut errors), None);
        assert_eq!(form.required_number("d", &mut errors), None);
        assert_eq!(errors.fields().len(), 2);
    }

    #[test]
    fn test_last_repeated_value_wins() {
        let form = fields(&[("mood", "sad"), ("mood", "happy")]);
        assert_eq!(form.get("mood"), Some("happy"));
    }
}
