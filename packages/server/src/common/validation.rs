//! Field-level constraint checks for request bodies, path and query values.
//!
//! A [`Validator`] collects every violation for one request so the client
//! gets the full list back in a single 422 response instead of fixing one
//! field at a time.

use chrono::Datelike;
use serde::Serialize;
use thiserror::Error;

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// All constraints violated by one request.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{} field(s) failed validation", .0.len())]
#[serde(transparent)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.field.as_str())
    }
}

#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require at least `min` characters (not bytes).
    pub fn min_chars(&mut self, field: &str, value: &str, min: usize) -> &mut Self {
        if value.chars().count() < min {
            self.push(field, format!("must be at least {min} characters"));
        }
        self
    }

    /// Require at most `max` characters (not bytes).
    pub fn max_chars(&mut self, field: &str, value: &str, max: usize) -> &mut Self {
        if value.chars().count() > max {
            self.push(field, format!("must be at most {max} characters"));
        }
        self
    }

    /// Require `min <= value <= max`.
    pub fn range(&mut self, field: &str, value: i64, min: i64, max: i64) -> &mut Self {
        if value < min || value > max {
            self.push(field, format!("must be between {min} and {max}"));
        }
        self
    }

    /// Require a strictly positive identifier.
    pub fn positive(&mut self, field: &str, value: i64) -> &mut Self {
        if value <= 0 {
            self.push(field, "must be greater than 0".to_string());
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }

    fn push(&mut self, field: &str, message: String) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message,
        });
    }
}

/// Validate a single positive path identifier.
pub fn positive_id(field: &str, value: i64) -> Result<i64, ValidationErrors> {
    let mut validator = Validator::new();
    validator.positive(field, value);
    validator.finish().map(|_| value)
}

pub fn current_year() -> i64 {
    i64::from(chrono::Utc::now().year())
}
