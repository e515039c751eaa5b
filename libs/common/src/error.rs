//! Custom error types for the common library
//!
//! This module defines the structured validation error returned by every
//! record validator in the application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single field-level violation
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Dotted path of the offending field, e.g. `address.postalCode`
    pub field: String,
    /// Human-readable description of the violation
    pub message: String,
}

/// Validation failure carrying one or more field-level violations
///
/// Validators collect every violation instead of stopping at the first one,
/// so a single password can surface several messages at once.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[error("validation failed: {}", join_errors(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation for a field
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// True if no violation has been recorded
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Resolve the collector: the normalized value if clean, the error otherwise
    pub fn finish<T>(self, value: T) -> ValidationResult<T> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }

    /// Messages recorded for one field, in rule order
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Type alias for Result with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
