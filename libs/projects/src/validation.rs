//! Project payload validation
//!
//! Mirrors the user validator's shape: collect every violation, return the
//! normalized payload only when clean. The rule set is deliberately narrower
//! than the persisted record: `tasks` is checked as a single optional text
//! value and `creator` is not part of the payload at all.

use common::validation::{max_length, require};
use common::{ValidationError, ValidationResult};
use tracing::debug;

use crate::models::{NewProject, ProjectInput};

/// Validate a candidate project payload
pub fn validate_project(input: &ProjectInput) -> ValidationResult<NewProject> {
    let mut errors = ValidationError::new();

    let name = match require(input.name.as_deref(), "Name") {
        Ok(v) => {
            if let Err(msg) = max_length(v, 50, "Name") {
                errors.push("name", msg);
            }
            Some(v.to_string())
        }
        Err(msg) => {
            errors.push("name", msg);
            None
        }
    };

    if let Some(description) = input.description.as_deref()
        && let Err(msg) = max_length(description, 500, "Description")
    {
        errors.push("description", msg);
    }

    match name {
        Some(name) if errors.is_empty() => Ok(NewProject {
            name,
            description: input.description.clone(),
            tasks: input.tasks.clone(),
        }),
        _ => {
            debug!(violations = errors.errors.len(), "Rejected project payload");
            Err(errors)
        }
    }
}
