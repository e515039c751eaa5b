//! Common library for the project-management application
//!
//! This crate provides shared functionality used across the domain crates,
//! including field-level validation primitives and the structured validation
//! error returned by every record validator.

pub mod error;
pub mod validation;

pub use error::{FieldError, ValidationError, ValidationResult};
