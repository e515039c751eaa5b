//! Shared input validation primitives
//!
//! Field-level checks used by the record validators. Each check reports a
//! human-readable message built from the caller-supplied field label, so the
//! same rule can serve several fields.

use regex::Regex;
use std::sync::OnceLock;

/// Require a non-empty text value
pub fn require<'a>(value: Option<&'a str>, label: &str) -> Result<&'a str, String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(format!("{} is required", label)),
    }
}

/// Enforce a maximum length, counted in characters
pub fn max_length(value: &str, max: usize, label: &str) -> Result<(), String> {
    if value.chars().count() > max {
        return Err(format!("{} must be at most {} characters long", label, max));
    }

    Ok(())
}

/// Enforce an exact length, counted in characters
pub fn exact_length(value: &str, expected: usize, label: &str) -> Result<(), String> {
    if value.chars().count() != expected {
        return Err(format!(
            "{} must be exactly {} characters long",
            label, expected
        ));
    }

    Ok(())
}

/// Require the value to consist of digits only
pub fn digits_only(value: &str, label: &str) -> Result<(), String> {
    static DIGITS_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = DIGITS_REGEX
        .get_or_init(|| Regex::new(r"^[0-9]+$").expect("Failed to compile digits regex"));

    if !regex.is_match(value) {
        return Err(format!("{} can only contain digits", label));
    }

    Ok(())
}

/// Require a `+` followed by digits only
pub fn dialing_prefix(value: &str, label: &str) -> Result<(), String> {
    static PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = PREFIX_REGEX
        .get_or_init(|| Regex::new(r"^\+[0-9]+$").expect("Failed to compile dialing prefix regex"));

    if !regex.is_match(value) {
        return Err(format!("{} must be a + followed by digits", label));
    }

    Ok(())
}

/// Validate general email shape: local@domain with a dot-containing domain
pub fn email_shape(value: &str) -> Result<(), String> {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
    });

    if !regex.is_match(value) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}
