//! Field validation helpers
//!
//! Flows call these from their `validate()` methods before rendering a
//! prompt. All failures carry the wire-level field name so the
//! presentation layer can attach the message to the right form control.

use crate::ValidationError;

/// Reject empty or whitespace-only text
pub fn validate_non_empty_string(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(
            field,
            "value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Require a minimum number of characters
pub fn validate_min_len(field: &str, value: &str, min_len: usize) -> Result<(), ValidationError> {
    if value.chars().count() < min_len {
        return Err(ValidationError::new(
            field,
            format!("must be at least {} characters", min_len),
        ));
    }
    Ok(())
}

/// Require a finite, non-negative number
pub fn validate_non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::new(
            field,
            "must be a non-negative number",
        ));
    }
    Ok(())
}

/// Require a finite, strictly positive number
pub fn validate_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::new(field, "must be a positive number"));
    }
    Ok(())
}
