//! Validation utilities.
//!
//! The original service registered a process-global validator/translator;
//! here translation is a plain function applied where requests are
//! validated, so the layers stay testable in isolation.

use crate::{FieldError, HubError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validating request types.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `HubError` on failure.
    fn validate_request(&self) -> Result<(), HubError> {
        self.validate().map_err(validation_errors_to_hub_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to a `HubError`.
#[must_use]
pub fn validation_errors_to_hub_error(errors: ValidationErrors) -> HubError {
    let field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                code: error.code.to_string(),
            })
        })
        .collect();

    let message = field_errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    HubError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }
}
