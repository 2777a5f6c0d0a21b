//! Validation utilities.

use crate::ProductosError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `ProductosError` on failure.
    fn validate_request(&self) -> Result<(), ProductosError> {
        self.validate().map_err(validation_errors_to_productos_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `ProductosError`.
///
/// Field errors are flattened into a single `field: message` list sorted by
/// field name so the message is stable across runs.
#[must_use]
pub fn validation_errors_to_productos_error(errors: ValidationErrors) -> ProductosError {
    let mut field_errors: Vec<(String, String)> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                (
                    field.to_string(),
                    error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), ToString::to_string),
                )
            })
        })
        .collect();
    field_errors.sort();

    let message = field_errors
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join("; ");

    ProductosError::Validation(message)
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
