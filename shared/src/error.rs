//! Validation errors for domain models

use thiserror::Error;

/// Constraint violations detected on domain models
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace only
    #[error("{0} must not be blank")]
    Blank(&'static str),
}

/// Result type for model validation
pub type ValidationResult<T> = Result<T, ValidationError>;
