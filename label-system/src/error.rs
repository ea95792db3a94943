//! Error types for the label system

use thiserror::Error;

/// Boxed error returned by pluggable collaborators (template engines...)
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Label system error types
#[derive(Debug, Error)]
pub enum LabelError {
    /// Caller broke a precondition (e.g. empty element list)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The user template of a label failed to compile or run
    #[error("Template execution failed: {0}")]
    TemplateExecution(#[source] BoxError),

    /// Barcode could not be encoded
    #[error("Barcode error: {0}")]
    Barcode(String),

    /// Page template rendering failed
    #[error("Render error: {0}")]
    Render(#[source] BoxError),

    /// Element or payload could not be serialized for a template
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Invalid config: {0}")]
    Config(String),
}

/// Result type for label operations
pub type LabelResult<T> = Result<T, LabelError>;
