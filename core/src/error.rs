//! Error types for the schema pipeline

use thiserror::Error;

/// Errors raised when schema text or entered values cannot be used
#[derive(Debug, Error)]
pub enum CoreError {
    /// The text is not syntactically valid JSON, or does not decode as a form schema
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A value was supplied for an id that has no rendered control
    #[error("No control with id '{0}' in the rendered form")]
    UnknownField(String),

    /// A select was given a value that none of its options carry
    #[error("Option '{value}' is not offered by select '{id}'")]
    UnknownOption { id: String, value: String },
}
