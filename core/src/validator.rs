//! JSON well-formedness check for the editor buffer
//!
//! Only syntax is checked. A document that parses but is not a usable form
//! schema (no `fields`, unknown field types) is still reported valid.

use serde::Serialize;

/// Generic message reported for any syntax error
pub const INVALID_JSON: &str = "Invalid JSON";

/// Where the parser gave up
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SyntaxDetail {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(skip)]
    pub detail: Option<SyntaxDetail>,
}

impl ValidationResult {
    fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            detail: None,
        }
    }
}

/// Validate editor text. `is_valid` is true iff the text parses as JSON.
pub fn validate_schema(text: &str) -> ValidationResult {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(_) => ValidationResult::valid(),
        Err(e) => ValidationResult {
            is_valid: false,
            errors: vec![INVALID_JSON.to_string()],
            detail: Some(SyntaxDetail {
                message: e.to_string(),
                line: e.line(),
                column: e.column(),
            }),
        },
    }
}
