use thiserror::Error;

use crate::config::{EditorSettings, ServerSettings, Settings};

/// Longest accepted preview debounce; beyond this the preview feels broken
pub const MAX_DEBOUNCE_MS: u64 = 5_000;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    /// Check every section, reporting all problems at once
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_server(&settings.server) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_editor(&settings.editor) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &ServerSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if server.host.trim().is_empty() {
            errors.push(ValidationError::MissingField("server.host".to_string()));
        }

        if server.port == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_editor(editor: &EditorSettings) -> Result<(), Vec<ValidationError>> {
        if editor.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(vec![ValidationError::InvalidValue {
                field: "editor.debounce_ms".to_string(),
                reason: format!("Must be at most {} ms", MAX_DEBOUNCE_MS),
            }]);
        }
        Ok(())
    }
}
