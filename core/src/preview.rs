//! Preview render model
//!
//! Turns editor text into the form the preview panel draws. The text is parsed
//! here on its own, independently of [`crate::validator`].

use serde_json::Value;

use crate::schema::{self, FieldType, SelectOption};
use crate::submission::{self, FieldErrors, FormValues, Submission};

// ============================================================================
// Render Model
// ============================================================================

/// Result of rendering one version of the editor text
#[derive(Clone, Debug, PartialEq)]
pub enum Preview {
    /// Text did not parse; the panel shows a static "Invalid JSON" message
    Invalid,
    Form(RenderedForm),
}

impl Preview {
    pub fn is_invalid(&self) -> bool {
        matches!(self, Preview::Invalid)
    }

    pub fn into_form(self) -> Option<RenderedForm> {
        match self {
            Preview::Form(form) => Some(form),
            Preview::Invalid => None,
        }
    }
}

/// Input widget chosen for a field
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlKind {
    TextInput,
    EmailInput,
    /// Options in listed order
    Dropdown(Vec<SelectOption>),
}

impl ControlKind {
    /// HTML input type for single-line controls
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            ControlKind::TextInput => Some("text"),
            ControlKind::EmailInput => Some("email"),
            ControlKind::Dropdown(_) => None,
        }
    }
}

/// One rendered control, bound to a field id
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Control {
    pub id: String,
    pub label: String,
    pub kind: ControlKind,
    pub required: bool,
    pub placeholder: Option<String>,
}

impl Control {
    /// Value the control holds before the user touches it
    pub fn initial_value(&self) -> String {
        match &self.kind {
            ControlKind::Dropdown(options) => {
                options.first().map(|o| o.value.clone()).unwrap_or_default()
            }
            _ => String::new(),
        }
    }
}

/// Why a `fields` entry produced no control
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    UnsupportedType(String),
    Unreadable(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedField {
    pub index: usize,
    pub id: Option<String>,
    pub reason: SkipReason,
}

/// Header plus one control per supported field, in listed order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderedForm {
    pub title: String,
    pub description: String,
    pub controls: Vec<Control>,
    /// Entries that rendered nothing. Not shown in the UI.
    pub skipped: Vec<SkippedField>,
}

impl RenderedForm {
    /// First control with the given id. Duplicate ids are not rejected.
    pub fn control(&self, id: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.id == id)
    }

    pub fn initial_values(&self) -> FormValues {
        let mut values = FormValues::default();
        for control in &self.controls {
            if values.get(&control.id).is_none() {
                values.set(&control.id, control.initial_value());
            }
        }
        values
    }

    pub fn submit(&self, values: &FormValues) -> Result<Submission, FieldErrors> {
        submission::submit(self, values)
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render editor text into a preview
pub fn render_preview(text: &str) -> Preview {
    let value = match serde_json::from_str::<Value>(text) {
        Ok(v) => v,
        Err(_) => return Preview::Invalid,
    };

    let (title, description) = schema::read_header(&value);
    let mut form = RenderedForm {
        title,
        description,
        ..RenderedForm::default()
    };

    for (index, entry) in schema::read_fields(&value) {
        let field = match entry {
            Ok(field) => field,
            Err(e) => {
                log::warn!("Skipping unreadable field #{}: {}", index, e);
                form.skipped.push(SkippedField {
                    index,
                    id: None,
                    reason: SkipReason::Unreadable(e.to_string()),
                });
                continue;
            }
        };

        let kind = match field.field_type {
            FieldType::Text => ControlKind::TextInput,
            FieldType::Email => ControlKind::EmailInput,
            FieldType::Select => ControlKind::Dropdown(field.options),
            FieldType::Unsupported(raw) => {
                log::debug!("Field '{}' has unsupported type '{}'", field.id, raw);
                form.skipped.push(SkippedField {
                    index,
                    id: Some(field.id),
                    reason: SkipReason::UnsupportedType(raw),
                });
                continue;
            }
        };

        form.controls.push(Control {
            id: field.id,
            label: field.label,
            kind,
            required: field.required,
            placeholder: field.placeholder,
        });
    }

    Preview::Form(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::INITIAL_SCHEMA;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invalid_text() {
        assert!(render_preview(r#"{"fields": [}"#).is_invalid());
        assert!(render_preview("").is_invalid());
    }

    #[test]
    fn test_initial_schema_controls() {
        let form = render_preview(INITIAL_SCHEMA).into_form().unwrap();
        assert_eq!(form.title, "Project Requirements Survey");
        assert_eq!(
            form.description,
            "Please fill out this survey about your project needs"
        );

        let kinds: Vec<_> = form.controls.iter().map(|c| c.kind.input_type()).collect();
        assert_eq!(kinds, vec![Some("text"), Some("email"), None]);
        assert!(form.controls.iter().all(|c| c.required));
        assert!(form.skipped.is_empty());
    }

    #[test]
    fn test_skipped_positions() {
        let text = r#"{"fields": [
            {"id": "a", "type": "text"},
            {"id": 1},
            {"id": "b", "type": "date"},
            {"id": "c", "type": "email"}
        ]}"#;
        let form = render_preview(text).into_form().unwrap();
        assert_eq!(form.controls.len(), 2);
        assert_eq!(form.skipped.len(), 2);
        assert_eq!(form.skipped[0].index, 1);
        assert!(matches!(form.skipped[0].reason, SkipReason::Unreadable(_)));
        assert_eq!(form.skipped[1].index, 2);
        assert_eq!(form.skipped[1].id.as_deref(), Some("b"));
        assert_eq!(
            form.skipped[1].reason,
            SkipReason::UnsupportedType("date".to_string())
        );
    }

    #[test]
    fn test_non_object_document_renders_empty_form() {
        let form = render_preview("[1, 2]").into_form().unwrap();
        assert_eq!(form, RenderedForm::default());
    }

    #[test]
    fn test_select_initial_value_is_first_option() {
        let form = render_preview(INITIAL_SCHEMA).into_form().unwrap();
        let values = form.initial_values();
        assert_eq!(values.get("companySize"), Some("1-50"));
        assert_eq!(values.get("name"), Some(""));
    }

    #[test]
    fn test_select_without_options_starts_empty() {
        let form = render_preview(r#"{"fields": [{"id": "s", "type": "select"}]}"#)
            .into_form()
            .unwrap();
        assert_eq!(form.controls[0].kind, ControlKind::Dropdown(vec![]));
        assert_eq!(form.initial_values().get("s"), Some(""));
    }
}
