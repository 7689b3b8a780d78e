//! Entered values and form submission
//!
//! Values are keyed by field id, so two controls that share an id also share a
//! value. Submitting either yields every rendered id with its value or blocks
//! with one message per offending field.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

use crate::error::CoreError;
use crate::preview::{Control, ControlKind, RenderedForm};

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";

// ============================================================================
// Form Values
// ============================================================================

/// Live state of the preview's controls
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    values: HashMap<String, String>,
}

impl FormValues {
    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    pub fn set(&mut self, id: &str, value: impl Into<String>) {
        self.values.insert(id.to_string(), value.into());
    }

    /// Set a value coming from outside the UI, checking it against the form.
    ///
    /// Used by the headless `check --fill` path, where there is no dropdown to
    /// constrain what a select can hold.
    pub fn fill(&mut self, form: &RenderedForm, id: &str, value: &str) -> Result<(), CoreError> {
        let control = form
            .control(id)
            .ok_or_else(|| CoreError::UnknownField(id.to_string()))?;

        if let ControlKind::Dropdown(options) = &control.kind {
            if !options.iter().any(|o| o.value == value) {
                return Err(CoreError::UnknownOption {
                    id: id.to_string(),
                    value: value.to_string(),
                });
            }
        }

        self.set(id, value);
        Ok(())
    }
}

// ============================================================================
// Outcomes
// ============================================================================

/// A completed form: field id -> entered value
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Submission {
    values: BTreeMap<String, String>,
}

impl Submission {
    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Per-field messages from a blocked submission
#[derive(Clone, Debug, Default, PartialEq, Eq, Error)]
#[error("{} field(s) need attention", .errors.len())]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn get(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(String::as_str)
    }

    pub fn insert(&mut self, id: &str, message: impl Into<String>) {
        self.errors.insert(id.to_string(), message.into());
    }

    /// Forget the message for one field, e.g. once its value changes
    pub fn clear_field(&mut self, id: &str) {
        self.errors.remove(id);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// ============================================================================
// Submit
// ============================================================================

/// Check one control's value the way a native input would on submit
pub fn check_control(control: &Control, value: &str) -> Option<&'static str> {
    let is_email = control.kind == ControlKind::EmailInput;
    // email inputs strip surrounding whitespace from their value; text inputs keep it
    let value = if is_email { value.trim() } else { value };

    if control.required && value.is_empty() {
        return Some(REQUIRED_MESSAGE);
    }
    if is_email && !value.is_empty() && !is_valid_email(value) {
        return Some(EMAIL_MESSAGE);
    }
    None
}

/// HTML "valid e-mail address": `atext`/`.` local part, then dot-separated
/// domain labels of letters, digits and `-` that neither start nor end with `-`
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && local.chars().all(is_local_char) && domain.split('.').all(is_domain_label)
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_domain_label(label: &str) -> bool {
    (1..=63).contains(&label.len())
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}

/// Collect every rendered control's value, or the errors that block submission
pub fn submit(form: &RenderedForm, values: &FormValues) -> Result<Submission, FieldErrors> {
    let mut submission = Submission::default();
    let mut errors = FieldErrors::default();

    for control in &form.controls {
        let value = values.get(&control.id).unwrap_or_default();
        if let Some(message) = check_control(control, value) {
            // the first failing control with a given id owns the message
            if errors.get(&control.id).is_none() {
                errors.insert(&control.id, message);
            }
            continue;
        }
        submission.values.insert(control.id.clone(), value.to_string());
    }

    if errors.is_empty() {
        log::info!("Form submitted with {} value(s)", submission.values.len());
        Ok(submission)
    } else {
        log::debug!("Submission blocked: {}", errors);
        Err(errors)
    }
}
