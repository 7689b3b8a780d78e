//! Form schema types
//!
//! A form schema is the JSON document in the editor: a title, a description and
//! an ordered list of fields. Nothing here checks that field ids are unique.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::error::CoreError;

// ============================================================================
// Field Type
// ============================================================================

/// Kind of control a field asks for
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldType {
    Text,
    Email,
    Select,
    /// Any other `type` string, kept verbatim. Renders nothing.
    Unsupported(String),
}

impl FieldType {
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Select => "select",
            FieldType::Unsupported(raw) => raw,
        }
    }
}

impl Default for FieldType {
    /// A field without a `type` key is treated like an unknown type
    fn default() -> Self {
        FieldType::Unsupported(String::new())
    }
}

impl From<&str> for FieldType {
    fn from(raw: &str) -> Self {
        match raw {
            "text" => FieldType::Text,
            "email" => FieldType::Email,
            "select" => FieldType::Select,
            other => FieldType::Unsupported(other.to_string()),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(FieldType::from(raw.as_str()))
    }
}

// ============================================================================
// Field Spec
// ============================================================================

/// One entry of a select's option list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// One field of the form
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub id: String,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Only meaningful for `select`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

// ============================================================================
// Form Schema
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    #[serde(rename = "formTitle", alias = "title", default)]
    pub title: String,
    #[serde(rename = "formDescription", alias = "description", default)]
    pub description: String,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// Strict parse: the whole document must decode, every field included
    pub fn parse(text: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Title and description of a parsed document, empty when absent
pub fn read_header(value: &Value) -> (String, String) {
    let text_at = |keys: [&str; 2]| {
        keys.iter()
            .find_map(|k| value.get(*k).and_then(Value::as_str))
            .unwrap_or_default()
            .to_string()
    };
    (
        text_at(["formTitle", "title"]),
        text_at(["formDescription", "description"]),
    )
}

/// Decode each `fields` entry on its own, keeping its array position
pub fn read_fields(
    value: &Value,
) -> impl Iterator<Item = (usize, Result<FieldSpec, serde_json::Error>)> + '_ {
    value
        .get("fields")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(index, entry)| (index, FieldSpec::deserialize(entry)))
}
