//! The survey schema the editor starts with

/// Initial editor buffer: a three-field "Project Requirements Survey"
pub const INITIAL_SCHEMA: &str = r#"{
  "formTitle": "Project Requirements Survey",
  "formDescription": "Please fill out this survey about your project needs",
  "fields": [
    { "id": "name", "type": "text", "label": "Full Name", "required": true, "placeholder": "Enter your full name" },
    { "id": "email", "type": "email", "label": "Email Address", "required": true, "placeholder": "you@example.com" },
    { "id": "companySize", "type": "select", "label": "Company Size", "required": true, "options": [
      { "value": "1-50", "label": "1-50 employees" },
      { "value": "51-200", "label": "51-200 employees" }
    ]}
  ]
}"#;
