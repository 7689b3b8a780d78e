pub mod form_field;
pub mod form_preview;
pub mod json_editor;
