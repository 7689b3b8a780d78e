//! # Formsmith Core
//!
//! The target-independent half of Formsmith: everything between the raw text in
//! the editor and the values a user submits from the live preview.
//!
//! ## Pipeline
//!
//! - [`validator`]: text -> well-formedness (JSON syntax only)
//! - [`preview`]: text -> rendered form model (header plus ordered controls)
//! - [`submission`]: entered values -> completed form or per-field errors
//!
//! The validator and the renderer parse the text independently; neither checks
//! the shape of the schema beyond what is needed to draw controls.
//!
//! ```rust
//! use formsmith_core::{preview::render_preview, sample::INITIAL_SCHEMA, validator::validate_schema};
//!
//! assert!(validate_schema(INITIAL_SCHEMA).is_valid);
//! let form = render_preview(INITIAL_SCHEMA).into_form().unwrap();
//! assert_eq!(form.controls.len(), 3);
//! ```

pub mod api;
pub mod debounce;
pub mod error;
pub mod preview;
pub mod sample;
pub mod schema;
pub mod settings;
pub mod submission;
pub mod validator;

pub use error::CoreError;
pub use preview::{render_preview, Control, ControlKind, Preview, RenderedForm};
pub use schema::{FieldSpec, FieldType, FormSchema, SelectOption};
pub use submission::{FieldErrors, FormValues, Submission};
pub use validator::{validate_schema, ValidationResult};
