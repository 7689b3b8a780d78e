//! HTTP adapters for `formsmith serve`

pub mod health_handler;
pub mod settings_handler;
pub mod ui_handler;
