//! Editor behaviour settings, served by the binary and read by the browser app

use serde::{Deserialize, Serialize};

/// Default delay between the last keystroke and the preview re-render
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Preview debounce in milliseconds; 0 re-renders on every keystroke
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}
