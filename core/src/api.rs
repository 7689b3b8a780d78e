//! Response envelope shared by the settings endpoint and the browser client

use serde::{Deserialize, Serialize};

/// Standard API response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Collapse the envelope into a `Result`, the way the UI consumes it
    pub fn into_result(self) -> Result<T, String> {
        if self.success {
            self.data.ok_or_else(|| "No data in response".to_string())
        } else {
            Err(self.error.unwrap_or_else(|| "Unknown error".to_string()))
        }
    }
}
