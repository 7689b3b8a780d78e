use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::adapters::ui_handler::UIHandler;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    /// False when the binary was built without the UI bundle
    pub ui_bundled: bool,
}

/// Basic health check - returns 200 if server is running
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let status = HealthStatus {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        ui_bundled: UIHandler::is_bundled(),
    };

    (StatusCode::OK, Json(status))
}
