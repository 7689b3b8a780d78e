use axum::{extract::State, Json};
use formsmith_core::api::ApiResponse;
use formsmith_core::settings::EditorSettings;

use crate::AppState;

/// Editor behaviour the browser app picks up on load
pub async fn get_editor_settings(
    State(state): State<AppState>,
) -> Json<ApiResponse<EditorSettings>> {
    Json(ApiResponse::ok(state.settings.editor))
}
