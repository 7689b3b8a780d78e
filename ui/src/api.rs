//! API client for the Formsmith backend

use formsmith_core::api::ApiResponse;
use formsmith_core::settings::EditorSettings;
use gloo_net::http::Request;

const API_BASE: &str = "/api";

/// Fetch the editor settings the server was started with
pub async fn get_editor_settings() -> Result<EditorSettings, String> {
    let url = format!("{}/settings/editor", API_BASE);
    fetch_json::<EditorSettings>(&url).await
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    // `trunk serve` answers unknown paths with index.html; don't try to parse it
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let api_response: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    api_response.into_result()
}
