use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

/// Trunk output of the `ui` crate. Empty until `trunk build` has run.
#[derive(RustEmbed)]
#[folder = "ui/dist"]
#[allow_missing = true]
struct Asset;

pub struct UIHandler;

impl UIHandler {
    pub async fn serve(uri: Uri) -> Response {
        let path = uri.path().trim_start_matches('/');
        let path = if path.is_empty() { "index.html" } else { path };

        if let Some(response) = Self::asset(path) {
            return response;
        }

        // SPA fallback, except for things that look like files
        if !path.contains('.') {
            if let Some(response) = Self::asset("index.html") {
                return response;
            }
        }

        (StatusCode::NOT_FOUND, "404 Not Found").into_response()
    }

    fn asset(path: &str) -> Option<Response> {
        Asset::get(path).map(|content| {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        })
    }

    /// Whether the UI bundle was built before this binary
    pub fn is_bundled() -> bool {
        Asset::get("index.html").is_some()
    }
}
