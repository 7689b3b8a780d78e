//! # Formsmith
//!
//! A JSON-schema-driven form builder: edit a JSON document describing a form on
//! the left, use the live preview of that form on the right.
//!
//! The browser app lives in the `formsmith-ui` crate and the schema pipeline in
//! `formsmith-core`. This crate is the native side:
//!
//! - **`serve`**: hosts the compiled UI bundle plus a small settings endpoint
//! - **`check`**: runs the pipeline headlessly against a schema file
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use formsmith::config::Settings;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::from_file(Path::new("formsmith.toml"))?;
//!     let app = formsmith::create_app(settings);
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod check;
pub mod cli;
pub mod config;

use crate::adapters::{health_handler, settings_handler, ui_handler::UIHandler};
use crate::config::Settings;
use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Instant;

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub started_at: Instant,
}

/// Creates the Axum application router with all endpoints configured.
pub fn create_app(settings: Settings) -> Router {
    let state = AppState {
        settings: Arc::new(settings),
        started_at: Instant::now(),
    };

    let api_router = Router::new().route(
        "/settings/editor",
        get(settings_handler::get_editor_settings),
    );

    Router::new()
        .route("/health", get(health_handler::health))
        .nest("/api", api_router)
        // UI endpoint (catch-all for SPA)
        .fallback(UIHandler::serve)
        .with_state(state)
        // lets `trunk serve` on another port read the settings endpoint
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
}

/// Bind and serve until the process is stopped
pub async fn serve(settings: Settings) -> anyhow::Result<()> {
    let addr = settings.bind_address();
    if !UIHandler::is_bundled() {
        tracing::warn!("UI bundle not found; build it with `trunk build` in ui/ first");
    }

    let app = create_app(settings);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
