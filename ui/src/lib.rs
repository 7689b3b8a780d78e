use formsmith_core::sample::INITIAL_SCHEMA;
use formsmith_core::settings::EditorSettings;
use leptos::prelude::*;

mod api;
mod components;
mod scheduler;

use components::form_preview::FormPreview;
use components::json_editor::JsonEditor;
use scheduler::PreviewScheduler;

#[component]
pub fn App() -> impl IntoView {
    // What the editor shows, updated on every keystroke
    let (schema_text, set_schema_text) = signal(INITIAL_SCHEMA.to_string());
    // What the preview renders, trailing the editor by the debounce delay
    let (preview_text, set_preview_text) = signal(INITIAL_SCHEMA.to_string());

    let validation = Memo::new(move |_| formsmith_core::validate_schema(&schema_text.get()));
    let is_valid = Signal::derive(move || validation.with(|v| v.is_valid));

    let scheduler =
        StoredValue::new_local(PreviewScheduler::new(EditorSettings::default().debounce_ms));

    // Server settings are optional; `trunk serve` alone has no backend
    wasm_bindgen_futures::spawn_local(async move {
        match api::get_editor_settings().await {
            Ok(settings) => {
                log::debug!("Preview debounce: {} ms", settings.debounce_ms);
                scheduler.update_value(|s| s.set_delay(settings.debounce_ms));
            }
            Err(e) => log::debug!("Using default editor settings ({})", e),
        }
    });

    Effect::new(move |was_valid: Option<bool>| {
        let valid = is_valid.get();
        if was_valid.is_some_and(|prev| prev != valid) {
            match validation.with_untracked(|v| v.detail.clone()) {
                Some(detail) => log::info!(
                    "Schema is no longer valid JSON: {} at line {}, column {}",
                    detail.message,
                    detail.line,
                    detail.column
                ),
                None => log::info!("Schema is valid JSON again"),
            }
        }
        valid
    });

    let on_change = Callback::new(move |text: String| {
        set_schema_text.set(text.clone());
        let immediate = scheduler
            .try_update_value(|s| {
                s.schedule(text, move || {
                    if let Some(ready) = scheduler.try_update_value(|s| s.fire()).flatten() {
                        set_preview_text.set(ready);
                    }
                })
            })
            .flatten();
        if let Some(ready) = immediate {
            set_preview_text.set(ready);
        }
    });

    view! {
        <div class="app-container">
            <header class="app-header">
                <h1>"Formsmith"</h1>
            </header>
            <main class="app-main">
                <section class="editor-container">
                    <JsonEditor value=schema_text on_change=on_change is_valid=is_valid/>
                </section>
                <section class="preview-container">
                    <FormPreview schema=preview_text/>
                </section>
            </main>
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
