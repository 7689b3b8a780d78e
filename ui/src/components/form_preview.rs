//! Live form preview
//!
//! Renders whatever the schema text currently describes, keeps the values
//! entered into it, and runs submission checks.

use formsmith_core::preview::{Preview, RenderedForm};
use formsmith_core::{render_preview, FieldErrors, FormValues, Submission};
use leptos::prelude::*;

use super::form_field::FormField;

#[component]
pub fn FormPreview(
    /// Schema text to render
    #[prop(into)]
    schema: Signal<String>,
) -> impl IntoView {
    let preview = Memo::new(move |_| render_preview(&schema.get()));

    let values = RwSignal::new(FormValues::default());
    let errors = RwSignal::new(FieldErrors::default());
    let submitted = RwSignal::new(None::<Submission>);

    // A changed schema starts a fresh form
    Effect::new(move |_| {
        let fresh = preview.with(|p| match p {
            Preview::Form(form) => form.initial_values(),
            Preview::Invalid => FormValues::default(),
        });
        values.set(fresh);
        errors.set(FieldErrors::default());
        submitted.set(None);
    });

    view! {
        <div class="form-preview">
            <div class="panel-header">
                <h2 class="panel-title">"Preview"</h2>
            </div>
            {move || match preview.get() {
                Preview::Invalid => view! { <p class="invalid-json">"Invalid JSON"</p> }.into_any(),
                Preview::Form(form) => {
                    view! { <PreviewForm form=form values=values errors=errors submitted=submitted/> }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn PreviewForm(
    form: RenderedForm,
    values: RwSignal<FormValues>,
    errors: RwSignal<FieldErrors>,
    submitted: RwSignal<Option<Submission>>,
) -> impl IntoView {
    let title = form.title.clone();
    let description = form.description.clone();
    let controls = form.controls.clone();
    let form = StoredValue::new(form);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let outcome = form.with_value(|f| values.with_untracked(|v| f.submit(v)));
        match outcome {
            Ok(submission) => {
                match submission.to_json_pretty() {
                    Ok(json) => log::info!("Form Data: {}", json),
                    Err(e) => log::warn!("Could not serialize submission: {}", e),
                }
                errors.set(FieldErrors::default());
                submitted.set(Some(submission));
            }
            Err(field_errors) => {
                log::debug!("{}", field_errors);
                submitted.set(None);
                errors.set(field_errors);
            }
        }
    };

    view! {
        <div class="rendered-form">
            <h3 class="form-title">{title}</h3>
            <p class="form-description">{description}</p>

            <form novalidate=true on:submit=on_submit>
                {controls
                    .into_iter()
                    .map(|control| view! { <FormField control=control values=values errors=errors/> })
                    .collect_view()}
                <button type="submit" class="submit-button">"Submit"</button>
            </form>

            {move || {
                submitted
                    .get()
                    .map(|submission| {
                        view! {
                            <div class="submit-ack" role="status">
                                <p>"Form submitted successfully!"</p>
                                <pre>{submission.to_json_pretty().unwrap_or_default()}</pre>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
