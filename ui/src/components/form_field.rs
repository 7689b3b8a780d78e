use formsmith_core::preview::{Control, ControlKind};
use formsmith_core::{FieldErrors, FormValues};
use leptos::prelude::*;

/// One labelled control with its error line
#[component]
pub fn FormField(
    control: Control,
    values: RwSignal<FormValues>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let dom_id = format!("field-{}", control.id);
    let required = control.required;

    let value_id = control.id.clone();
    let current = move || values.with(|v| v.get(&value_id).unwrap_or_default().to_string());

    // Editing a field clears its error, nothing else
    let input_id = control.id.clone();
    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        values.update(|v| v.set(&input_id, value));
        errors.update(|e| e.clear_field(&input_id));
    };

    let error_id = control.id.clone();
    let error = move || errors.with(|e| e.get(&error_id).map(str::to_string));

    let input = match control.kind {
        ControlKind::Dropdown(options) => view! {
            <select
                id=dom_id.clone()
                name=control.id.clone()
                class="form-select"
                aria-required=required.to_string()
                prop:value=current
                on:change=on_input
            >
                {options
                    .into_iter()
                    .map(|option| view! { <option value=option.value>{option.label}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        kind => view! {
            <input
                type=kind.input_type().unwrap_or("text")
                id=dom_id.clone()
                name=control.id.clone()
                class="form-input"
                placeholder=control.placeholder.unwrap_or_default()
                aria-required=required.to_string()
                prop:value=current
                on:input=on_input
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-field">
            <label for=dom_id class="form-label">
                {control.label}
                {required.then(|| view! { <span class="required-marker">" *"</span> })}
            </label>
            {input}
            {move || error().map(|message| view! { <p class="error-message">{message}</p> })}
        </div>
    }
}
