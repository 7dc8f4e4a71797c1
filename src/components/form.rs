//! Form building blocks shared by the auth pages.

use leptos::prelude::*;

/// Labeled text input bound to a string signal.
#[component]
pub fn TextField(
    /// Visible label text.
    label: &'static str,
    /// Bound value signal.
    value: RwSignal<String>,
    /// HTML input type.
    #[prop(default = "text")]
    input_type: &'static str,
    /// Autocomplete hint passed through to the browser.
    #[prop(default = "off")]
    autocomplete: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=input_type
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Inline error paragraph, rendered only while the message is non-empty.
#[component]
pub fn FormError(message: RwSignal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <p class="form__error">{move || message.get()}</p>
        </Show>
    }
}
