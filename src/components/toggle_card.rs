//! Labeled switch card used for tool toggles.

use leptos::prelude::*;

/// Card with icon, label, description and a switch. Reports the requested
/// state through `on_toggle`; the caller owns `checked`.
#[component]
pub fn ToggleCard(
    label: String,
    icon: &'static str,
    description: String,
    error_message: Option<String>,
    checked: bool,
    disabled: bool,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    let has_error = error_message.is_some();
    let has_description = !description.is_empty();

    view! {
        <label
            class="toggle-card"
            class:toggle-card--checked=checked
            class:toggle-card--disabled=disabled
            class:toggle-card--error=has_error
        >
            <span class=format!("icon icon--{icon} toggle-card__icon") aria-hidden="true"></span>
            <span class="toggle-card__text">
                <span class="toggle-card__label">{label}</span>
                <Show when=move || has_description>
                    <span class="toggle-card__description">{description.clone()}</span>
                </Show>
                {error_message.map(|message| view! { <span class="toggle-card__error">{message}</span> })}
            </span>
            <input
                class="toggle-card__switch"
                type="checkbox"
                role="switch"
                prop:checked=checked
                disabled=disabled
                on:change=move |ev| {
                    if !disabled {
                        on_toggle.run(event_target_checked(&ev));
                    }
                }
            />
        </label>
    }
}
