//! Confirm Button Component
//!
//! Inline two-step button: the first click asks, ✓ commits, ✗ backs out.

use leptos::prelude::*;

/// Inline confirmation button
///
/// # Arguments
/// * `button_class` - CSS class for the initial button
/// * `label` - text of the initial button
/// * `prompt` - question shown next to ✓/✗
/// * `on_request` - runs when the question is shown
/// * `on_confirm` - runs on ✓
/// * `on_cancel` - runs on ✗
#[component]
pub fn ConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] label: String,
    #[prop(into)] prompt: String,
    #[prop(optional, into)] on_request: Option<Callback<()>>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(optional, into)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    if let Some(cb) = on_request {
                        cb.run(());
                    }
                    set_confirming.set(true);
                }
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="confirm-inline">
                <span class="confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_confirm.run(());
                        set_confirming.set(false);
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        if let Some(cb) = on_cancel {
                            cb.run(());
                        }
                        set_confirming.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
