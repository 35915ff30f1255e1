//! Delete Confirm Button Component
//!
//! Inline delete confirmation: a Delete button that turns into
//! "Delete?" with confirm/cancel actions.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// # Arguments
/// * `confirming` - Whether this record is the one awaiting confirmation
/// * `on_request` - Delete clicked, ask for confirmation
/// * `on_confirm` - User confirmed; the request is sent
/// * `on_cancel` - User backed out
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] confirming: Signal<bool>,
    #[prop(into)] on_request: Callback<()>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <Show when=move || !confirming.get()>
            <button
                class="btn btn-danger"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_request.run(());
                }
            >
                "Delete"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="btn btn-danger confirm-btn"
                    disabled=move || disabled.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="btn cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_cancel.run(());
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
