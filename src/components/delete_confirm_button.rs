//! Delete Confirm Button Component
//!
//! Reusable inline delete confirmation that issues the delete request itself.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::DeleteTarget;
use crate::context::use_app_context;
use crate::delete_flow::DeleteFlow;
use crate::lifecycle::use_mount_guard;

/// Inline delete confirmation button
///
/// Shows a trash button initially. When clicked, shows the confirmation text
/// with Cancel/Delete. While the request runs both buttons are disabled; on
/// failure the error is shown and the confirmation stays open.
///
/// # Arguments
/// * `target` - Record to delete
/// * `confirmation_text` - Question shown before deleting
/// * `on_success` - Called after the server confirmed the delete
/// * `on_error` - Called with the server's message on failure
#[component]
pub fn DeleteConfirmButton(
    target: DeleteTarget,
    #[prop(into)] confirmation_text: String,
    #[prop(into)] on_success: Callback<()>,
    #[prop(optional, into)] on_error: Option<Callback<String>>,
    #[prop(optional, into)] button_class: Option<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let guard = use_mount_guard();
    let flow = RwSignal::new(DeleteFlow::default());
    let target = StoredValue::new(target);
    let button_class = button_class.unwrap_or_else(|| "icon-btn delete-btn".to_string());

    let confirm = Callback::new(move |()| {
        let mut send = false;
        flow.update(|f| send = f.confirm());
        if !send {
            log::debug!("[DELETE] confirm ignored, request already in flight");
            return;
        }

        let api = ctx.api();
        let target = target.get_value();
        let guard = guard.clone();
        spawn_local(async move {
            let result = target.delete(&api).await;
            if !guard.is_mounted() {
                log::debug!("[DELETE] {:?} finished after unmount", target);
                return;
            }
            match result {
                Ok(()) => {
                    log::info!("[DELETE] {:?} deleted", target);
                    flow.update(|f| f.finish(Ok(())));
                    on_success.run(());
                }
                Err(e) => {
                    let message = e.to_string();
                    log::warn!("[DELETE] {:?} failed: {}", target, message);
                    flow.update(|f| f.finish(Err(message.clone())));
                    if let Some(on_error) = on_error {
                        on_error.run(message);
                    }
                }
            }
        });
    });

    let in_flight = move || flow.with(DeleteFlow::is_in_flight);

    view! {
        <Show when=move || !flow.with(DeleteFlow::is_open)>
            <button
                class=button_class.clone()
                title="Delete"
                on:click=move |ev| {
                    ev.stop_propagation();
                    flow.update(DeleteFlow::open);
                }
            >
                "🗑"
            </button>
        </Show>
        <Show when=move || flow.with(DeleteFlow::is_open)>
            <span class="delete-confirm">
                <span class="delete-confirm-text">{confirmation_text.clone()}</span>
                {move || flow.with(|f| f.error().map(str::to_string)).map(|error| view! {
                    <span class="delete-confirm-error">{error}</span>
                })}
                <button
                    class="cancel-btn"
                    disabled=in_flight
                    on:click=move |ev| {
                        ev.stop_propagation();
                        flow.update(|f| {
                            f.cancel();
                        });
                    }
                >
                    "Cancel"
                </button>
                <button
                    class="confirm-btn danger"
                    disabled=in_flight
                    on:click=move |ev| {
                        ev.stop_propagation();
                        confirm.run(());
                    }
                >
                    {move || if in_flight() { "Deleting..." } else { "Delete" }}
                </button>
            </span>
        </Show>
    }
}
