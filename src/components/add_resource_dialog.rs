//! Add Resource Dialog
//!
//! Picks an inventory item and quantity and links it to a task.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::fetch::{use_fetch, FetchState};
use crate::format::or_placeholder;
use crate::lifecycle::use_mount_guard;
use crate::models::{NewTaskResource, RecordId};
use crate::task_form::parse_quantity;

#[component]
pub fn AddResourceDialog(
    task_id: RecordId,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_resource_added: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let guard = use_mount_guard();
    let task_id = StoredValue::new(task_id);

    let items = use_fetch(
        || Some(()),
        move |()| {
            let api = ctx.api();
            async move { api::list_items(&api).await }
        },
    );

    let (selected, set_selected) = signal(String::new());
    let (quantity, set_quantity) = signal(String::from("1"));
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }

        let wanted = selected.get_untracked();
        let item_id = items.with_state(|state| {
            state
                .data()
                .and_then(|list| list.iter().find(|i| i.id.to_string() == wanted))
                .map(|i| i.id.clone())
        });
        let Some(item_id) = item_id else {
            set_error.set(Some("Select an item".to_string()));
            return;
        };
        let quantity = match parse_quantity(&quantity.get_untracked()) {
            Ok(q) => q,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };

        let body = NewTaskResource { task_id: task_id.get_value(), item_id, quantity };
        set_saving.set(true);
        set_error.set(None);

        let api = ctx.api();
        let guard = guard.clone();
        spawn_local(async move {
            let result = api::add_task_resource(&api, &body).await;
            if !guard.is_mounted() {
                return;
            }
            set_saving.set(false);
            match result {
                Ok(()) => {
                    log::info!("[RESOURCE] added item {} to task {}", body.item_id, body.task_id);
                    on_resource_added.run(());
                }
                Err(e) => {
                    log::warn!("[RESOURCE] add failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| if !saving.get_untracked() { on_close.run(()) }>
            <form class="dialog small" on:click=|ev| ev.stop_propagation() on:submit=submit>
                <h3 class="dialog-title">"Add Resource"</h3>

                <label class="field-label">"Item"</label>
                {move || match items.state() {
                    FetchState::Loading => view! { <p class="muted">"Loading items..."</p> }.into_any(),
                    FetchState::Failed(msg) => view! {
                        <div class="alert error">"Failed to load items: " {msg}</div>
                    }.into_any(),
                    FetchState::Loaded(list) => view! {
                        <select
                            class="field-input"
                            prop:value=move || selected.get()
                            on:change=move |ev| set_selected.set(event_target_value(&ev))
                        >
                            <option value="">"Select an item..."</option>
                            {list.into_iter().map(|item| {
                                let label = format!(
                                    "{} ({}, {})",
                                    item.name,
                                    or_placeholder(item.category.as_deref(), "uncategorized"),
                                    or_placeholder(item.unit.as_deref(), "unit")
                                );
                                view! { <option value=item.id.to_string()>{label}</option> }
                            }).collect_view()}
                        </select>
                    }.into_any(),
                }}

                <label class="field-label">"Quantity"</label>
                <input
                    class="field-input"
                    type="number"
                    min="0"
                    step="any"
                    prop:value=move || quantity.get()
                    on:input=move |ev| set_quantity.set(event_target_value(&ev))
                />

                {move || error.get().map(|e| view! { <div class="alert error">{e}</div> })}

                <div class="dialog-actions">
                    <button type="button" disabled=move || saving.get() on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Adding..." } else { "Add" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
