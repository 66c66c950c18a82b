//! Resource Panel
//!
//! "Used Resources" column of the task dialog. The list is fetched on its own
//! and reloaded in full after every add or delete.

use leptos::prelude::*;

use crate::api::{self, DeleteTarget};
use crate::components::{AddResourceDialog, DeleteConfirmButton};
use crate::context::use_app_context;
use crate::fetch::{use_fetch, FetchState};
use crate::format::{display_quantity, or_placeholder};
use crate::models::{RecordId, TaskResource};
use crate::notify::{Notifier, Severity};

#[component]
pub fn ResourcePanel(
    #[prop(into)] task_id: Signal<Option<RecordId>>,
    notifier: Notifier,
) -> impl IntoView {
    let ctx = use_app_context();
    let resources = use_fetch(
        move || task_id.get(),
        move |id: RecordId| {
            let api = ctx.api();
            async move { api::list_task_resources(&api, &id).await }
        },
    );
    let (adding, set_adding) = signal(false);

    let on_deleted = Callback::new(move |()| {
        resources.refetch();
        notifier.notify("Resource removed", Severity::Success);
    });
    let on_delete_error = Callback::new(move |message: String| {
        notifier.notify(format!("Failed to remove resource: {}", message), Severity::Error);
    });
    let on_added = Callback::new(move |()| {
        resources.refetch();
        set_adding.set(false);
    });

    view! {
        <div class="panel-heading">
            <h6 class="section-title">"📦 Used Resources"</h6>
            <button class="text-btn" on:click=move |_| set_adding.set(true)>"＋ Add Resource"</button>
        </div>
        <div class="resource-box">
            {move || match resources.state() {
                FetchState::Loading => view! {
                    <div class="centered"><div class="spinner small"></div></div>
                }.into_any(),
                FetchState::Failed(_) => view! {
                    <div class="alert error">"Failed to load resources."</div>
                }.into_any(),
                FetchState::Loaded(list) if list.is_empty() => view! {
                    <div class="centered muted">"No resources assigned."</div>
                }.into_any(),
                FetchState::Loaded(list) => view! {
                    <ul class="resource-list">
                        {list.into_iter()
                            .map(|res| resource_row(res, on_deleted, on_delete_error))
                            .collect_view()}
                    </ul>
                }.into_any(),
            }}
        </div>
        {move || {
            if !adding.get() {
                return None;
            }
            task_id.get_untracked().map(|id| view! {
                <AddResourceDialog
                    task_id=id
                    on_close=Callback::new(move |()| set_adding.set(false))
                    on_resource_added=on_added
                />
            })
        }}
    }
}

fn resource_row(
    res: TaskResource,
    on_deleted: Callback<()>,
    on_delete_error: Callback<String>,
) -> impl IntoView {
    let confirmation = format!("Are you sure you want to remove \"{}\"?", res.item.name);
    view! {
        <li class="resource-item">
            <div class="resource-text">
                <span class="resource-name">{res.item.name.clone()}</span>
                <span class="resource-category">
                    "Category: " {or_placeholder(res.item.category.as_deref(), "N/A")}
                </span>
                <span class="resource-quantity">
                    "Quantity: " {display_quantity(res.quantity)}
                    " (" {or_placeholder(res.item.unit.as_deref(), "-")} ")"
                </span>
            </div>
            <DeleteConfirmButton
                target=DeleteTarget::TaskResource(res.id.clone())
                confirmation_text=confirmation
                on_success=on_deleted
                on_error=on_delete_error
            />
        </li>
    }
}
