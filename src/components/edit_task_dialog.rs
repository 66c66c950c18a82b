//! Edit Task Dialog
//!
//! Nested editor for a task. Sends only the changed fields and hands the
//! response's data object back to the caller to merge.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::api;
use crate::context::use_app_context;
use crate::format::status_chip;
use crate::lifecycle::use_mount_guard;
use crate::models::{Task, TaskStatus};
use crate::task_form::TaskDraft;

/// Single text field bound to one draft string
#[component]
fn DraftField(
    draft: RwSignal<TaskDraft>,
    #[prop(into)] label: String,
    field: fn(&mut TaskDraft) -> &mut String,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || field(&mut draft.get()).clone();
    let on_input = move |ev: web_sys::Event| {
        let v = event_target_value(&ev);
        draft.update(|d| *field(d) = v);
    };

    view! {
        <label class="field-label">{label}</label>
        {if multiline {
            view! { <textarea class="field-input" rows="4" prop:value=value on:input=on_input></textarea> }.into_any()
        } else {
            view! {
                <input class="field-input" type=input_type.unwrap_or("text") prop:value=value on:input=on_input />
            }.into_any()
        }}
    }
}

#[component]
pub fn EditTaskDialog(
    task: Task,
    #[prop(into)] on_close: Callback<()>,
    /// Receives the `data` object of the update response
    #[prop(into)] on_task_updated: Callback<Value>,
) -> impl IntoView {
    let ctx = use_app_context();
    let guard = use_mount_guard();
    let draft = RwSignal::new(TaskDraft::from_task(&task));
    let unknown_status = match &task.status {
        TaskStatus::Unknown(raw) => Some(raw.clone()),
        _ => None,
    };
    let original = StoredValue::new(task);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        if let Err(e) = current.validate() {
            set_error.set(Some(e));
            return;
        }
        let (id, update) = original.with_value(|t| (t.id.clone(), current.diff(t)));
        if update.is_empty() {
            on_close.run(());
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        let api = ctx.api();
        let guard = guard.clone();
        spawn_local(async move {
            let result = api::update_task(&api, &id, &update).await;
            if !guard.is_mounted() {
                return;
            }
            set_saving.set(false);
            match result {
                Ok(data) => {
                    log::info!("[TASK] updated {}", id);
                    on_task_updated.run(data);
                }
                Err(e) => {
                    log::warn!("[TASK] update {} failed: {}", id, e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| if !saving.get_untracked() { on_close.run(()) }>
            <form class="dialog medium" on:click=|ev| ev.stop_propagation() on:submit=submit>
                <h3 class="dialog-title">"Edit Task"</h3>

                <DraftField draft=draft label="Title" field=|d| &mut d.title />
                <DraftField draft=draft label="Description" field=|d| &mut d.description multiline=true />
                <DraftField draft=draft label="Notes" field=|d| &mut d.note multiline=true />

                <label class="field-label">"Status"</label>
                <select
                    class="field-input"
                    prop:value=move || draft.with(|d| d.status.as_str().to_string())
                    on:change=move |ev| {
                        let v = event_target_value(&ev);
                        draft.update(|d| d.status = TaskStatus::from_wire(&v));
                    }
                >
                    {TaskStatus::ALL.into_iter().map(|s| view! {
                        <option value=s.as_str().to_string()>{status_chip(&s).0}</option>
                    }).collect_view()}
                    // keeps a status this client does not know selectable, so it round-trips
                    {unknown_status.map(|raw| view! { <option value=raw.clone()>{raw.clone()}</option> })}
                </select>

                <div class="field-row">
                    <div>
                        <DraftField draft=draft label="Priority" field=|d| &mut d.priority />
                    </div>
                    <div>
                        <DraftField draft=draft label="Task Type" field=|d| &mut d.type_of_task />
                    </div>
                </div>
                <div class="field-row">
                    <div>
                        <DraftField draft=draft label="Start Date" field=|d| &mut d.start_date input_type="date" />
                    </div>
                    <div>
                        <DraftField draft=draft label="Deadline" field=|d| &mut d.dead_line input_type="date" />
                    </div>
                </div>

                {move || error.get().map(|e| view! { <div class="alert error">{e}</div> })}

                <div class="dialog-actions">
                    <button type="button" disabled=move || saving.get() on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
