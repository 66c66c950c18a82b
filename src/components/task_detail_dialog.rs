//! Task Detail Dialog
//!
//! Three-column view of one task: narrative, details and used resources.
//! Keeps its own mirror of the task, replaced whenever the parent passes a
//! new one and merged with update responses from the edit dialog.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::api::DeleteTarget;
use crate::components::{EditTaskDialog, ResourcePanel, Snackbar};
use crate::context::use_app_context;
use crate::delete_flow::DeleteFlow;
use crate::error::ApiError;
use crate::format::{display_date, initial, or_placeholder, status_chip};
use crate::lifecycle::use_mount_guard;
use crate::markdown::parse_markdown;
use crate::mirror::Mirror;
use crate::models::{RecordId, Task};
use crate::notify::{Notifier, Severity};

/// One labelled line in the details column
#[component]
fn MetadataItem(icon: &'static str, label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="metadata-item">
            <div class="metadata-icon">{icon}</div>
            <div>
                <div class="metadata-label">{label}</div>
                <div class="metadata-value">{children()}</div>
            </div>
        </div>
    }
}

/// Task detail dialog
///
/// Renders nothing while `task` is `None` or `open` is false.
#[component]
pub fn TaskDetailDialog(
    #[prop(into)] task: Signal<Option<Task>>,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    /// Receives the merged task after a successful edit
    #[prop(optional, into)]
    on_task_updated: Option<Callback<Task>>,
    /// Receives the id after a successful delete
    #[prop(optional, into)]
    on_task_deleted: Option<Callback<RecordId>>,
    /// Stage shown under the title; falls back to the task's own stage
    #[prop(optional, into)]
    stage_id: Option<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let guard = use_mount_guard();
    let notifier = Notifier::new(ctx.notification_ms());
    let stage_id = StoredValue::new(stage_id);

    let mirror = RwSignal::new(Mirror::new(task.get_untracked()));
    // A new record from the parent replaces the mirror wholesale
    Effect::new(move |_| {
        let incoming = task.get();
        mirror.update(|m| m.replace(incoming));
    });

    let current = move || mirror.with(|m| m.get().cloned());
    let task_id = Memo::new(move |_| mirror.with(|m| m.get().map(|t| t.id.clone())));

    let (menu_open, set_menu_open) = signal(false);
    let (editing, set_editing) = signal(false);
    // Mirror generation the open editor was started from
    let edit_generation = StoredValue::new(0u64);
    let delete_flow = RwSignal::new(DeleteFlow::default());

    let on_edit_saved = Callback::new(move |data: Value| {
        let seen = edit_generation.get_value();
        match mirror.try_update(|m| m.merge_patch(seen, &data)) {
            Some(Ok(merged)) => {
                log::info!("[TASK] merged update into {}", merged.id);
                if let Some(on_task_updated) = on_task_updated {
                    on_task_updated.run(merged);
                }
                notifier.notify("Task updated", Severity::Success);
            }
            Some(Err(ApiError::Superseded)) => {
                log::warn!("[TASK] update response arrived for a task no longer shown");
                notifier.notify("Task saved. Reopen it to see the changes.", Severity::Warning);
            }
            Some(Err(e)) => {
                log::error!("[TASK] could not merge update response: {}", e);
                mirror.update(Mirror::mark_stale);
                notifier.notify(format!("Saved, but the response could not be shown: {}", e), Severity::Error);
            }
            None => return,
        }
        set_editing.set(false);
    });

    let confirm_delete = Callback::new(move |()| {
        let mut send = false;
        delete_flow.update(|f| send = f.confirm());
        if !send {
            return;
        }
        let Some(id) = task_id.get_untracked() else {
            delete_flow.update(|f| f.finish(Err("No task selected".to_string())));
            return;
        };

        let api = ctx.api();
        let guard = guard.clone();
        spawn_local(async move {
            let result = DeleteTarget::Task(id.clone()).delete(&api).await;
            if !guard.is_mounted() {
                log::debug!("[TASK] delete of {} finished after unmount", id);
                return;
            }
            match result {
                Ok(()) => {
                    log::info!("[TASK] deleted {}", id);
                    delete_flow.update(|f| f.finish(Ok(())));
                    if let Some(on_task_deleted) = on_task_deleted {
                        on_task_deleted.run(id);
                    }
                    on_close.run(());
                }
                Err(e) => {
                    log::warn!("[TASK] delete {} failed: {}", id, e);
                    delete_flow.update(|f| f.finish(Err(e.to_string())));
                }
            }
        });
    });

    let close_delete = move || delete_flow.update(|f| {
        f.cancel();
    });
    let deleting = move || delete_flow.with(DeleteFlow::is_in_flight);

    let narrative = move || {
        current().map(|t| {
            let stage = stage_id
                .get_value()
                .or_else(|| t.stage_id.as_ref().map(ToString::to_string))
                .unwrap_or_else(|| "N/A".to_string());
            let description = parse_markdown(t.description.as_deref().unwrap_or(""));
            let note = t.note.as_deref().filter(|n| !n.trim().is_empty()).map(parse_markdown);
            view! {
                <div class="task-heading">
                    <h3 class="task-title">{t.title.clone()}</h3>
                    <div class="task-stage">"Stage ID: " {stage}</div>
                </div>
                <hr />
                <div>
                    <h6 class="section-title">"📝 Description"</h6>
                    <div class="markdown" inner_html=description></div>
                </div>
                <hr />
                <div>
                    <h6 class="section-title">"🗒 Notes"</h6>
                    {match note {
                        Some(html) => view! { <div class="markdown" inner_html=html></div> }.into_any(),
                        None => view! { <p class="muted">"No additional notes."</p> }.into_any(),
                    }}
                </div>
            }
        })
    };

    let details = move || {
        current().map(|t| {
            let assignee = t.employee_assigned.as_ref().and_then(|e| e.name.clone());
            view! {
                <h6 class="section-title">"Details"</h6>
                <MetadataItem icon="👤" label="Assigned To">
                    <span class="avatar small">{initial(assignee.as_deref())}</span>
                    {assignee.clone().unwrap_or_default()}
                </MetadataItem>
                <MetadataItem icon="🧑‍💼" label="Supervisor">
                    {t.supervisor_id.as_ref().map(ToString::to_string).unwrap_or_else(|| "N/A".to_string())}
                </MetadataItem>
                <MetadataItem icon="🏷" label="Task Type">
                    {or_placeholder(t.type_of_task.as_deref(), "N/A")}
                </MetadataItem>
                <hr />
                <MetadataItem icon="📅" label="Start Date">
                    {display_date(t.start_date.as_deref())}
                </MetadataItem>
                <MetadataItem icon="📅" label="Deadline">
                    {display_date(t.dead_line.as_deref())}
                </MetadataItem>
                <MetadataItem icon="⚑" label="Priority">
                    {or_placeholder(t.priority.as_deref(), "Not Set")}
                </MetadataItem>
            }
        })
    };

    view! {
        <Show when=move || open.get() && mirror.with(|m| m.get().is_some())>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div class="dialog large task-detail-dialog" on:click=|ev| ev.stop_propagation()>
                    <div class="dialog-header">
                        <h3 class="dialog-title">"Task Details"</h3>
                        <div class="dialog-header-actions">
                            {move || current().map(|t| {
                                let (label, class) = status_chip(&t.status);
                                view! { <span class=class>{label}</span> }
                            })}
                            <button class="icon-btn" title="More" on:click=move |_| set_menu_open.update(|o| *o = !*o)>
                                "⋮"
                            </button>
                            <Show when=move || menu_open.get()>
                                <div class="menu">
                                    <button
                                        class="menu-item"
                                        on:click=move |_| {
                                            edit_generation.set_value(mirror.with_untracked(Mirror::generation));
                                            set_editing.set(true);
                                            set_menu_open.set(false);
                                        }
                                    >
                                        "✎ Edit"
                                    </button>
                                    <button
                                        class="menu-item danger"
                                        on:click=move |_| {
                                            delete_flow.update(DeleteFlow::open);
                                            set_menu_open.set(false);
                                        }
                                    >
                                        "🗑 Delete"
                                    </button>
                                </div>
                            </Show>
                        </div>
                    </div>

                    <Show when=move || mirror.with(Mirror::is_stale)>
                        <div class="alert warning">
                            "This task may be out of date. Close and reopen it to refresh."
                        </div>
                    </Show>

                    <div class="dialog-content three-columns">
                        <section class="column narrative">{narrative}</section>
                        <section class="column details">{details}</section>
                        <section class="column resources">
                            <ResourcePanel task_id=task_id notifier=notifier />
                        </section>
                    </div>

                    <div class="dialog-actions">
                        <button class="primary" on:click=move |_| on_close.run(())>"Close"</button>
                    </div>
                </div>
            </div>

            <Show when=move || delete_flow.with(DeleteFlow::is_open)>
                <div class="dialog-backdrop" on:click=move |_| close_delete()>
                    <div class="dialog small" on:click=|ev| ev.stop_propagation()>
                        <h3 class="dialog-title">"Confirm Task Deletion"</h3>
                        <p>"Are you sure you want to delete this task? This action cannot be undone."</p>
                        {move || delete_flow.with(|f| f.error().map(str::to_string)).map(|e| view! {
                            <div class="alert error">{e}</div>
                        })}
                        <div class="dialog-actions">
                            <button disabled=deleting on:click=move |_| close_delete()>"Cancel"</button>
                            <button class="danger" disabled=deleting on:click=move |_| confirm_delete.run(())>
                                <Show when=deleting>
                                    <span class="spinner inline"></span>
                                </Show>
                                {move || if deleting() { "Deleting..." } else { "Delete" }}
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            {move || {
                if !editing.get() {
                    return None;
                }
                mirror.with_untracked(|m| m.get().cloned()).map(|t| view! {
                    <EditTaskDialog
                        task=t
                        on_close=Callback::new(move |()| set_editing.set(false))
                        on_task_updated=on_edit_saved
                    />
                })
            }}
        </Show>
        <Snackbar notifier=notifier />
    }
}
