//! Task Board
//!
//! Tasks grouped into one column per status. Clicking a card opens the
//! detail dialog; confirmed edits and deletes are applied to the loaded list.

use leptos::prelude::*;

use crate::api;
use crate::board::{group_by_status, remove_task, replace_task};
use crate::components::{Header, TaskDetailDialog};
use crate::context::use_app_context;
use crate::fetch::{use_fetch, FetchState};
use crate::format::{display_date, initial, or_placeholder, status_chip};
use crate::markdown::parse_markdown_inline;
use crate::models::{RecordId, Task};

#[component]
fn TaskCard(task: Task, on_open: Callback<Task>) -> impl IntoView {
    let assignee = task.employee_assigned.as_ref().and_then(|e| e.name.clone());
    let title = parse_markdown_inline(&task.title);
    let deadline = display_date(task.dead_line.as_deref());
    let priority = or_placeholder(task.priority.as_deref(), "Not Set");
    let task = StoredValue::new(task);

    view! {
        <div class="task-card" on:click=move |_| on_open.run(task.get_value())>
            <div class="task-card-title" inner_html=title></div>
            <div class="task-card-meta">
                <span class="avatar small" title=assignee.clone().unwrap_or_default()>
                    {initial(assignee.as_deref())}
                </span>
                <span class="task-card-deadline">"📅 " {deadline}</span>
                <span class="task-card-priority">{priority}</span>
            </div>
        </div>
    }
}

#[component]
pub fn TaskBoard() -> impl IntoView {
    let ctx = use_app_context();
    let tasks = use_fetch(
        || Some(()),
        move |()| {
            let api = ctx.api();
            async move { api::list_tasks(&api).await }
        },
    );
    let selected = RwSignal::new(None::<Task>);

    let on_open = Callback::new(move |task: Task| {
        log::debug!("[BOARD] open task {}", task.id);
        selected.set(Some(task));
    });
    let on_task_updated = Callback::new(move |task: Task| {
        tasks.update_loaded(|list| replace_task(list, task.clone()));
        selected.set(Some(task));
    });
    let on_task_deleted = Callback::new(move |id: RecordId| {
        tasks.update_loaded(|list| remove_task(list, &id));
        selected.set(None);
    });

    view! {
        <div class="page">
            <Header title="Tasks" subtitle="Work across all projects, by status." />
            {move || match tasks.state() {
                FetchState::Loading => view! {
                    <div class="centered">
                        <div class="spinner"></div>
                        <p>"Loading Tasks..."</p>
                    </div>
                }.into_any(),
                FetchState::Failed(message) => view! {
                    <div class="alert error">
                        "Error loading data: " {message}
                        <button class="text-btn" on:click=move |_| tasks.refetch()>"Retry"</button>
                    </div>
                }.into_any(),
                FetchState::Loaded(list) => view! {
                    <div class="board">
                        {group_by_status(&list)
                            .into_iter()
                            .map(|(status, column)| {
                                let (label, class) = status_chip(&status);
                                let count = column.len();
                                view! {
                                    <div class="board-column">
                                        <div class="board-column-header">
                                            <span class=class>{label}</span>
                                            <span class="count">{count}</span>
                                        </div>
                                        {column
                                            .into_iter()
                                            .map(|task| view! { <TaskCard task=task on_open=on_open /> })
                                            .collect_view()}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }.into_any(),
            }}
            <TaskDetailDialog
                task=Signal::derive(move || selected.get())
                open=Signal::derive(move || selected.with(Option::is_some))
                on_close=Callback::new(move |()| selected.set(None))
                on_task_updated=on_task_updated
                on_task_deleted=on_task_deleted
            />
        </div>
    }
}
