//! Project Managers Page
//!
//! Paged table of project managers. Row actions are shown according to the
//! user's permissions; the list is reloaded from the server after a delete.

use leptos::prelude::*;

use crate::api::{self, DeleteTarget};
use crate::components::{DeleteConfirmButton, Header, Snackbar};
use crate::context::use_app_context;
use crate::fetch::{use_fetch, FetchState};
use crate::format::or_placeholder;
use crate::models::ProjectManager;
use crate::notify::{Notifier, Severity};
use crate::paging::{Pagination, PAGE_SIZES};
use crate::permissions::{ManagerActions, CREATE_PROJECT_MANAGERS};
use crate::store::{has_permission, use_app_store, AppStateStoreFields};

const ADD_MANAGER_PATH: &str = "/projectManagers/add";

fn edit_manager_path(manager: &ProjectManager) -> String {
    format!("/projectManagers/edit/{}", manager.id)
}

/// Status cell label and style; anything but "active" is shown as inactive
fn status_badge(status: Option<&str>) -> (String, &'static str) {
    let label = or_placeholder(status, "Undefined");
    let class = if status.is_some_and(|s| s.trim().eq_ignore_ascii_case("active")) {
        "status-btn active"
    } else {
        "status-btn inactive"
    };
    (label, class)
}

fn status_message(label: &str) -> String {
    format!("Manager Status: {}", label)
}

#[component]
pub fn ProjectManagersPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let notifier = Notifier::new(ctx.notification_ms());
    let managers = use_fetch(
        || Some(()),
        move |()| {
            let api = ctx.api();
            async move { api::list_project_managers(&api).await }
        },
    );
    let paging = RwSignal::new(Pagination::default());

    let can_create = move || has_permission(&store, CREATE_PROJECT_MANAGERS);
    let actions = Memo::new(move |_| store.permissions().with(ManagerActions::for_permissions));

    let on_deleted = Callback::new(move |()| {
        notifier.notify("Manager deleted successfully!", Severity::Success);
        managers.refetch();
    });
    let on_delete_error = Callback::new(move |message: String| {
        notifier.notify(format!("Failed to delete Manager: {}", message), Severity::Error);
    });
    let on_status = Callback::new(move |label: String| {
        notifier.notify(status_message(&label), Severity::Info);
    });

    let toolbar = move || {
        can_create().then(|| view! {
            <div class="toolbar">
                <a class="button primary" href=ADD_MANAGER_PATH>"＋ Add Manager"</a>
            </div>
        })
    };

    view! {
        <div class="page">
            <Header title="Project Managers" subtitle="Managing the Managers in the Company." />
            {toolbar}
            {move || match managers.state() {
                FetchState::Loading => view! {
                    <div class="centered">
                        <div class="spinner"></div>
                        <p>"Loading Project Managers..."</p>
                    </div>
                }.into_any(),
                FetchState::Failed(message) => view! {
                    <div class="alert error">
                        "Error loading data: " {message}
                        <button class="text-btn" on:click=move |_| managers.refetch()>"Retry"</button>
                    </div>
                }.into_any(),
                FetchState::Loaded(list) => {
                    let total = list.len();
                    let range = paging.with(|p| p.range(total));
                    let rows = list[range]
                        .iter()
                        .cloned()
                        .map(|m| manager_row(m, actions.get(), on_status, on_deleted, on_delete_error))
                        .collect_view();
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"First Name"</th>
                                    <th>"Last Name"</th>
                                    <th>"Specialization"</th>
                                    <th>"Email"</th>
                                    <th>"Phone Number"</th>
                                    <th>"Status"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                        <PaginationControls paging=paging total=total />
                    }.into_any()
                }
            }}
            <Snackbar notifier=notifier />
        </div>
    }
}

fn manager_row(
    manager: ProjectManager,
    actions: ManagerActions,
    on_status: Callback<String>,
    on_deleted: Callback<()>,
    on_delete_error: Callback<String>,
) -> impl IntoView {
    let (status_label, status_class) = status_badge(manager.status.as_deref());
    let edit_href = edit_manager_path(&manager);
    let status_for_click = status_label.clone();

    view! {
        <tr>
            <td>{manager.id.to_string()}</td>
            <td>{manager.first_name.clone()}</td>
            <td>{manager.last_name.clone()}</td>
            <td>{or_placeholder(manager.specialization_name.as_deref(), "N/A")}</td>
            <td>{or_placeholder(manager.email.as_deref(), "N/A")}</td>
            <td>{or_placeholder(manager.phone_number.as_deref(), "N/A")}</td>
            <td>
                <button
                    class=status_class
                    on:click=move |_| on_status.run(status_for_click.clone())
                >
                    {status_label}
                </button>
            </td>
            <td class="row-actions">
                {actions.edit.then(|| view! {
                    <a class="icon-btn edit-btn" title="Edit" href=edit_href>"✎"</a>
                })}
                {actions.delete.then(|| view! {
                    <DeleteConfirmButton
                        target=DeleteTarget::ProjectManager(manager.id.clone())
                        confirmation_text="Are you sure you want to delete this Manager?"
                        on_success=on_deleted
                        on_error=on_delete_error
                    />
                })}
            </td>
        </tr>
    }
}

#[component]
fn PaginationControls(paging: RwSignal<Pagination>, total: usize) -> impl IntoView {
    let summary = move || {
        let range = paging.with(|p| p.range(total));
        if total == 0 {
            "0 of 0".to_string()
        } else {
            format!("{}–{} of {}", range.start + 1, range.end, total)
        }
    };
    let at_start = move || paging.with(|p| p.page(total) == 0);
    let at_end = move || paging.with(|p| p.page(total) + 1 >= p.page_count(total));

    view! {
        <div class="pagination">
            <label>
                "Rows per page: "
                <select on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        paging.update(|p| p.set_page_size(size));
                    }
                }>
                    {PAGE_SIZES.into_iter().map(|size| view! {
                        <option
                            value=size.to_string()
                            selected=move || paging.with(|p| p.page_size() == size)
                        >
                            {size}
                        </option>
                    }).collect_view()}
                </select>
            </label>
            <span class="pagination-summary">{summary}</span>
            <button disabled=at_start on:click=move |_| paging.update(|p| p.prev(total))>"‹"</button>
            <button disabled=at_end on:click=move |_| paging.update(|p| p.next(total))>"›"</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordId;

    fn manager(id: u64, status: Option<&str>) -> ProjectManager {
        ProjectManager {
            id: RecordId::from(id),
            first_name: "Dana".to_string(),
            last_name: "Levi".to_string(),
            specialization_name: None,
            email: None,
            phone_number: None,
            status: status.map(str::to_string),
        }
    }

    #[test]
    fn test_status_badge() {
        assert_eq!(status_badge(Some("Active")), ("Active".to_string(), "status-btn active"));
        assert_eq!(status_badge(Some("on leave")), ("on leave".to_string(), "status-btn inactive"));
        assert_eq!(status_badge(None), ("Undefined".to_string(), "status-btn inactive"));
        assert_eq!(status_badge(Some("")).0, "Undefined");
    }

    #[test]
    fn test_status_message_names_the_manager_status() {
        assert_eq!(status_message("Active"), "Manager Status: Active");
    }

    #[test]
    fn test_edit_path_uses_id() {
        assert_eq!(edit_manager_path(&manager(12, None)), "/projectManagers/edit/12");
    }
}
