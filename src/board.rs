//! Task Board Utilities
//!
//! Helper functions for the status-column board and for applying detail
//! dialog outcomes to the board's listing.

use std::cmp::Ordering;

use crate::format::parse_date;
use crate::models::{RecordId, Task, TaskStatus};

/// Group tasks into one column per status, in workflow order.
/// Unknown statuses land in the "To Do" column. Within a column, tasks are
/// ordered by deadline (undated last), then title.
pub fn group_by_status(tasks: &[Task]) -> Vec<(TaskStatus, Vec<Task>)> {
    let mut columns: Vec<(TaskStatus, Vec<Task>)> =
        TaskStatus::ALL.iter().map(|s| (s.clone(), Vec::new())).collect();

    for task in tasks {
        let status = match &task.status {
            TaskStatus::Unknown(_) => &TaskStatus::ToDo,
            other => other,
        };
        if let Some((_, column)) = columns.iter_mut().find(|(s, _)| s == status) {
            column.push(task.clone());
        }
    }

    for (_, column) in columns.iter_mut() {
        column.sort_by(compare_deadline);
    }
    columns
}

fn compare_deadline(a: &Task, b: &Task) -> Ordering {
    let da = a.dead_line.as_deref().and_then(parse_date);
    let db = b.dead_line.as_deref().and_then(parse_date);
    match (da, db) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.title.cmp(&b.title))
}

/// Swap in the updated copy of a task, matched by id
pub fn replace_task(tasks: &mut [Task], updated: Task) {
    if let Some(slot) = tasks.iter_mut().find(|t| t.id == updated.id) {
        *slot = updated;
    }
}

/// Remove a task by id
pub fn remove_task(tasks: &mut Vec<Task>, id: &RecordId) {
    tasks.retain(|t| &t.id != id);
}
