//! Task Form Helpers
//!
//! Draft state for the edit dialog and input validation for the add-resource
//! dialog. The draft only ever produces a partial update of the fields the
//! user actually changed.

use crate::format::date_input_value;
use crate::models::{Task, TaskStatus, TaskUpdate};

/// Editable copy of a task's fields, as typed into the form
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub note: String,
    pub status: TaskStatus,
    pub priority: String,
    pub type_of_task: String,
    pub start_date: String,
    pub dead_line: String,
}

impl TaskDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            note: task.note.clone().unwrap_or_default(),
            status: task.status.clone(),
            priority: task.priority.clone().unwrap_or_default(),
            type_of_task: task.type_of_task.clone().unwrap_or_default(),
            start_date: date_input_value(task.start_date.as_deref()),
            dead_line: date_input_value(task.dead_line.as_deref()),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".to_string());
        }
        // yyyy-mm-dd strings order the same way as the dates they encode
        if !self.start_date.is_empty() && !self.dead_line.is_empty() && self.dead_line < self.start_date {
            return Err("Deadline must be on or after the start date".to_string());
        }
        Ok(())
    }

    /// Fields that differ from `original`. Cleared optional fields are sent as "".
    pub fn diff(&self, original: &Task) -> TaskUpdate {
        let before = TaskDraft::from_task(original);
        let changed = |now: &str, was: &str| (now.trim() != was.trim()).then(|| now.trim().to_string());

        TaskUpdate {
            title: changed(&self.title, &before.title),
            description: changed(&self.description, &before.description),
            note: changed(&self.note, &before.note),
            status: (self.status != before.status).then(|| self.status.clone()),
            priority: changed(&self.priority, &before.priority),
            type_of_task: changed(&self.type_of_task, &before.type_of_task),
            start_date: changed(&self.start_date, &before.start_date),
            dead_line: changed(&self.dead_line, &before.dead_line),
        }
    }
}

/// Quantity typed into the add-resource form
pub fn parse_quantity(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| "Quantity must be a number".to_string())?;
    if !value.is_finite() || value <= 0.0 {
        return Err("Quantity must be greater than zero".to_string());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_task() -> Task {
        serde_json::from_value(json!({
            "id": 5,
            "title": "Pour foundation",
            "description": "Block A",
            "note": null,
            "status": "Doing",
            "start_date": "2024-04-01T00:00:00Z",
            "dead_line": "2024-04-20"
        }))
        .unwrap()
    }

    #[test]
    fn test_untouched_draft_has_empty_diff() {
        let task = sample_task();
        let draft = TaskDraft::from_task(&task);
        assert!(draft.diff(&task).is_empty());
    }

    #[test]
    fn test_unknown_status_is_not_sent_unless_changed() {
        let mut task = sample_task();
        task.status = TaskStatus::from_wire("Archived");
        let mut draft = TaskDraft::from_task(&task);
        draft.note = "checked".to_string();

        let update = draft.diff(&task);
        assert_eq!(update.status, None);
        assert_eq!(update.note.as_deref(), Some("checked"));

        draft.status = TaskStatus::Done;
        assert_eq!(draft.diff(&task).status, Some(TaskStatus::Done));
    }

    #[test]
    fn test_diff_contains_only_changes() {
        let task = sample_task();
        let mut draft = TaskDraft::from_task(&task);
        draft.title = "  Pour foundation (phase 2) ".to_string();
        draft.status = TaskStatus::PenApproval;
        draft.description = String::new();

        let update = draft.diff(&task);
        assert_eq!(update.title.as_deref(), Some("Pour foundation (phase 2)"));
        assert_eq!(update.status, Some(TaskStatus::PenApproval));
        assert_eq!(update.description.as_deref(), Some(""));
        assert_eq!(update.note, None);
        assert_eq!(update.start_date, None);
    }

    #[test]
    fn test_validate() {
        let mut draft = TaskDraft::from_task(&sample_task());
        assert!(draft.validate().is_ok());

        draft.dead_line = "2024-03-30".to_string();
        assert!(draft.validate().is_err());

        draft.dead_line.clear();
        draft.title = " ".to_string();
        assert_eq!(draft.validate(), Err("Title is required".to_string()));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(" 2.5 "), Ok(2.5));
        assert!(parse_quantity("0").is_err());
        assert!(parse_quantity("-1").is_err());
        assert!(parse_quantity("lots").is_err());
        assert!(parse_quantity("NaN").is_err());
    }
}
