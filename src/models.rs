//! Frontend Models
//!
//! Data structures matching backend entities.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Opaque record identifier. The backend sends numbers for most tables but
/// strings are accepted too, and the original form is kept on re-serialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Num(u64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Num(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for RecordId {
    fn from(n: u64) -> Self {
        RecordId::Num(n)
    }
}

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Workflow state of a task
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    ToDo,
    Doing,
    PenApproval,
    Done,
    /// A value this client does not know about, kept verbatim so it is
    /// written back exactly as the server sent it
    Unknown(String),
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::ToDo,
        TaskStatus::Doing,
        TaskStatus::PenApproval,
        TaskStatus::Done,
    ];

    /// Wire value, as the backend spells it
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::ToDo => "ToDo",
            TaskStatus::Doing => "Doing",
            TaskStatus::PenApproval => "penApproval",
            TaskStatus::Done => "Done",
            TaskStatus::Unknown(raw) => raw,
        }
    }

    pub fn from_wire(value: &str) -> Self {
        match value {
            "ToDo" => TaskStatus::ToDo,
            "Doing" => TaskStatus::Doing,
            "penApproval" => TaskStatus::PenApproval,
            "Done" => TaskStatus::Done,
            other => TaskStatus::Unknown(other.to_string()),
        }
    }
}

impl Serialize for TaskStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TaskStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(TaskStatus::from_wire(&raw))
    }
}

/// Employee reference embedded in a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRef {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: TaskStatus,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub dead_line: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub supervisor_id: Option<RecordId>,
    #[serde(default)]
    pub type_of_task: Option<String>,
    #[serde(rename = "employeeAssigned", default)]
    pub employee_assigned: Option<EmployeeRef>,
    #[serde(default)]
    pub stage_id: Option<RecordId>,
    /// Server fields this client does not model; carried through merges untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial task update sent as the PATCH body. Only changed fields are set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_of_task: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dead_line: Option<String>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        *self == TaskUpdate::default()
    }
}

/// Inventory item definition (catalog entry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Consumable resource linked to a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResource {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: f64,
    pub item: InventoryItem,
}

/// Body for creating a task resource
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTaskResource {
    pub task_id: RecordId,
    pub item_id: RecordId,
    pub quantity: f64,
}

/// Project manager record (personnel collection)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectManager {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default)]
    pub specialization_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_accepts_sparse_payload() {
        let task: Task = serde_json::from_value(json!({
            "id": 7,
            "title": null,
            "status": "penApproval",
            "employeeAssigned": { "name": "Rana" },
            "budget": 1200
        }))
        .unwrap();

        assert_eq!(task.id, RecordId::Num(7));
        assert_eq!(task.title, "");
        assert_eq!(task.status, TaskStatus::PenApproval);
        assert_eq!(task.employee_assigned.unwrap().name.as_deref(), Some("Rana"));
        assert_eq!(task.extra.get("budget"), Some(&json!(1200)));
    }

    #[test]
    fn test_unknown_status() {
        let task: Task = serde_json::from_value(json!({ "id": "t-1", "status": "Archived" })).unwrap();
        assert_eq!(task.id, RecordId::Text("t-1".to_string()));
        assert_eq!(task.status, TaskStatus::Unknown("Archived".to_string()));
    }

    #[test]
    fn test_unknown_status_written_back_verbatim() {
        let task: Task = serde_json::from_value(json!({ "id": 4, "status": "Archived" })).unwrap();
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["status"], json!("Archived"));

        let known: Task = serde_json::from_value(json!({ "id": 5, "status": "penApproval" })).unwrap();
        assert_eq!(serde_json::to_value(&known).unwrap()["status"], json!("penApproval"));
    }

    #[test]
    fn test_update_skips_unchanged_fields() {
        let update = TaskUpdate {
            title: Some("X".to_string()),
            status: Some(TaskStatus::Done),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "title": "X", "status": "Done" })
        );
        assert!(TaskUpdate::default().is_empty());
    }

    #[test]
    fn test_resource_null_quantity() {
        let res: TaskResource = serde_json::from_value(json!({
            "id": 3,
            "quantity": null,
            "item": { "id": 9, "name": "Cement", "category": "Materials", "unit": "bag" }
        }))
        .unwrap();
        assert_eq!(res.quantity, 0.0);
        assert_eq!(res.item.unit.as_deref(), Some("bag"));
    }
}
