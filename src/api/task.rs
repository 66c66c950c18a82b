//! Task Endpoints

use serde_json::Value;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{RecordId, Task, TaskUpdate};

pub async fn list_tasks(api: &ApiClient) -> Result<Vec<Task>, ApiError> {
    api.get(&["tasks"]).await
}

/// Send changed fields; returns the response's `data`, which may be partial
pub async fn update_task(api: &ApiClient, id: &RecordId, update: &TaskUpdate) -> Result<Value, ApiError> {
    api.patch(&["tasks", &id.to_string()], update).await
}

pub async fn delete_task(api: &ApiClient, id: &RecordId) -> Result<(), ApiError> {
    api.delete(&["tasks", &id.to_string()]).await
}
