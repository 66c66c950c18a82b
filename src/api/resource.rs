//! Task Resource Endpoints
//!
//! Consumables linked to a task. After any add/delete the caller refetches
//! the whole list rather than patching it locally.

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{NewTaskResource, RecordId, TaskResource};

pub async fn list_task_resources(api: &ApiClient, task_id: &RecordId) -> Result<Vec<TaskResource>, ApiError> {
    api.get(&["tasks", &task_id.to_string(), "resources"]).await
}

pub async fn add_task_resource(api: &ApiClient, resource: &NewTaskResource) -> Result<(), ApiError> {
    api.post(&["task-resources"], resource).await?;
    Ok(())
}

pub async fn delete_task_resource(api: &ApiClient, id: &RecordId) -> Result<(), ApiError> {
    api.delete(&["task-resources", &id.to_string()]).await
}
