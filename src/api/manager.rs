//! Project Manager Endpoints

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{ProjectManager, RecordId};

pub async fn list_project_managers(api: &ApiClient) -> Result<Vec<ProjectManager>, ApiError> {
    api.get(&["project-managers"]).await
}

pub async fn delete_project_manager(api: &ApiClient, id: &RecordId) -> Result<(), ApiError> {
    api.delete(&["project-managers", &id.to_string()]).await
}
