//! Inventory Item Endpoints

use super::ApiClient;
use crate::error::ApiError;
use crate::models::InventoryItem;

pub async fn list_items(api: &ApiClient) -> Result<Vec<InventoryItem>, ApiError> {
    api.get(&["items"]).await
}
