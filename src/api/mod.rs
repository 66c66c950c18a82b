//! REST API Bindings
//!
//! Frontend bindings to the backend REST endpoints, organized by domain.
//! Responses arrive as `{ "data": ... }`; errors carry `{ "message": ... }`.

mod task;
mod resource;
mod item;
mod manager;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::RecordId;

// Re-export all public items
pub use task::*;
pub use resource::*;
pub use item::*;
pub use manager::*;

/// Connection settings for backend calls
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self { config: config.clone() }
    }

    fn url(&self, segments: &[&str]) -> String {
        self.config.endpoint(segments)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.config.auth_token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// GET and unwrap the envelope
    pub(crate) async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let url = self.url(segments);
        log::debug!("[API] GET {}", url);
        let request = self
            .authorize(Request::get(&url))
            .build()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let body = read_json(send(request).await?).await?;
        serde_json::from_value(unwrap_envelope(body)).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// POST a JSON body, returning the envelope's data (or `null` for an empty body)
    pub(crate) async fn post<B: Serialize>(&self, segments: &[&str], body: &B) -> Result<Value, ApiError> {
        let url = self.url(segments);
        log::debug!("[API] POST {}", url);
        let request = self
            .authorize(Request::post(&url))
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(unwrap_envelope(read_json(send(request).await?).await?))
    }

    /// PATCH a JSON body, returning the envelope's data
    pub(crate) async fn patch<B: Serialize>(&self, segments: &[&str], body: &B) -> Result<Value, ApiError> {
        let url = self.url(segments);
        log::debug!("[API] PATCH {}", url);
        let request = self
            .authorize(Request::patch(&url))
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(unwrap_envelope(read_json(send(request).await?).await?))
    }

    /// DELETE without a body; any 2xx is success
    pub(crate) async fn delete(&self, segments: &[&str]) -> Result<(), ApiError> {
        let url = self.url(segments);
        log::debug!("[API] DELETE {}", url);
        let request = self
            .authorize(Request::delete(&url))
            .build()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        send(request).await?;
        Ok(())
    }
}

/// Something a delete-confirmation control can remove
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteTarget {
    Task(RecordId),
    TaskResource(RecordId),
    ProjectManager(RecordId),
}

impl DeleteTarget {
    pub async fn delete(&self, api: &ApiClient) -> Result<(), ApiError> {
        match self {
            DeleteTarget::Task(id) => delete_task(api, id).await,
            DeleteTarget::TaskResource(id) => delete_task_resource(api, id).await,
            DeleteTarget::ProjectManager(id) => delete_project_manager(api, id).await,
        }
    }
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if response.ok() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_status(response.status(), &response.status_text(), &body);
    log::warn!("[API] {} -> {}", response.url(), err);
    Err(err)
}

async fn read_json(response: Response) -> Result<Value, ApiError> {
    let text = response.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    parse_body(&text)
}

/// Empty bodies (204, bare 200) read as `null`
fn parse_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `{ "data": x }` -> `x`; anything else is returned as-is
fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key("data") => map.remove("data").unwrap_or(Value::Null),
        other => other,
    }
}
