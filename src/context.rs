//! Application Context
//!
//! Shared, read-only handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config: StoredValue::new(config) }
    }

    /// Client for backend calls, built from the startup config
    pub fn api(&self) -> ApiClient {
        self.config.with_value(ApiClient::new)
    }

    /// Auto-dismiss delay for notifications
    pub fn notification_ms(&self) -> u32 {
        self.config.with_value(|c| c.notification_ms)
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
