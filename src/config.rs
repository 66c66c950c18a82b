//! Dashboard Configuration
//!
//! Read once at startup from `window.__DASHBOARD_CONFIG__` (set by the page
//! that hosts the bundle). Missing keys fall back to defaults.

use std::str::FromStr;

use log::LevelFilter;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::ConfigError;

/// Global the host page may define
const CONFIG_GLOBAL: &str = "__DASHBOARD_CONFIG__";
/// localStorage key written by the login page
const TOKEN_STORAGE_KEY: &str = "authToken";

/// Characters escaped inside a single URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the REST API, e.g. `https://host/api/`
    pub api_base_url: String,
    /// Bearer token; falls back to localStorage when absent
    pub auth_token: Option<String>,
    /// Capabilities granted to the signed-in user
    pub permissions: Vec<String>,
    /// How long a notification stays on screen
    pub notification_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api/".to_string(),
            auth_token: None,
            permissions: Vec::new(),
            notification_ms: 6000,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse from a JSON string, as some host templates inline the config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Convert the page global into a config. Accepts an object or a JSON string.
    pub fn from_js(value: JsValue) -> Result<Self, ConfigError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        if let Some(json) = value.as_string() {
            return Self::from_json(&json);
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Load from the page global, then fill the token from localStorage
    pub fn load() -> Result<Self, ConfigError> {
        let Some(window) = web_sys::window() else {
            return Ok(Self::default());
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|e| ConfigError::Invalid(format!("{:?}", e)))?;
        let mut config = Self::from_js(raw)?;

        if config.auth_token.is_none() {
            config.auth_token = window
                .local_storage()
                .ok()
                .flatten()
                .and_then(|storage| storage.get_item(TOKEN_STORAGE_KEY).ok().flatten())
                .filter(|t| !t.is_empty());
        }
        Ok(config)
    }

    /// Log level, `Info` when the configured string is not a level name
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    /// Join path segments onto the base URL, escaping each segment
    pub fn endpoint(&self, segments: &[&str]) -> String {
        let mut url = self.api_base_url.trim_end_matches('/').to_string();
        for segment in segments {
            url.push('/');
            url.extend(utf8_percent_encode(segment, PATH_SEGMENT));
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config = AppConfig::from_json(r#"{"permissions":["edit project managers"]}"#).unwrap();
        assert_eq!(config.api_base_url, "/api/");
        assert_eq!(config.notification_ms, 6000);
        assert_eq!(config.permissions, vec!["edit project managers".to_string()]);
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_bad_config_is_an_error() {
        assert!(AppConfig::from_json(r#"{"notification_ms":"soon"}"#).is_err());
    }

    #[test]
    fn test_level_filter_parses_names() {
        let config = AppConfig { log_level: "debug".to_string(), ..Default::default() };
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        let config = AppConfig { log_level: "loud".to_string(), ..Default::default() };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_endpoint_escapes_segments() {
        let config = AppConfig {
            api_base_url: "https://erp.example.com/api/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.endpoint(&["tasks", "42"]), "https://erp.example.com/api/tasks/42");
        assert_eq!(
            config.endpoint(&["tasks", "a/b c", "resources"]),
            "https://erp.example.com/api/tasks/a%2Fb%20c/resources"
        );
    }
}
