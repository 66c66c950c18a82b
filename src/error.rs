//! Error Types
//!
//! Failures from the REST backend and from startup configuration.

use thiserror::Error;

/// Errors from a backend request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response; `message` is the server's text when it sent one
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    /// Response decoded but is not shaped as expected (e.g. a patch that is not an object)
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
    /// The record shown locally was replaced while the request was running
    #[error("record changed while the request was running")]
    Superseded,
}

impl ApiError {
    /// Build a status error from the body the server returned
    pub fn from_status(status: u16, status_text: &str, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .or_else(|| v.get("error"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                if status_text.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    format!("HTTP {} {}", status, status_text)
                }
            });
        ApiError::Status { status, message }
    }
}

/// Errors while reading startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid dashboard config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_uses_server_message() {
        let err = ApiError::from_status(409, "Conflict", r#"{"message":"Manager has open projects"}"#);
        assert_eq!(err.to_string(), "Manager has open projects");
    }

    #[test]
    fn test_status_falls_back_to_status_text() {
        let err = ApiError::from_status(500, "Internal Server Error", "<html>oops</html>");
        assert_eq!(err.to_string(), "HTTP 500 Internal Server Error");

        let err = ApiError::from_status(502, "", r#"{"message":"  "}"#);
        assert_eq!(err.to_string(), "HTTP 502");
    }
}
