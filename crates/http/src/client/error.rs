//! Client error types

use crate::types::error_detail;
use reqwest::{Method, StatusCode};
use serde_json::{Value, json};
use taskdesk_core::CoreError;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("API {} error {}: {}", .method, .status.as_u16(), error_payload(.status, .body))]
    Api {
        method: Method,
        status: StatusCode,
        /// Parsed error body, `None` when the body was not JSON
        body: Option<Value>,
    },

    /// The server answered without the body the call needs
    #[error("Response had no body")]
    EmptyResponse,

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Token storage could not be read or written
    #[error("Token storage error: {0}")]
    TokenStore(#[from] CoreError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Error body as embedded in the message, falling back to the status text
fn error_payload(status: &StatusCode, body: &Option<Value>) -> String {
    match body {
        Some(body) => body.to_string(),
        None => json!({ "detail": status_text(status) }).to_string(),
    }
}

/// Reason phrase for the status, or the bare code when it has none
fn status_text(status: &StatusCode) -> String {
    status
        .canonical_reason()
        .map_or_else(|| status.as_u16().to_string(), str::to_string)
}

impl ClientError {
    /// HTTP status of an API error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Parsed error body of an API error
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Api { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// The server's `detail` message, when one was sent
    pub fn detail(&self) -> Option<String> {
        self.body().and_then(error_detail)
    }

    /// Whether the server rejected the bearer token
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_embeds_json_body() {
        let err = ClientError::Api {
            method: Method::PATCH,
            status: StatusCode::FORBIDDEN,
            body: Some(json!({"detail": "Not authorized"})),
        };
        assert_eq!(
            err.to_string(),
            r#"API PATCH error 403: {"detail":"Not authorized"}"#
        );
        assert_eq!(err.detail().as_deref(), Some("Not authorized"));
    }

    #[test]
    fn test_message_falls_back_to_status_text() {
        let err = ClientError::Api {
            method: Method::GET,
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: None,
        };
        assert_eq!(
            err.to_string(),
            r#"API GET error 500: {"detail":"Internal Server Error"}"#
        );
        assert_eq!(err.detail(), None);
    }

    #[test]
    fn test_message_for_status_without_reason() {
        let err = ClientError::Api {
            method: Method::GET,
            status: StatusCode::from_u16(599).unwrap(),
            body: None,
        };
        assert_eq!(err.to_string(), r#"API GET error 599: {"detail":"599"}"#);
    }

    #[test]
    fn test_is_unauthorized() {
        let err = ClientError::Api {
            method: Method::GET,
            status: StatusCode::UNAUTHORIZED,
            body: None,
        };
        assert!(err.is_unauthorized());
        assert!(!ClientError::EmptyResponse.is_unauthorized());
    }
}
