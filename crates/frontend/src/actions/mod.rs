//! Confirm-then-request actions
//!
//! Every action walks the same path:
//! `Idle -> Confirming -> Cancelled | Requesting -> Succeeded | Failed`.
//! Success reloads the page; failure alerts the server's message and leaves
//! the page as it was. Nothing guards against overlapping invocations.

mod employee;
mod manager;

pub use employee::EmployeeActions;
pub use manager::ManagerActions;

use crate::ui::{Confirmer, Navigator, Notifier};
use serde_json::json;
use std::future::Future;
use taskdesk_http::types::error_detail;
use taskdesk_http::{ApiClient, ClientError};
use tracing::{debug, info, warn};

/// Detail used when an error response carries no JSON
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Terminal state of an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The user declined; nothing was sent
    Cancelled,
    /// The request succeeded and the page was reloaded
    Succeeded,
    /// The request failed; the message was alerted
    Failed(String),
}

impl ActionOutcome {
    /// Whether the request went through
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// Client and capabilities shared by the action handlers
pub struct ActionContext {
    client: ApiClient,
    confirmer: Box<dyn Confirmer>,
    notifier: Box<dyn Notifier>,
    navigator: Box<dyn Navigator>,
}

impl ActionContext {
    /// Bundle the client with the host capabilities
    pub fn new(
        client: ApiClient,
        confirmer: Box<dyn Confirmer>,
        notifier: Box<dyn Notifier>,
        navigator: Box<dyn Navigator>,
    ) -> Self {
        Self {
            client,
            confirmer,
            notifier,
            navigator,
        }
    }

    /// Client the actions send through
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Ask for confirmation, then run `send` and react to its result
    async fn confirm_then<F, Fut>(&self, prompt: &str, send: F) -> ActionOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), ClientError>>,
    {
        if !self.confirmer.confirm(prompt) {
            debug!(prompt, "action cancelled");
            return ActionOutcome::Cancelled;
        }

        match send().await {
            Ok(()) => {
                info!(prompt, "action succeeded");
                self.navigator.reload();
                ActionOutcome::Succeeded
            }
            Err(e) => {
                warn!(error = %e, "action failed");
                let message = failure_message(&e);
                self.notifier.alert(&message);
                ActionOutcome::Failed(message)
            }
        }
    }
}

/// Message alerted for a failed action
///
/// A JSON error body yields its `detail`, or the whole body when there is
/// none. A body that is not JSON reads as `{"detail": "Unknown error"}`.
fn failure_message(err: &ClientError) -> String {
    match err {
        ClientError::Api { body, .. } => {
            let body = body
                .clone()
                .unwrap_or_else(|| json!({ "detail": UNKNOWN_ERROR }));
            error_detail(&body).unwrap_or_else(|| body.to_string())
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use taskdesk_http::{Method, StatusCode};

    fn api_error(body: Option<Value>) -> ClientError {
        ClientError::Api {
            method: Method::PATCH,
            status: StatusCode::BAD_REQUEST,
            body,
        }
    }

    #[test]
    fn test_failure_message_prefers_detail() {
        let err = api_error(Some(json!({"detail": "Cannot deactivate self"})));
        assert_eq!(failure_message(&err), "Cannot deactivate self");
    }

    #[test]
    fn test_failure_message_without_detail_serializes_body() {
        let err = api_error(Some(json!({"message": "nope"})));
        assert_eq!(failure_message(&err), r#"{"message":"nope"}"#);
    }

    #[test]
    fn test_failure_message_for_non_json_body() {
        assert_eq!(failure_message(&api_error(None)), UNKNOWN_ERROR);
    }

    #[test]
    fn test_failure_message_for_other_errors() {
        assert_eq!(
            failure_message(&ClientError::EmptyResponse),
            "Response had no body"
        );
    }
}
