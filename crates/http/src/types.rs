//! Request and response types for the Taskdesk API

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use std::str::FromStr;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
///
/// The token is accepted either at the top level or nested under `data`,
/// which is where the backend's documented response schema places it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

impl LoginResponse {
    /// The access token, if the server issued a non-empty one
    pub fn access_token(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .or_else(|| {
                self.data
                    .as_ref()
                    .and_then(|data| data.get("access_token"))
                    .and_then(JsonValue::as_str)
            })
            .filter(|token| !token.is_empty())
    }
}

/// Task status as understood by the backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl TaskStatus {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in progress" | "in_progress" | "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            other => Err(format!(
                "unknown task status {other:?} (expected pending, in_progress or completed)"
            )),
        }
    }
}

/// Body of a task status update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskStatusUpdate {
    pub status: TaskStatus,
}

/// Human-readable `detail` of an error body
///
/// Returns `None` when the field is missing, null, false or an empty string.
/// Non-string values (e.g. validation error lists) are rendered as JSON.
pub fn error_detail(body: &JsonValue) -> Option<String> {
    match body.get("detail")? {
        JsonValue::Null | JsonValue::Bool(false) => None,
        JsonValue::String(s) if s.is_empty() => None,
        JsonValue::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_access_token_top_level() {
        let response: LoginResponse =
            serde_json::from_value(json!({"access_token": "abc", "token_type": "bearer"}))
                .unwrap();
        assert_eq!(response.access_token(), Some("abc"));
    }

    #[test]
    fn test_access_token_nested_under_data() {
        let response: LoginResponse = serde_json::from_value(json!({
            "message": "Login successful",
            "data": {"access_token": "nested", "token_type": "bearer"}
        }))
        .unwrap();
        assert_eq!(response.access_token(), Some("nested"));
    }

    #[test]
    fn test_access_token_absent_or_empty() {
        let response: LoginResponse = serde_json::from_value(json!({
            "message": "Login successful",
            "data": {"email": "a@b.c"}
        }))
        .unwrap();
        assert_eq!(response.access_token(), None);

        let response: LoginResponse =
            serde_json::from_value(json!({"access_token": ""})).unwrap();
        assert_eq!(response.access_token(), None);
    }

    #[test]
    fn test_task_status_wire_format() {
        let body = TaskStatusUpdate {
            status: TaskStatus::InProgress,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"status": "in progress"})
        );
    }

    #[test]
    fn test_task_status_from_str() {
        assert_eq!("in_progress".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
        assert_eq!("In Progress".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
        assert_eq!("completed".parse::<TaskStatus>(), Ok(TaskStatus::Completed));
        assert!("done".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_error_detail() {
        assert_eq!(
            error_detail(&json!({"detail": "bad creds"})).as_deref(),
            Some("bad creds")
        );
        assert_eq!(error_detail(&json!({"detail": ""})), None);
        assert_eq!(error_detail(&json!({"detail": null})), None);
        assert_eq!(error_detail(&json!({"error": "x"})), None);
        assert_eq!(
            error_detail(&json!({"detail": [{"msg": "field required"}]})).as_deref(),
            Some(r#"[{"msg":"field required"}]"#)
        );
    }
}
