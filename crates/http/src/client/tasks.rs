//! Employee task client methods

use super::{ApiClient, ClientError};
use crate::types::{TaskStatus, TaskStatusUpdate};
use reqwest::Method;

impl ApiClient {
    /// Change the status of a task assigned to an employee
    ///
    /// Succeeds on any 2xx; the response body is ignored.
    pub async fn update_task_status(
        &self,
        employee_id: &str,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<(), ClientError> {
        self.send_status(
            Method::PATCH,
            &format!("/employee/{employee_id}/tasks/{task_id}"),
            Some(&TaskStatusUpdate { status }),
        )
        .await
    }
}
