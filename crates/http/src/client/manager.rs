//! Manager user-administration client methods

use super::{ApiClient, ClientError};
use reqwest::Method;
use serde_json::Value;

impl ApiClient {
    /// Re-enable an employee account
    pub async fn activate_employee(
        &self,
        manager_id: &str,
        employee_id: &str,
    ) -> Result<(), ClientError> {
        self.send_status(
            Method::PATCH,
            &format!("/manager/{manager_id}/users/{employee_id}/activate"),
            None::<&Value>,
        )
        .await
    }

    /// Disable an employee account
    pub async fn deactivate_employee(
        &self,
        manager_id: &str,
        employee_id: &str,
    ) -> Result<(), ClientError> {
        self.send_status(
            Method::PATCH,
            &format!("/manager/{manager_id}/users/{employee_id}/deactivate"),
            None::<&Value>,
        )
        .await
    }
}
