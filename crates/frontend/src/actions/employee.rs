//! Employee task actions

use super::{ActionContext, ActionOutcome};
use taskdesk_http::TaskStatus;

/// Prompt shown before changing a task's status
pub const CHANGE_STATUS_PROMPT: &str = "Change task status?";

/// Actions available on the employee task board
pub struct EmployeeActions {
    ctx: ActionContext,
}

impl EmployeeActions {
    /// Wrap the shared action context
    pub fn new(ctx: ActionContext) -> Self {
        Self { ctx }
    }

    /// Move one of the employee's tasks to `status`
    pub async fn update_task_status(
        &self,
        employee_id: &str,
        task_id: &str,
        status: TaskStatus,
    ) -> ActionOutcome {
        self.ctx
            .confirm_then(CHANGE_STATUS_PROMPT, || {
                self.ctx
                    .client()
                    .update_task_status(employee_id, task_id, status)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockConfirmer, MockNavigator, MockNotifier};
    use mockall::predicate::eq;
    use serde_json::json;
    use std::sync::Arc;
    use taskdesk_core::MemoryTokenStore;
    use taskdesk_http::ApiClient;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn actions(
        server: &MockServer,
        confirmer: MockConfirmer,
        notifier: MockNotifier,
        navigator: MockNavigator,
    ) -> EmployeeActions {
        let client = ApiClient::builder()
            .base_url(server.uri())
            .token_store(Arc::new(MemoryTokenStore::with_token("emp-token")))
            .build()
            .unwrap();
        EmployeeActions::new(ActionContext::new(
            client,
            Box::new(confirmer),
            Box::new(notifier),
            Box::new(navigator),
        ))
    }

    fn confirming(answer: bool) -> MockConfirmer {
        let mut confirmer = MockConfirmer::new();
        confirmer
            .expect_confirm()
            .with(eq(CHANGE_STATUS_PROMPT))
            .times(1)
            .return_const(answer);
        confirmer
    }

    #[tokio::test]
    async fn test_declined_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut notifier = MockNotifier::new();
        notifier.expect_alert().never();
        let mut navigator = MockNavigator::new();
        navigator.expect_reload().never();

        let outcome = actions(&server, confirming(false), notifier, navigator)
            .update_task_status("e1", "t1", TaskStatus::Completed)
            .await;
        assert_eq!(outcome, ActionOutcome::Cancelled);
    }

    #[tokio::test]
    async fn test_success_reloads() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/employee/e1/tasks/t1"))
            .and(header("authorization", "Bearer emp-token"))
            .and(body_json(json!({"status": "in progress"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
            .expect(1)
            .mount(&server)
            .await;

        let mut notifier = MockNotifier::new();
        notifier.expect_alert().never();
        let mut navigator = MockNavigator::new();
        navigator.expect_reload().times(1).return_const(());

        let outcome = actions(&server, confirming(true), notifier, navigator)
            .update_task_status("e1", "t1", TaskStatus::InProgress)
            .await;
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_failure_alerts_detail() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/employee/e1/tasks/t1"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({"detail": "Completed task cannot be updated"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut notifier = MockNotifier::new();
        notifier
            .expect_alert()
            .with(eq("Completed task cannot be updated"))
            .times(1)
            .return_const(());
        let mut navigator = MockNavigator::new();
        navigator.expect_reload().never();

        let outcome = actions(&server, confirming(true), notifier, navigator)
            .update_task_status("e1", "t1", TaskStatus::Pending)
            .await;
        assert_eq!(
            outcome,
            ActionOutcome::Failed("Completed task cannot be updated".to_string())
        );
    }

    #[tokio::test]
    async fn test_failure_with_unparseable_body() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/employee/e1/tasks/t1"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let mut notifier = MockNotifier::new();
        notifier
            .expect_alert()
            .with(eq("Unknown error"))
            .times(1)
            .return_const(());
        let mut navigator = MockNavigator::new();
        navigator.expect_reload().never();

        let outcome = actions(&server, confirming(true), notifier, navigator)
            .update_task_status("e1", "t1", TaskStatus::Completed)
            .await;
        assert_eq!(outcome, ActionOutcome::Failed("Unknown error".to_string()));
    }

    #[tokio::test]
    async fn test_empty_success_body_reloads() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/employee/e1/tasks/t1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let mut notifier = MockNotifier::new();
        notifier.expect_alert().never();
        let mut navigator = MockNavigator::new();
        navigator.expect_reload().times(1).return_const(());

        let outcome = actions(&server, confirming(true), notifier, navigator)
            .update_task_status("e1", "t1", TaskStatus::Completed)
            .await;
        assert_eq!(outcome, ActionOutcome::Succeeded);
    }

    #[tokio::test]
    async fn test_unreachable_server_alerts_error() {
        let server = MockServer::builder().start().await;

        let mut notifier = MockNotifier::new();
        notifier
            .expect_alert()
            .withf(|message: &str| message.starts_with("Request failed"))
            .times(1)
            .return_const(());
        let mut navigator = MockNavigator::new();
        navigator.expect_reload().never();

        let actions = actions(&server, confirming(true), notifier, navigator);
        drop(server);

        let outcome = actions
            .update_task_status("e1", "t1", TaskStatus::Completed)
            .await;
        assert!(matches!(outcome, ActionOutcome::Failed(_)));
    }
}
