//! Login form handler

use crate::ui::{LoginView, Navigator};
use taskdesk_core::RouteSettings;
use taskdesk_http::types::error_detail;
use taskdesk_http::{ApiClient, ClientError, LoginRequest};
use tracing::{info, warn};

/// Shown when either field is blank
pub const MISSING_FIELDS: &str = "Please fill in all fields.";

/// Shown when the server rejects the login without a `detail`
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Shown for network failures and unreadable responses
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Result of a login submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// A field was blank, nothing was sent
    Invalid,
    /// The server refused the credentials
    Rejected(String),
    /// Network, parse or storage failure
    Failed,
    /// Logged in and redirected to the dashboard
    LoggedIn { token_stored: bool },
}

/// Handles submission of the login form
pub struct LoginHandler {
    client: ApiClient,
    view: Box<dyn LoginView>,
    navigator: Box<dyn Navigator>,
    routes: RouteSettings,
}

impl LoginHandler {
    /// Create a handler bound to a form and a navigator
    pub fn new(
        client: ApiClient,
        view: Box<dyn LoginView>,
        navigator: Box<dyn Navigator>,
        routes: RouteSettings,
    ) -> Self {
        Self {
            client,
            view,
            navigator,
            routes,
        }
    }

    /// Submit the form
    ///
    /// The token, when issued, is written to the client's token store so
    /// later requests from the same client carry it.
    pub async fn submit(&self) -> LoginOutcome {
        let email = self.view.email().trim().to_string();
        let password = self.view.password().trim().to_string();

        if email.is_empty() || password.is_empty() {
            self.view.show_error(MISSING_FIELDS);
            return LoginOutcome::Invalid;
        }

        match self.client.login(&LoginRequest { email, password }).await {
            Ok(response) => {
                let mut token_stored = false;
                if let Some(token) = response.access_token() {
                    if let Err(e) = self.client.token_store().set(token).await {
                        warn!(error = %e, "failed to persist access token");
                        self.view.show_error(GENERIC_FAILURE);
                        return LoginOutcome::Failed;
                    }
                    token_stored = true;
                }
                info!(token_stored, "login succeeded");
                self.navigator.redirect(&self.routes.dashboard);
                LoginOutcome::LoggedIn { token_stored }
            }
            Err(ClientError::Api {
                status,
                body: Some(body),
                ..
            }) => {
                let message =
                    error_detail(&body).unwrap_or_else(|| INVALID_CREDENTIALS.to_string());
                info!(status = status.as_u16(), "login rejected");
                self.view.show_error(&message);
                LoginOutcome::Rejected(message)
            }
            Err(e) => {
                warn!(error = %e, "login request failed");
                self.view.show_error(GENERIC_FAILURE);
                LoginOutcome::Failed
            }
        }
    }
}
