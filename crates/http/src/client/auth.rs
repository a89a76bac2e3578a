//! Authentication API client methods

use super::{ApiClient, ClientError};
use crate::types::{LoginRequest, LoginResponse};
use reqwest::Method;

impl ApiClient {
    /// Exchange credentials for an access token
    ///
    /// Sent without a bearer token. The response must carry a JSON body,
    /// even when it holds no token.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let body = self
            .public_request(Method::POST, "/auth/login", Some(request))
            .await?
            .ok_or(ClientError::EmptyResponse)?;
        Ok(serde_json::from_value(body)?)
    }
}
