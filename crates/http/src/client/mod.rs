//! Taskdesk API client

pub mod auth;
pub mod error;
pub mod manager;
pub mod tasks;

use error::ClientError;
use reqwest::{Client, ClientBuilder, Method, StatusCode, header};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use taskdesk_core::{MemoryTokenStore, TokenStore};
use tracing::debug;

const DEFAULT_USER_AGENT: &str = concat!("taskdesk-client/", env!("CARGO_PKG_VERSION"));

/// Taskdesk API client
///
/// Cloning is cheap; clones share the connection pool and token store.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a client without a stored token
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Token store consulted on every authenticated request
    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// Send an authenticated request
    ///
    /// Returns the parsed JSON body on success, or `None` for `204 No Content`.
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<Value>, ClientError> {
        let request = self.authorized(method.clone(), path).await?;
        Self::execute(method, path, request, body).await
    }

    /// Send an authenticated request where only the status matters
    ///
    /// Any 2xx counts as success and the response body is not read.
    pub async fn send_status<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ClientError> {
        let request = self.authorized(method.clone(), path).await?;
        Self::send(method, path, request, body).await?;
        Ok(())
    }

    /// Send a request without the `Authorization` header
    pub async fn public_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<Value>, ClientError> {
        let request = self.builder_for(method.clone(), path);
        Self::execute(method, path, request, body).await
    }

    /// Send an authenticated request and deserialize the response body
    pub async fn request_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError> {
        let value = self
            .request(method, path, body)
            .await?
            .ok_or(ClientError::EmptyResponse)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Authenticated `GET`
    pub async fn get(&self, path: &str) -> Result<Option<Value>, ClientError> {
        self.request(Method::GET, path, None::<&Value>).await
    }

    /// Authenticated `POST` with a JSON body
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<Value>, ClientError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Authenticated `PUT` with a JSON body
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<Value>, ClientError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Authenticated `PATCH` with a JSON body
    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<Value>, ClientError> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    /// Authenticated `DELETE`
    pub async fn delete(&self, path: &str) -> Result<Option<Value>, ClientError> {
        self.request(Method::DELETE, path, None::<&Value>).await
    }

    fn builder_for(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json")
    }

    async fn authorized(
        &self,
        method: Method,
        path: &str,
    ) -> Result<reqwest::RequestBuilder, ClientError> {
        let mut request = self.builder_for(method, path);
        // Re-read on every call so a rotated token is picked up
        if let Some(token) = self.tokens.get().await? {
            request = request.bearer_auth(token);
        }
        Ok(request)
    }

    /// Execute a request and normalize the response
    async fn execute<B: Serialize + ?Sized>(
        method: Method,
        path: &str,
        request: reqwest::RequestBuilder,
        body: Option<&B>,
    ) -> Result<Option<Value>, ClientError> {
        let response = Self::send(method, path, request, body).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let bytes = response.bytes().await?;
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Send a request, turning any non-2xx status into `ClientError::Api`
    async fn send<B: Serialize + ?Sized>(
        method: Method,
        path: &str,
        mut request: reqwest::RequestBuilder,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ClientError> {
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(%method, path, status = status.as_u16(), "api response");

        if status.is_success() {
            return Ok(response);
        }

        let bytes = response.bytes().await?;
        Err(ClientError::Api {
            method,
            status,
            body: serde_json::from_slice(&bytes).ok(),
        })
    }
}

/// Builder for ApiClient
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    tokens: Option<Arc<dyn TokenStore>>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ApiClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the store the bearer token is read from
    pub fn token_store(mut self, tokens: Arc<dyn TokenStore>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        client_builder = client_builder.user_agent(
            self.user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        );

        let client = client_builder.build()?;

        Ok(ApiClient {
            client,
            base_url,
            tokens: self
                .tokens
                .unwrap_or_else(|| Arc::new(MemoryTokenStore::new())),
        })
    }
}
