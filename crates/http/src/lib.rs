//! Taskdesk HTTP client
//!
//! A thin client over the Taskdesk REST API. Every call is a single
//! request/response round trip carrying the bearer token currently held by
//! the configured [`TokenStore`](taskdesk_core::TokenStore).

pub mod client;
pub mod types;

pub use client::{ApiClient, ApiClientBuilder, error::ClientError};
pub use types::{LoginRequest, LoginResponse, TaskStatus};
pub use reqwest::{Method, StatusCode};
