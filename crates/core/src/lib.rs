//! Taskdesk core types and utilities

pub mod config;
pub mod error;
pub mod token;

pub use config::{ApiSettings, RouteSettings, Settings, StorageSettings};
pub use error::{CoreError, CoreResult};
pub use token::{FileTokenStore, MemoryTokenStore, StorageKeys, TokenStore};
