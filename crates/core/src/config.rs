//! Client configuration
//!
//! Settings are layered: built-in defaults, an optional file, then
//! `TASKDESK__*` environment variables (e.g. `TASKDESK__API__BASE_URL`).

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the state directory
pub const STATE_DIR_ENV: &str = "TASKDESK_STATE_DIR";

/// File name of the token storage document inside the state directory
pub const STORAGE_FILE: &str = "storage.json";

/// Main client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// API server configuration
    pub api: ApiSettings,

    /// Persistent client state
    pub storage: StorageSettings,

    /// Navigation targets
    pub routes: RouteSettings,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Origin every request path is appended to
    pub base_url: String,

    /// Request timeout in seconds, `None` waits indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Custom user agent
    #[serde(default)]
    pub user_agent: Option<String>,
}

/// Persistent client state configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// JSON document holding the access token
    pub token_file: PathBuf,
}

/// Paths the client navigates to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteSettings {
    /// Destination after a successful login
    pub dashboard: String,

    /// Destination after logout
    pub login: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            token_file: default_state_dir().join(STORAGE_FILE),
        }
    }
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self {
            dashboard: "/dashboard".to_string(),
            login: "/login.html".to_string(),
        }
    }
}

/// Directory for client state and logs
///
/// `TASKDESK_STATE_DIR` wins, then the platform data directory.
pub fn default_state_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(STATE_DIR_ENV) {
        PathBuf::from(dir)
    } else {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("taskdesk")
    }
}

impl Settings {
    /// Load settings from defaults, an optional file and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a value fails to parse
    pub fn load(path: Option<&Path>) -> CoreResult<Self> {
        Self::load_with_env(
            path,
            config::Environment::with_prefix("TASKDESK").separator("__"),
        )
    }

    fn load_with_env(path: Option<&Path>, env: config::Environment) -> CoreResult<Self> {
        let defaults = Self::default();

        let mut builder = config::Config::builder()
            .set_default("api.base_url", defaults.api.base_url)?
            .set_default(
                "storage.token_file",
                defaults.storage.token_file.to_string_lossy().to_string(),
            )?
            .set_default("routes.dashboard", defaults.routes.dashboard)?
            .set_default("routes.login", defaults.routes.login)?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let settings: Self = builder.add_source(env).build()?.try_deserialize()?;
        settings.validated()
    }

    /// Place the token document inside `dir`
    pub fn with_state_dir(mut self, dir: &Path) -> Self {
        self.storage.token_file = dir.join(STORAGE_FILE);
        self
    }

    fn validated(mut self) -> CoreResult<Self> {
        let trimmed = self.api.base_url.trim_end_matches('/').to_string();
        let parsed = url::Url::parse(&trimmed).map_err(|e| {
            CoreError::invalid_config(format!("api.base_url {:?}: {e}", self.api.base_url))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CoreError::invalid_config(format!(
                "api.base_url must be http or https, got {}",
                parsed.scheme()
            )));
        }
        self.api.base_url = trimmed;

        for route in [&self.routes.dashboard, &self.routes.login] {
            if !route.starts_with('/') {
                return Err(CoreError::invalid_config(format!(
                    "route {route:?} must start with '/'"
                )));
            }
        }
        Ok(self)
    }
}
