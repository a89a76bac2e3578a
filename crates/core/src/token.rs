//! Bearer token storage
//!
//! The access token is the only piece of client state that outlives a single
//! request. Every authenticated call asks the store again, so a token written
//! by a later login is picked up without rebuilding the client.

use crate::error::{CoreError, CoreResult};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

/// Storage keys used by the client
pub struct StorageKeys;

impl StorageKeys {
    /// Key holding the bearer token
    pub const ACCESS_TOKEN: &'static str = "access_token";
}

/// Capability for reading and writing the bearer token
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Current token, if one has been stored
    async fn get(&self) -> CoreResult<Option<String>>;

    /// Replace the stored token
    async fn set(&self, token: &str) -> CoreResult<()>;

    /// Remove the stored token
    async fn clear(&self) -> CoreResult<()>;
}

/// In-process token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self) -> CoreResult<Option<String>> {
        Ok(self.token.read().await.clone())
    }

    async fn set(&self, token: &str) -> CoreResult<()> {
        *self.token.write().await = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> CoreResult<()> {
        *self.token.write().await = None;
        Ok(())
    }
}

/// Token store backed by a JSON key/value document on disk
///
/// The document may hold other keys; they are left untouched. Writes from
/// separate processes are not coordinated and the last writer wins.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileTokenStore {
    /// Store backed by the JSON document at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> CoreResult<BTreeMap<String, String>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(BTreeMap::new()),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                warn!(path = %self.path.display(), "unreadable storage document");
                CoreError::storage_error(format!("{}: {e}", self.path.display()))
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn persist(&self, entries: &BTreeMap<String, String>) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let payload = serde_json::to_vec_pretty(entries)?;
        tokio::fs::write(&self.path, payload).await?;

        // Owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            tokio::fs::set_permissions(&self.path, permissions).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get(&self) -> CoreResult<Option<String>> {
        let entries = self.load().await?;
        Ok(entries.get(StorageKeys::ACCESS_TOKEN).cloned())
    }

    async fn set(&self, token: &str) -> CoreResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(StorageKeys::ACCESS_TOKEN.to_string(), token.to_string());
        self.persist(&entries).await?;
        debug!(path = %self.path.display(), "stored access token");
        Ok(())
    }

    async fn clear(&self) -> CoreResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        if entries.remove(StorageKeys::ACCESS_TOKEN).is_some() {
            self.persist(&entries).await?;
            debug!(path = %self.path.display(), "cleared access token");
        }
        Ok(())
    }
}

// Mock implementation for testing
#[cfg(test)]
pub mod mock {
    use super::*;
    use mockall::mock;

    mock! {
        pub TokenStore {}

        #[async_trait]
        impl TokenStore for TokenStore {
            async fn get(&self) -> CoreResult<Option<String>>;
            async fn set(&self, token: &str) -> CoreResult<()>;
            async fn clear(&self) -> CoreResult<()>;
        }
    }
}
