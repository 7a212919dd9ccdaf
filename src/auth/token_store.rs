//! Token persistence.
//!
//! One key holding the current bearer token as an opaque string; absent
//! means logged out. The store is a passive surface with no derived state,
//! and IO failures are logged and treated as "no token" (fail-open, same
//! observable behavior as browser localStorage).

use std::path::PathBuf;
use std::sync::Mutex;

/// Storage key / file name for the session token.
pub const TOKEN_KEY: &str = "accessToken";

/// Persistent storage for the session token.
pub trait TokenStore: Send + Sync {
    /// The currently persisted token, if any.
    fn load(&self) -> Option<String>;

    /// Persist a token, replacing any previous one.
    fn save(&self, token: &str);

    /// Remove the persisted token. A no-op when none is stored.
    fn clear(&self);
}

/// In-process store, used in tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Mutex::new(Some(token.into())) }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        match self.token.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.lock().clone()
    }

    fn save(&self, token: &str) {
        *self.lock() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.lock() = None;
    }
}

/// File-backed store under the user data directory.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store at the default location
    /// (`<data_dir>/mercadinho-console/accessToken`).
    pub fn new() -> Self {
        let base = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
        Self { path: base.join("mercadinho-console").join(TOKEN_KEY) }
    }

    /// Store at an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for FileTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_string())
                }
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "failed to read token");
                None
            }
        }
    }

    fn save(&self, token: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                tracing::warn!(path = %parent.display(), error = %err, "failed to create token dir");
                return;
            }
        }
        if let Err(err) = std::fs::write(&self.path, token) {
            tracing::warn!(path = %self.path.display(), error = %err, "failed to persist token");
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "failed to remove token");
            }
        }
    }
}
