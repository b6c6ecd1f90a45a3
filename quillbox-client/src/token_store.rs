//! Session token storage.
//!
//! The client never owns the token directly; it reads and writes through
//! this abstraction, injected at construction. That keeps "where the session
//! lives" a decision of the composition root rather than a process global.

use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn set(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}

#[derive(Serialize, Deserialize)]
struct StoredSession {
    token: String,
}

/// File-backed store: the token survives process restarts until an explicit
/// sign-out removes it. Storage failures are logged and otherwise ignored;
/// losing the file only means signing in again.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        serde_json::from_str::<StoredSession>(&raw)
            .map(|s| s.token)
            .ok()
    }

    fn set(&self, token: &str) {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let session = StoredSession {
            token: token.to_string(),
        };
        let raw = match serde_json::to_string(&session) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Failed to serialize session: {}", e);
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, raw) {
            log::warn!("Failed to persist session to {:?}: {}", self.path, e);
        }
    }

    fn clear(&self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to remove session file {:?}: {}", self.path, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(), None);
        store.set("tok-1");
        assert_eq!(store.get(), Some("tok-1".to_string()));
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileTokenStore::new(&path);
        assert_eq!(store.get(), None);
        store.set("tok-1");

        // A second instance over the same path sees the token
        let reopened = FileTokenStore::new(&path);
        assert_eq!(reopened.get(), Some("tok-1".to_string()));

        reopened.clear();
        assert_eq!(store.get(), None);
        // Clearing twice is fine
        reopened.clear();
    }

    #[test]
    fn test_file_store_ignores_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileTokenStore::new(&path);
        assert_eq!(store.get(), None);
    }
}
