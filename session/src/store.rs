//! Durable token slot surviving reloads.
//!
//! Exactly one token is persisted at a time; an absent value means logged
//! out. Persistence is best-effort: a store that cannot write logs the
//! failure and the in-memory session carries on.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Mutex, PoisonError};

use crate::types::Token;

pub trait SessionStore: Send + Sync {
    fn load(&self) -> Option<Token>;
    fn save(&self, token: &Token);
    fn clear(&self);
}

/// Process-local store, used by tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<Token>>,
}

impl MemoryStore {
    #[must_use]
    pub fn with_token(token: Token) -> Self {
        Self { slot: Mutex::new(Some(token)) }
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<Token> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, token: &Token) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.clone());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl<S: SessionStore + ?Sized> SessionStore for std::sync::Arc<S> {
    fn load(&self) -> Option<Token> {
        (**self).load()
    }

    fn save(&self, token: &Token) {
        (**self).save(token);
    }

    fn clear(&self) {
        (**self).clear();
    }
}

#[cfg(feature = "native")]
pub use file::FileStore;

#[cfg(feature = "native")]
mod file {
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::SessionStore;
    use crate::types::Token;

    /// Single-file token store for native hosts.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl SessionStore for FileStore {
        fn load(&self) -> Option<Token> {
            match std::fs::read_to_string(&self.path) {
                Ok(raw) => {
                    let raw = raw.trim();
                    (!raw.is_empty()).then(|| Token::new(raw))
                }
                Err(e) if e.kind() == ErrorKind::NotFound => None,
                Err(e) => {
                    tracing::warn!(error = %e, path = %self.path.display(), "token file unreadable; treating as logged out");
                    None
                }
            }
        }

        fn save(&self, token: &Token) {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    tracing::warn!(error = %e, path = %parent.display(), "token directory create failed");
                    return;
                }
            }
            if let Err(e) = std::fs::write(&self.path, token.as_str()) {
                tracing::warn!(error = %e, path = %self.path.display(), "token file write failed");
            }
        }

        fn clear(&self) {
            match std::fs::remove_file(&self.path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => tracing::warn!(error = %e, path = %self.path.display(), "token file remove failed"),
            }
        }
    }
}
