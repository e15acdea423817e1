//! Browser `localStorage` slot holding the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements the session crate's store trait so the token survives page
//! reloads. SSR paths safely no-op: the server never sees a stored token.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use session::{SessionStore, Token};

#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[cfg(feature = "hydrate")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl SessionStore for LocalStorageStore {
    fn load(&self) -> Option<Token> {
        #[cfg(feature = "hydrate")]
        {
            let raw = Self::storage()?.get_item(&self.key).ok().flatten()?;
            (!raw.is_empty()).then(|| Token::new(raw))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &Token) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = Self::storage() else {
                return;
            };
            report(storage.set_item(&self.key, token.as_str()), "write", &self.key);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = Self::storage() else {
                return;
            };
            report(storage.remove_item(&self.key), "remove", &self.key);
        }
    }
}

/// Log a failed storage call; the session carries on in memory either way.
/// Returns whether the call succeeded.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn report<E>(result: Result<(), E>, action: &str, key: &str) -> bool {
    if result.is_err() {
        leptos::logging::warn!("localStorage {action} failed for key {key}");
    }
    result.is_ok()
}
