//! Auth context shared by the route guard, shell and auth pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the session crate's manager for Leptos: the manager stays the only
//! writer, and a subscription mirrors each snapshot into a signal that
//! components read. Components get operations, never setters.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;
use session::{AuthSession, SessionConfig, SessionState};

use crate::net::transport::BrowserTransport;
use crate::util::storage::LocalStorageStore;

#[derive(Clone, Copy)]
pub struct AuthContext {
    session: StoredValue<Arc<AuthSession>>,
    state: RwSignal<SessionState>,
}

impl AuthContext {
    pub fn new(session: Arc<AuthSession>) -> Self {
        let state = RwSignal::new(session.state());
        session.subscribe(move |snapshot| state.set(snapshot.clone()));
        Self { session: StoredValue::new(session), state }
    }

    /// Reactive view of the session.
    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    pub fn session(&self) -> Arc<AuthSession> {
        self.session.get_value()
    }

    pub fn logout(&self) {
        self.session().logout();
    }

    /// Retry the profile lookup for the current token (browser only).
    pub fn refresh(&self) {
        #[cfg(feature = "hydrate")]
        {
            let session = self.session();
            leptos::task::spawn_local(async move { session.refresh().await });
        }
    }
}

/// Build the browser session, provide it as context and, in the browser,
/// start the initial token check.
pub fn provide_auth() -> AuthContext {
    let config = session_config();
    let store = LocalStorageStore::new(config.storage_key.clone());
    let session = Arc::new(AuthSession::new(config, Box::new(BrowserTransport), Box::new(store)));
    let ctx = AuthContext::new(session);
    provide_context(ctx);

    #[cfg(feature = "hydrate")]
    {
        let session = ctx.session();
        leptos::task::spawn_local(async move { session.start().await });
    }

    ctx
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Session config baked in at build time (`NUTRITRACK_*` variables).
pub fn session_config() -> SessionConfig {
    config_or_default(build_time_var)
}

fn build_time_var(key: &str) -> Option<String> {
    let value = match key {
        "NUTRITRACK_API_BASE_URL" => option_env!("NUTRITRACK_API_BASE_URL"),
        "NUTRITRACK_TOKEN_KEY" => option_env!("NUTRITRACK_TOKEN_KEY"),
        "NUTRITRACK_ENDPOINT_LOGIN" => option_env!("NUTRITRACK_ENDPOINT_LOGIN"),
        "NUTRITRACK_ENDPOINT_REGISTER" => option_env!("NUTRITRACK_ENDPOINT_REGISTER"),
        "NUTRITRACK_ENDPOINT_ME" => option_env!("NUTRITRACK_ENDPOINT_ME"),
        "NUTRITRACK_ENDPOINT_GOOGLE" => option_env!("NUTRITRACK_ENDPOINT_GOOGLE"),
        "NUTRITRACK_ENDPOINT_USER" => option_env!("NUTRITRACK_ENDPOINT_USER"),
        _ => None,
    };
    value.map(str::to_owned)
}

fn config_or_default(lookup: impl Fn(&str) -> Option<String>) -> SessionConfig {
    SessionConfig::from_lookup(lookup).unwrap_or_else(|e| {
        leptos::logging::warn!("invalid session config, using defaults: {e}");
        SessionConfig::default()
    })
}
