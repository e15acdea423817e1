//! Auth session manager: single source of truth for "who is logged in".
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser shell and the CLI both drive one [`AuthSession`]. Consumers
//! only ever see [`SessionState`] snapshots (via [`AuthSession::state`] or a
//! [`AuthSession::subscribe`] listener); mutation is limited to the
//! operations below.
//!
//! TOKEN TRANSITIONS
//! =================
//! Every change of token goes through one procedure, in this order:
//! 1. persist or clear the token in the [`SessionStore`]
//! 2. install or remove the dispatcher's bearer header
//! 3. bump the generation counter and publish the new state
//! 4. if a token is present, resolve the user with a "who am I" request
//!
//! Step 4 settles `loading` exactly once per transition: success sets the
//! user, 401 clears the token (a second, terminal transition), and any other
//! failure keeps the token and records the cause in `error` so a reload or
//! [`AuthSession::refresh`] can recover. A lookup result whose generation
//! has been superseded is dropped.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::dispatch::{RequestDispatcher, Transport};
use crate::error::SessionError;
use crate::store::SessionStore;
use crate::types::{AuthGrant, Credentials, Registration, SessionState, ThirdPartyIdentity, Token, User, UserUpdate};

type Listener = Box<dyn Fn(&SessionState) + Send + Sync>;

struct Inner {
    state: SessionState,
    generation: u64,
}

pub struct AuthSession {
    config: SessionConfig,
    dispatcher: RequestDispatcher,
    store: Box<dyn SessionStore>,
    inner: Mutex<Inner>,
    listeners: Mutex<Vec<Listener>>,
}

impl AuthSession {
    /// Create a session seeded from the persisted token. `loading` stays true
    /// until [`AuthSession::start`] has resolved it.
    pub fn new(config: SessionConfig, transport: Box<dyn Transport>, store: Box<dyn SessionStore>) -> Self {
        let token = store.load();
        let dispatcher = RequestDispatcher::new(config.api_base_url.clone(), transport);
        Self {
            config,
            dispatcher,
            store,
            inner: Mutex::new(Inner { state: SessionState::initial(token), generation: 0 }),
            listeners: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Dispatcher carrying the session's credential, for feature requests.
    #[must_use]
    pub fn dispatcher(&self) -> &RequestDispatcher {
        &self.dispatcher
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.lock().state.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.lock().state.is_authenticated()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.lock().state.user.clone()
    }

    /// Register a listener invoked with a snapshot after every state change.
    ///
    /// Listeners must not call `subscribe` themselves.
    pub fn subscribe(&self, listener: impl Fn(&SessionState) + Send + Sync + 'static) {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner).push(Box::new(listener));
    }

    /// Initial token check for the token read at construction.
    pub async fn start(&self) {
        let token = self.lock().state.token.clone();
        if let Some(generation) = self.transition(token, None, None) {
            self.resolve(generation).await;
        }
    }

    /// Re-run user resolution for the current token, e.g. after a transient
    /// failure left the profile unresolved. No-op without a token.
    pub async fn refresh(&self) {
        let (snapshot, generation) = {
            let mut inner = self.lock();
            if inner.state.token.is_none() {
                return;
            }
            inner.generation += 1;
            inner.state.loading = true;
            inner.state.error = None;
            (inner.state.clone(), inner.generation)
        };
        self.notify(&snapshot);
        self.resolve(generation).await;
    }

    /// # Errors
    ///
    /// Returns the endpoint's rejection verbatim; session state is untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, SessionError> {
        let credentials = Credentials::new(email, password);
        self.authenticate(&self.config.endpoints.login, &credentials, "Failed to login").await
    }

    /// Register and immediately log in with the returned grant.
    ///
    /// # Errors
    ///
    /// Returns the endpoint's rejection verbatim; session state is untouched.
    pub async fn register(&self, registration: &Registration) -> Result<User, SessionError> {
        self.authenticate(&self.config.endpoints.register, registration, "Failed to register").await
    }

    /// Exchange an externally verified identity for a local token.
    ///
    /// # Errors
    ///
    /// Returns the endpoint's rejection verbatim; session state is untouched.
    pub async fn third_party_login(&self, identity: &ThirdPartyIdentity) -> Result<User, SessionError> {
        self.authenticate(&self.config.endpoints.google, identity, "Failed to login with Google").await
    }

    /// Drop the session locally. Never fails and makes no network call.
    pub fn logout(&self) {
        info!("logging out");
        self.transition(None, None, None);
    }

    /// Update the current user's profile and replace the cached user.
    ///
    /// # Errors
    ///
    /// - [`SessionError::NotAuthenticated`] when no token is present
    /// - the endpoint's rejection, verbatim
    pub async fn update_user(&self, update: &UserUpdate) -> Result<User, SessionError> {
        let generation = {
            let inner = self.lock();
            if inner.state.token.is_none() {
                return Err(SessionError::NotAuthenticated);
            }
            inner.generation
        };
        self.set_error(None);

        match self.dispatcher.put::<_, User>(&self.config.endpoints.user, update).await {
            Ok(user) => {
                let applied = self.update_if_current(generation, |state| state.user = Some(user.clone()));
                if !applied {
                    debug!("session changed during profile update; response not applied");
                }
                Ok(user)
            }
            Err(e) => Err(self.fail(e, "Failed to update profile")),
        }
    }

    async fn authenticate<B>(&self, path: &str, body: &B, fallback: &str) -> Result<User, SessionError>
    where
        B: Serialize + ?Sized,
    {
        self.set_error(None);
        let grant = match self.dispatcher.post::<_, AuthGrant>(path, body).await {
            Ok(grant) => grant,
            Err(e) => return Err(self.fail(e, fallback)),
        };

        info!(user_id = grant.user.id, "authenticated");
        let user = grant.user.clone();
        if let Some(generation) = self.transition(Some(grant.token), Some(grant.user), None) {
            self.resolve(generation).await;
        }
        Ok(user)
    }

    async fn resolve(&self, generation: u64) {
        match self.dispatcher.get::<User>(&self.config.endpoints.me).await {
            Ok(user) => {
                if !self.update_if_current(generation, |state| {
                    state.user = Some(user);
                    state.loading = false;
                }) {
                    debug!(generation, "discarding stale user lookup");
                }
            }
            Err(e) if e.is_unauthorized() => {
                if self.is_current(generation) {
                    info!("credential rejected; clearing session");
                    self.transition(None, None, Some(generation));
                } else {
                    debug!(generation, "discarding stale 401 user lookup");
                }
            }
            Err(e) => {
                let e = e.or_message("Failed to get user data");
                let message = e.to_string();
                if self.update_if_current(generation, |state| {
                    state.loading = false;
                    state.error = Some(message);
                }) {
                    warn!(status = ?e.status(), error = %e, "user lookup failed; keeping token");
                } else {
                    debug!(generation, "discarding stale failed user lookup");
                }
            }
        }
    }

    /// Move to `token`, keeping store and header in step. Returns the new
    /// generation when a user lookup must follow.
    ///
    /// With `expected`, the transition only happens if no other transition
    /// has occurred since that generation.
    fn transition(&self, token: Option<Token>, user: Option<User>, expected: Option<u64>) -> Option<u64> {
        let (snapshot, pending) = {
            let mut inner = self.lock();
            if expected.is_some_and(|g| g != inner.generation) {
                return None;
            }

            match &token {
                Some(t) => self.store.save(t),
                None => self.store.clear(),
            }
            self.dispatcher.set_token(token.as_ref());

            if inner.state.token.is_some() && token.is_none() {
                info!("session token cleared");
            }
            inner.generation += 1;
            let present = token.is_some();
            inner.state.token = token;
            inner.state.user = if present { user } else { None };
            inner.state.loading = present;
            (inner.state.clone(), present.then_some(inner.generation))
        };
        self.notify(&snapshot);
        pending
    }

    fn update_if_current(&self, generation: u64, apply: impl FnOnce(&mut SessionState)) -> bool {
        let snapshot = {
            let mut inner = self.lock();
            if inner.generation != generation {
                return false;
            }
            apply(&mut inner.state);
            inner.state.clone()
        };
        self.notify(&snapshot);
        true
    }

    fn is_current(&self, generation: u64) -> bool {
        self.lock().generation == generation
    }

    fn set_error(&self, error: Option<String>) {
        let snapshot = {
            let mut inner = self.lock();
            if inner.state.error == error {
                return;
            }
            inner.state.error = error;
            inner.state.clone()
        };
        self.notify(&snapshot);
    }

    fn fail(&self, error: SessionError, fallback: &str) -> SessionError {
        let error = error.or_message(fallback);
        self.set_error(Some(error.to_string()));
        error
    }

    fn notify(&self, snapshot: &SessionState) {
        let listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        for listener in listeners.iter() {
            listener(snapshot);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
