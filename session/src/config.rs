//! Session configuration parsed from environment variables.
//!
//! The endpoint paths are configurable because deployed backends disagree on
//! them (`/auth/*` vs `/api/*`); the defaults follow the auth blueprint of the
//! bundled backend, mounted under `/api`.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use crate::error::SessionError;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Paths of the remote auth operations, relative to the API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub login: String,
    pub register: String,
    pub me: String,
    pub google: String,
    pub user: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            login: "/auth/login".to_owned(),
            register: "/auth/register".to_owned(),
            me: "/auth/me".to_owned(),
            google: "/auth/google".to_owned(),
            user: "/user".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Prefix for every endpoint path; may be relative (`/api`) in the browser.
    pub api_base_url: String,
    /// Key under which the token is persisted.
    pub storage_key: String,
    pub endpoints: Endpoints,
    pub timeouts: Timeouts,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            storage_key: DEFAULT_TOKEN_KEY.to_owned(),
            endpoints: Endpoints::default(),
            timeouts: Timeouts::default(),
        }
    }
}

impl SessionConfig {
    /// Build typed session config from environment variables.
    ///
    /// Optional:
    /// - `NUTRITRACK_API_BASE_URL`: default `/api`, trailing `/` stripped
    /// - `NUTRITRACK_TOKEN_KEY`: default `token`, must not be empty
    /// - `NUTRITRACK_REQUEST_TIMEOUT_SECS`: default 30
    /// - `NUTRITRACK_CONNECT_TIMEOUT_SECS`: default 10
    /// - `NUTRITRACK_ENDPOINT_{LOGIN,REGISTER,ME,GOOGLE,USER}`: path overrides
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Config`] if the token key is empty.
    pub fn from_env() -> Result<Self, SessionError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup (env, compile-time vars, ...).
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Config`] if the token key is empty.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SessionError> {
        let api_base_url = lookup("NUTRITRACK_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();

        let storage_key = lookup("NUTRITRACK_TOKEN_KEY").unwrap_or_else(|| DEFAULT_TOKEN_KEY.to_owned());
        if storage_key.trim().is_empty() {
            return Err(SessionError::Config("NUTRITRACK_TOKEN_KEY must not be empty".to_owned()));
        }

        let defaults = Endpoints::default();
        let endpoint = |name: &str, default: String| {
            lookup(&format!("NUTRITRACK_ENDPOINT_{name}"))
                .map(|path| normalize_path(&path))
                .unwrap_or(default)
        };
        let endpoints = Endpoints {
            login: endpoint("LOGIN", defaults.login),
            register: endpoint("REGISTER", defaults.register),
            me: endpoint("ME", defaults.me),
            google: endpoint("GOOGLE", defaults.google),
            user: endpoint("USER", defaults.user),
        };

        let timeouts = Timeouts {
            request_secs: parse_u64(lookup("NUTRITRACK_REQUEST_TIMEOUT_SECS"), DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(lookup("NUTRITRACK_CONNECT_TIMEOUT_SECS"), DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { api_base_url, storage_key, endpoints, timeouts })
    }

    /// Full URL for an endpoint path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, normalize_path(path))
    }
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}

fn normalize_path(path: &str) -> String {
    let path = path.trim();
    if path.starts_with('/') { path.to_owned() } else { format!("/{path}") }
}
