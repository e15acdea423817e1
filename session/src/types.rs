//! Session data model and the JSON shapes exchanged with the auth endpoint.
//!
//! DESIGN
//! ======
//! Response types accept both backend flavours seen in the field (`token` vs
//! `access_token`, integer ids, sparse user records) so the manager never
//! has to branch on which server it is talking to.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque bearer credential issued by the auth endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

/// The authenticated principal as reported by the auth endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    /// ISO-8601 creation timestamp, passed through as text.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// Name if set, else email, else `"?"`.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or("?")
    }
}

/// Successful login/register/third-party exchange.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthGrant {
    #[serde(alias = "access_token")]
    pub token: Token,
    pub user: User,
}

#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Identity asserted by an external provider, forwarded for a local token.
///
/// Serialized untagged: `{"token_id": ...}` for ID-token exchange, or
/// `{"email": ..., "name": ...}` for backends that trust a verified profile.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum ThirdPartyIdentity {
    IdToken { token_id: String },
    Profile { email: String, name: String },
}

/// Partial profile update; absent fields are left untouched by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.profile_image.is_none() && self.password.is_none()
    }
}

/// Snapshot of the session as observed by UI consumers.
///
/// `user` is only ever present while `token` is; `loading` covers the window
/// in which a token is known but the user has not been resolved yet.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<Token>,
    pub loading: bool,
    /// Last operation failure, for display only.
    pub error: Option<String>,
}

impl SessionState {
    /// Initial state for a freshly loaded page holding `token`.
    #[must_use]
    pub fn initial(token: Option<Token>) -> Self {
        Self { user: None, token, loading: true, error: None }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::initial(None)
    }
}
