//! Error type shared by every session operation.
//!
//! ERROR HANDLING
//! ==============
//! Endpoint rejections keep the server's human-readable message as their
//! `Display` output so the UI can show it verbatim. Only `Unauthorized`
//! on the "who am I" lookup has session-level consequences (forced logout).

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The endpoint answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The endpoint answered 401 for the attached credential.
    #[error("{message}")]
    Unauthorized { message: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// A success response carried a body of the wrong shape.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// A configuration value was missing or malformed.
    #[error("config error: {0}")]
    Config(String),

    /// An operation that requires a session was called without one.
    #[error("no active session")]
    NotAuthenticated,
}

impl SessionError {
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// HTTP status behind the error, when there was a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Unauthorized { .. } => Some(401),
            _ => None,
        }
    }

    /// Replace the message of a response error with `fallback` when the
    /// server did not supply one.
    #[must_use]
    pub(crate) fn or_message(self, fallback: &str) -> Self {
        match self {
            Self::Rejected { status, message } if message.is_empty() => {
                Self::Rejected { status, message: fallback.to_owned() }
            }
            Self::Unauthorized { message } if message.is_empty() => {
                Self::Unauthorized { message: fallback.to_owned() }
            }
            other => other,
        }
    }
}
