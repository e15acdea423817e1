//! Client-side session core for the nutrition tracker.
//!
//! This crate owns the "who is logged in" state shared by the browser app
//! (`client`) and the command-line client (`cli`). It is platform neutral:
//! network access goes through a [`dispatch::Transport`] and token
//! persistence through a [`store::SessionStore`], both supplied by the host.
//!
//! DATA FLOW
//! =========
//! UI action -> [`auth::AuthSession`] operation -> [`dispatch::RequestDispatcher`]
//! -> remote auth endpoint -> store + in-memory state -> subscribers re-render.

pub mod auth;
pub mod config;
pub mod dispatch;
pub mod display;
pub mod error;
pub mod guard;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::AuthSession;
pub use config::{Endpoints, SessionConfig};
pub use dispatch::{HttpRequest, HttpResponse, Method, RequestDispatcher, Transport};
pub use error::SessionError;
pub use guard::GuardDecision;
pub use store::{MemoryStore, SessionStore};
pub use types::{AuthGrant, Credentials, Registration, SessionState, ThirdPartyIdentity, Token, User, UserUpdate};
