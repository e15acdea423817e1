//! Route guard decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded views must not decide anything while the initial token check is
//! running, otherwise a valid session flashes through the login page. The
//! attempted destination is not remembered across the redirect.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::types::SessionState;

pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving; render a neutral placeholder.
    Pending,
    /// Resolved and unauthenticated; navigate to [`LOGIN_PATH`].
    RedirectToLogin,
    /// Resolved and authenticated; render the guarded subtree.
    Render,
}

#[must_use]
pub fn decide(state: &SessionState) -> GuardDecision {
    if state.loading {
        GuardDecision::Pending
    } else if state.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::RedirectToLogin
    }
}
