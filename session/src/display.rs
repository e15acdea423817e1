//! Display helpers for the navigation shell.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use crate::types::{SessionState, User};

/// Avatar initials: first letter of up to two name words, uppercased.
/// Falls back to `"?"` when there is no user or no name.
#[must_use]
pub fn initials(user: Option<&User>) -> String {
    let Some(name) = user.and_then(|u| u.name.as_deref()).map(str::trim).filter(|n| !n.is_empty()) else {
        return "?".to_owned();
    };
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Label shown at the top of the user menu.
#[must_use]
pub fn menu_label(user: Option<&User>) -> String {
    user.map(User::display_name).unwrap_or_default().to_owned()
}

/// Authenticated but the profile lookup settled without a user, e.g. after a
/// transient failure. The shell offers a retry in this state.
#[must_use]
pub fn profile_unresolved(state: &SessionState) -> bool {
    !state.loading && state.is_authenticated() && state.user.is_none()
}
