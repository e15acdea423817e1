//! Form input validation for the auth and profile pages.
//!
//! Validation runs before any request is issued; messages are shown inline.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use session::{Registration, User, UserUpdate};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Trim and require both login fields.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

pub fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<Registration, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in all fields.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(Registration { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

/// Build an update carrying only the fields that differ from `current`.
pub fn build_profile_update(current: Option<&User>, name: &str, email: &str) -> Result<UserUpdate, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if email.is_empty() {
        return Err("Email cannot be empty.");
    }

    let current_name = current.and_then(|u| u.name.as_deref()).unwrap_or_default();
    let current_email = current.and_then(|u| u.email.as_deref()).unwrap_or_default();
    let update = UserUpdate {
        name: (name != current_name).then(|| name.to_owned()),
        email: (email != current_email).then(|| email.to_owned()),
        ..UserUpdate::default()
    };
    if update.is_empty() {
        return Err("Nothing to update.");
    }
    Ok(update)
}
