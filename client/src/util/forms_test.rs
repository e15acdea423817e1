use super::*;

fn ann() -> User {
    User {
        id: 1,
        name: Some("Ann".to_owned()),
        email: Some("ann@example.com".to_owned()),
        profile_image: None,
        created_at: None,
    }
}

#[test]
fn login_input_trims_email_and_requires_both() {
    assert_eq!(
        validate_login_input("  a@b.com ", "pw"),
        Ok(("a@b.com".to_owned(), "pw".to_owned()))
    );
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter both email and password."));
}

#[test]
fn register_input_requires_all_fields() {
    assert_eq!(validate_register_input("", "a@b.com", "secret1", "secret1").unwrap_err(), "Fill in all fields.");
    assert_eq!(validate_register_input("A", " ", "secret1", "secret1").unwrap_err(), "Fill in all fields.");
}

#[test]
fn register_input_checks_length_and_confirmation() {
    assert_eq!(
        validate_register_input("A", "a@b.com", "short", "short").unwrap_err(),
        "Password must be at least 6 characters."
    );
    assert_eq!(
        validate_register_input("A", "a@b.com", "secret1", "secret2").unwrap_err(),
        "Passwords do not match."
    );
}

#[test]
fn register_input_builds_registration() {
    let reg = validate_register_input(" A ", " a@b.com ", "secret1", "secret1").unwrap();
    assert_eq!(reg.name, "A");
    assert_eq!(reg.email, "a@b.com");
    assert_eq!(reg.password, "secret1");
}

#[test]
fn profile_update_carries_only_changes() {
    let update = build_profile_update(Some(&ann()), "B", "ann@example.com").unwrap();
    assert_eq!(update, UserUpdate { name: Some("B".to_owned()), ..UserUpdate::default() });
}

#[test]
fn profile_update_rejects_noop_and_empty_email() {
    assert_eq!(build_profile_update(Some(&ann()), " Ann ", "ann@example.com"), Err("Nothing to update."));
    assert_eq!(build_profile_update(Some(&ann()), "Ann", ""), Err("Email cannot be empty."));
}

#[test]
fn profile_update_without_cached_user_sends_both() {
    let update = build_profile_update(None, "Ann", "ann@example.com").unwrap();
    assert_eq!(update.name.as_deref(), Some("Ann"));
    assert_eq!(update.email.as_deref(), Some("ann@example.com"));
}
