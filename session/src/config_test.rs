use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = SessionConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, SessionConfig::default());
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.storage_key, "token");
    assert_eq!(cfg.endpoints.me, "/auth/me");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = SessionConfig::from_lookup(lookup_from(&[
        ("NUTRITRACK_API_BASE_URL", "http://localhost:5000/"),
        ("NUTRITRACK_TOKEN_KEY", "nt_token"),
        ("NUTRITRACK_REQUEST_TIMEOUT_SECS", "5"),
        ("NUTRITRACK_CONNECT_TIMEOUT_SECS", "2"),
        ("NUTRITRACK_ENDPOINT_ME", "api/user"),
        ("NUTRITRACK_ENDPOINT_GOOGLE", "/api/google-auth"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_base_url, "http://localhost:5000");
    assert_eq!(cfg.storage_key, "nt_token");
    assert_eq!(cfg.timeouts, Timeouts { request_secs: 5, connect_secs: 2 });
    assert_eq!(cfg.endpoints.me, "/api/user");
    assert_eq!(cfg.endpoints.google, "/api/google-auth");
    assert_eq!(cfg.endpoints.login, "/auth/login");
}

#[test]
fn from_lookup_bad_numbers_fall_back() {
    let cfg = SessionConfig::from_lookup(lookup_from(&[("NUTRITRACK_REQUEST_TIMEOUT_SECS", "soon")])).unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
}

#[test]
fn from_lookup_empty_token_key_errors() {
    let err = SessionConfig::from_lookup(lookup_from(&[("NUTRITRACK_TOKEN_KEY", "  ")])).unwrap_err();
    assert!(matches!(err, SessionError::Config(_)));
    assert!(err.to_string().contains("NUTRITRACK_TOKEN_KEY"));
}

#[test]
fn url_joins_base_and_path() {
    let cfg = SessionConfig { api_base_url: "https://api.test".into(), ..SessionConfig::default() };
    assert_eq!(cfg.url("/auth/login"), "https://api.test/auth/login");
    assert_eq!(cfg.url("user"), "https://api.test/user");
}
