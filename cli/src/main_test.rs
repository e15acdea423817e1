use clap::Parser;
use session::{HttpRequest, HttpResponse, MemoryStore, Token, Transport};

use super::*;

#[test]
fn cli_config_overrides_base_url_and_strips_slash() {
    let config = cli_config(SessionConfig::default(), "https://api.example.com/api/").unwrap();
    assert_eq!(config.api_base_url, "https://api.example.com/api");
    assert_eq!(config.url("/auth/me"), "https://api.example.com/api/auth/me");
}

#[test]
fn cli_config_rejects_relative_base_url() {
    let err = cli_config(SessionConfig::default(), "/api").unwrap_err();
    assert!(matches!(err, CliError::RelativeBaseUrl(ref base) if base == "/api"));
}

#[test]
fn parses_login_subcommand() {
    let cli = Cli::try_parse_from([
        "nutritrack-cli",
        "--api-base-url",
        "http://localhost:5000/api",
        "login",
        "--email",
        "a@example.com",
        "--password",
        "secret1",
    ])
    .unwrap();
    assert_eq!(cli.api_base_url, "http://localhost:5000/api");
    assert!(matches!(cli.command, Command::Login { ref email, .. } if email == "a@example.com"));
}

#[test]
fn update_accepts_partial_fields() {
    let cli = Cli::try_parse_from(["nutritrack-cli", "update", "--name", "Ada"]).unwrap();
    let Command::Update { name, email, profile_image, password } = cli.command else {
        panic!("expected update");
    };
    assert_eq!(name.as_deref(), Some("Ada"));
    assert!(email.is_none() && profile_image.is_none() && password.is_none());
}

struct Unavailable;

#[async_trait::async_trait(?Send)]
impl Transport for Unavailable {
    async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, SessionError> {
        Ok(HttpResponse::new(503, "{}".to_owned()))
    }
}

fn offline_session(token: Option<&str>) -> AuthSession {
    let config = cli_config(SessionConfig::default(), "http://api.test/api").unwrap();
    let store = token.map_or_else(MemoryStore::default, |t| MemoryStore::with_token(Token::new(t)));
    AuthSession::new(config, Box::new(Unavailable), Box::new(store))
}

#[tokio::test]
async fn resolve_reports_lookup_cause() {
    let session = offline_session(Some("T1"));
    let err = resolve(&session).await.unwrap_err();
    assert!(matches!(err, CliError::Unresolved(Some(ref cause)) if cause == "Failed to get user data"));
    assert_eq!(err.to_string(), "session could not be resolved: Failed to get user data");
}

#[tokio::test]
async fn resolve_without_token_is_not_authenticated() {
    let session = offline_session(None);
    let err = resolve(&session).await.unwrap_err();
    assert!(matches!(err, CliError::Session(SessionError::NotAuthenticated)));
}
