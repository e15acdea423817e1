//! Command-line client for the nutrition tracker's auth endpoints.
//!
//! Drives the same session manager as the browser app, with a `reqwest`
//! transport and the token persisted in a file instead of `localStorage`.

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;
use session::dispatch::ReqwestTransport;
use session::store::FileStore;
use session::{AuthSession, Registration, SessionConfig, SessionError, ThirdPartyIdentity, User, UserUpdate};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("API base URL must be absolute, got `{0}`; pass --api-base-url or set NUTRITRACK_API_BASE_URL")]
    RelativeBaseUrl(String),
    #[error("no token file location; pass --token-file or set NUTRITRACK_TOKEN_FILE or HOME")]
    NoTokenFile,
    #[error("{0}")]
    Session(#[from] SessionError),
    #[error("session could not be resolved{}", .0.as_deref().map(|e| format!(": {e}")).unwrap_or_default())]
    Unresolved(Option<String>),
    #[error("nothing to update; pass at least one of --name, --email, --profile-image, --password")]
    EmptyUpdate,
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "nutritrack-cli", about = "Nutrition tracker account CLI")]
struct Cli {
    /// Absolute API base URL; overrides `NUTRITRACK_API_BASE_URL` from the session config.
    #[arg(long, env = "NUTRITRACK_API_BASE_URL", default_value = "http://127.0.0.1:5000/api")]
    api_base_url: String,

    #[arg(long, env = "NUTRITRACK_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    /// Log session transitions to stderr.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in with email and password.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "NUTRITRACK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and log in.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "NUTRITRACK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Exchange a Google ID token for a session.
    Google {
        #[arg(long)]
        id_token: String,
    },
    /// Resolve the stored token and print the current user.
    Whoami,
    /// Update the current user's profile.
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        profile_image: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Forget the stored token. Makes no network call.
    Logout,
    /// Report the lookup URL and whether a token is stored, without contacting the server.
    Status,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let token_file = match cli.token_file {
        Some(path) => path,
        None => default_token_file().ok_or(CliError::NoTokenFile)?,
    };
    let config = cli_config(SessionConfig::from_env()?, &cli.api_base_url)?;
    let transport = ReqwestTransport::new(config.timeouts)?;
    let session = AuthSession::new(config, Box::new(transport), Box::new(FileStore::new(&token_file)));

    match cli.command {
        Command::Login { email, password } => {
            let user = session.login(&email, &password).await?;
            print_user(&user)
        }
        Command::Register { name, email, password } => {
            let user = session.register(&Registration { name, email, password }).await?;
            print_user(&user)
        }
        Command::Google { id_token } => {
            let user = session.third_party_login(&ThirdPartyIdentity::IdToken { token_id: id_token }).await?;
            print_user(&user)
        }
        Command::Whoami => {
            let user = resolve(&session).await?;
            print_user(&user)
        }
        Command::Update { name, email, profile_image, password } => {
            let update = UserUpdate { name, email, profile_image, password };
            if update.is_empty() {
                return Err(CliError::EmptyUpdate);
            }
            resolve(&session).await?;
            let user = session.update_user(&update).await?;
            print_user(&user)
        }
        Command::Logout => {
            session.logout();
            println!("logged out");
            Ok(())
        }
        Command::Status => {
            let config = session.config();
            let rendered = serde_json::json!({
                "api": config.url(&config.endpoints.me),
                "token_file": token_file.display().to_string(),
                "token_present": session.state().token.is_some(),
            });
            print_json(&rendered)
        }
    }
}

/// Run the initial token check and return the resolved user.
async fn resolve(session: &AuthSession) -> Result<User, CliError> {
    session.start().await;
    let state = session.state();
    if state.token.is_none() {
        return Err(SessionError::NotAuthenticated.into());
    }
    state.user.ok_or(CliError::Unresolved(state.error))
}

fn cli_config(mut config: SessionConfig, api_base_url: &str) -> Result<SessionConfig, CliError> {
    let base = api_base_url.trim().trim_end_matches('/');
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        return Err(CliError::RelativeBaseUrl(base.to_owned()));
    }
    base.clone_into(&mut config.api_base_url);
    Ok(config)
}

fn default_token_file() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".nutritrack").join("token"))
}

fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();
}

fn print_user(user: &User) -> Result<(), CliError> {
    print_json(&serde_json::to_value(user)?)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
