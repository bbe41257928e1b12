//! `zendesk-wdc` — run the Zendesk connector from a terminal.
//!
//! The browser steps of the OAuth flow stay in the browser: `connect`
//! prints the authorization URL, and once the redirect service has issued
//! a token it can be stored with `login --token`.

mod host;
mod persistence;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use zendesk_wdc_models::{ACCESS_TOKEN_COOKIE, AuthPurpose, Credential};
use zendesk_wdc_sdk::{Connector, ConnectorConfig, HostAbort};

use crate::host::{CliHost, SessionEnd};
use crate::persistence::CookieStore;

#[derive(Parser, Debug)]
#[command(name = "zendesk-wdc")]
#[command(about = "Zendesk ticket connector, driven from the command line")]
#[command(author, version, long_about = None)]
struct Cli {
    /// Zendesk account URL (overrides ZENDESK_BASE_URL).
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Cookie jar file (default: <config dir>/zendesk-wdc/cookies.json).
    #[arg(long, global = true)]
    cookies: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the URL that starts the OAuth handshake.
    Connect(PurposeArgs),
    /// Store an access token as the redirect service would.
    Login {
        /// Bearer token issued by Zendesk.
        #[arg(long)]
        token: String,
    },
    /// Forget the stored access token.
    Logout,
    /// Show whether a credential is available.
    Status,
    /// Run the auth phase and report whether it completes on its own.
    Auth(PurposeArgs),
    /// Print the table schema as JSON.
    Schema,
    /// Run a full data pass and print the rows as JSON.
    Fetch(PurposeArgs),
}

#[derive(Args, Debug)]
struct PurposeArgs {
    /// Authenticate for server refreshes rather than a single session.
    #[arg(long)]
    enduring: bool,
}

impl PurposeArgs {
    fn purpose(&self) -> AuthPurpose {
        if self.enduring {
            AuthPurpose::Enduring
        } else {
            AuthPurpose::Ephemeral
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = ConnectorConfig::from_env();
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }

    let cookie_path = match cli.cookies {
        Some(path) => path,
        None => persistence::default_path().context("could not determine config directory")?,
    };
    let mut jar = CookieStore::load(&cookie_path)?;
    let connector = Connector::new(config)?;

    match cli.command {
        Commands::Connect(args) => {
            println!("{}", connector.connect(args.purpose()));
        }
        Commands::Login { token } => {
            let credential = Credential::new(token)?;
            jar.set(ACCESS_TOKEN_COOKIE, credential.as_str());
            jar.save()?;
            println!("connected");
        }
        Commands::Logout => {
            if jar.remove(ACCESS_TOKEN_COOKIE) {
                jar.save()?;
            }
            println!("not connected");
        }
        Commands::Status => {
            let connected = connector.session().has_credential(&jar, None);
            println!("{}", if connected { "connected" } else { "not connected" });
            if !connected {
                return Ok(ExitCode::from(2));
            }
        }
        Commands::Auth(args) => {
            let mut host = CliHost::new(connector.clone(), args.purpose());
            if host.authenticate(&jar) {
                println!("credential captured");
            } else {
                println!("not connected, open: {}", connector.connect(args.purpose()));
                return Ok(ExitCode::from(2));
            }
        }
        Commands::Schema => {
            println!("{}", serde_json::to_string_pretty(&connector.get_schema())?);
        }
        Commands::Fetch(args) => {
            let mut host = CliHost::new(connector, args.purpose());
            return report(host.run(&jar).await);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn report(end: SessionEnd) -> Result<ExitCode> {
    match end {
        SessionEnd::Completed(tables) => {
            println!("{}", serde_json::to_string_pretty(&tables)?);
            Ok(ExitCode::SUCCESS)
        }
        SessionEnd::NotConnected { connect_url } => {
            eprintln!("not connected, open: {connect_url}");
            Ok(ExitCode::from(2))
        }
        SessionEnd::Aborted { abort, connect_url } => match abort {
            HostAbort::WithError(message) => {
                eprintln!("aborted: {message}");
                Ok(ExitCode::FAILURE)
            }
            HostAbort::ForAuth(message) => {
                eprintln!("re-authentication required: {message}");
                eprintln!("open: {connect_url}");
                Ok(ExitCode::from(2))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_fetch_with_global_flags() {
        let cli = Cli::try_parse_from([
            "zendesk-wdc",
            "fetch",
            "--enduring",
            "--base-url",
            "http://localhost:4100",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:4100"));
        match cli.command {
            Commands::Fetch(args) => assert_eq!(args.purpose(), AuthPurpose::Enduring),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn login_requires_token() {
        assert!(Cli::try_parse_from(["zendesk-wdc", "login"]).is_err());
    }
}
