//! WorkOS command-line client
//!
//! Runs one API call per invocation and prints the result to stdout:
//! hydrated resources as JSON, authorization URLs as plain text. Logs go to
//! stderr as JSON so stdout stays pipeable.

mod cli;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{Value, json};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workos::{ConnectionType, ListUsers, Resource, Settings, WorkOs};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // JSON logs on stderr with LOG_LEVEL / RUST_LOG support
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env("LOG_LEVEL")
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let settings = load_settings(cli.config)?;
    let workos = WorkOs::new(settings).context("failed to build WorkOS client")?;

    let output = run(&workos, cli.command).await?;
    println!("{output}");
    Ok(())
}

/// Settings from the config file when one was given (`--config` or
/// `CONFIG_PATH`), otherwise from the environment alone.
fn load_settings(path: Option<PathBuf>) -> Result<Settings> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading configuration");
            Settings::load(&path)
                .with_context(|| format!("failed to load config from {}", path.display()))
        }
        None => {
            debug!("no config file, reading settings from environment");
            Settings::from_env().context("invalid settings in environment")
        }
    }
}

async fn run(workos: &WorkOs, command: Command) -> Result<String> {
    let output = match command {
        Command::GetUser { id } => {
            let user = workos.user_management()?.get_user(&id).await?;
            pretty(&user.to_mapping())?
        }
        Command::ListUsers {
            email,
            organization,
            limit,
        } => {
            let options = ListUsers {
                email,
                organization,
                limit,
                ..Default::default()
            };
            let (before, after, users) = workos.user_management()?.list_users(&options).await?;
            let data: Vec<Value> = users.iter().map(Resource::to_mapping).collect();
            pretty(&json!({
                "data": data,
                "list_metadata": {"before": before, "after": after}
            }))?
        }
        Command::AuthorizationUrl {
            domain,
            provider,
            redirect_uri,
            state,
        } => workos.sso()?.get_authorization_url(
            domain.as_deref(),
            redirect_uri.as_deref(),
            state.as_deref(),
            provider,
        )?,
        Command::GetOrganization { id } => {
            let organization = workos.organizations()?.get_organization(&id).await?;
            pretty(&organization.to_mapping())?
        }
        Command::CreateSession { email } => {
            let session = workos
                .passwordless()?
                .create_session(&email, None, None, ConnectionType::MagicLink)
                .await?;
            pretty(&session.to_mapping())?
        }
    };
    Ok(output)
}

fn pretty(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
