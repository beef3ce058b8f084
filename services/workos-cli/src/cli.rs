//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};
use serde_json::Value;
use workos::ConnectionType;

/// One-shot WorkOS API client
#[derive(Parser, Debug)]
#[command(name = "workos-cli", version)]
pub struct Cli {
    /// TOML settings file; without one, settings come from WORKOS_* env vars
    #[arg(long, global = true, env = "CONFIG_PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Fetch a user by id
    GetUser { id: String },

    /// List one page of users
    ListUsers {
        #[arg(long)]
        email: Option<String>,

        /// Organization id
        #[arg(long)]
        organization: Option<String>,

        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        limit: Option<u32>,
    },

    /// Print the SSO authorization URL
    #[command(group(
        ArgGroup::new("target")
            .required(true)
            .multiple(true)
            .args(["domain", "provider"])
    ))]
    AuthorizationUrl {
        #[arg(long)]
        domain: Option<String>,

        /// Connection type, e.g. GoogleOAuth
        #[arg(long, value_parser = parse_provider)]
        provider: Option<ConnectionType>,

        #[arg(long)]
        redirect_uri: Option<String>,

        #[arg(long)]
        state: Option<String>,
    },

    /// Fetch an organization by id
    GetOrganization { id: String },

    /// Create a Magic Link session
    CreateSession { email: String },
}

/// Provider names as the API spells them.
fn parse_provider(name: &str) -> Result<ConnectionType, String> {
    serde_json::from_value(Value::String(name.to_owned()))
        .map_err(|_| format!("unknown provider: {name}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use std::sync::Mutex;

    /// Serializes tests that read or mutate CONFIG_PATH.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// SAFETY: Callers must hold ENV_MUTEX to prevent concurrent env mutation.
    unsafe fn set_env(key: &str, val: &str) {
        unsafe { std::env::set_var(key, val) };
    }

    unsafe fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) };
    }

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("workos-cli").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_get_user_with_config() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let cli = parse(&["--config", "/etc/workos.toml", "get-user", "user_123"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/etc/workos.toml")));
        assert_eq!(
            cli.command,
            Command::GetUser {
                id: "user_123".into()
            }
        );

        // global flag also accepted after the subcommand
        let cli = parse(&["get-user", "user_123", "--config", "/etc/workos.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/etc/workos.toml")));
    }

    #[test]
    fn config_falls_back_to_env_then_none() {
        let _lock = ENV_MUTEX.lock().unwrap();
        unsafe { set_env("CONFIG_PATH", "/env/workos.toml") };
        let from_env = parse(&["get-user", "user_123"]).unwrap().config;
        let from_flag = parse(&["--config", "/cli/workos.toml", "get-user", "user_123"])
            .unwrap()
            .config;
        unsafe { remove_env("CONFIG_PATH") };
        let unset = parse(&["get-user", "user_123"]).unwrap().config;

        assert_eq!(from_env, Some(PathBuf::from("/env/workos.toml")));
        assert_eq!(from_flag, Some(PathBuf::from("/cli/workos.toml")));
        assert_eq!(unset, None);
    }

    #[test]
    fn parses_list_users_flags() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let cli = parse(&["list-users", "--organization", "org_123", "--limit", "25"]).unwrap();
        assert_eq!(
            cli.command,
            Command::ListUsers {
                email: None,
                organization: Some("org_123".into()),
                limit: Some(25),
            }
        );
    }

    #[test]
    fn rejects_bad_limit() {
        let err = parse(&["list-users", "--limit", "ten"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = parse(&["list-users", "--limit", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn parses_authorization_url_provider() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let cli = parse(&[
            "authorization-url",
            "--provider",
            "GoogleOAuth",
            "--state",
            "xyz",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::AuthorizationUrl {
                domain: None,
                provider: Some(ConnectionType::GoogleOAuth),
                redirect_uri: None,
                state: Some("xyz".into()),
            }
        );
    }

    #[test]
    fn authorization_url_requires_domain_or_provider() {
        let err = parse(&["authorization-url", "--state", "xyz"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = parse(&["authorization-url", "--provider", "Nope"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("unknown provider"));

        assert!(parse(&["authorization-url", "--domain", "foo-corp.com", "--provider", "GoogleOAuth"]).is_ok());
    }

    #[test]
    fn rejects_missing_and_unknown_commands() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["--config"]).is_err());
        assert_eq!(
            parse(&["frobnicate"]).unwrap_err().kind(),
            ErrorKind::InvalidSubcommand
        );
        assert!(parse(&["get-user"]).is_err());
        assert!(parse(&["get-user", "a", "b"]).is_err());
        assert!(parse(&["list-users", "--bogus", "x"]).is_err());
        assert!(parse(&["list-users", "--email"]).is_err());
    }
}
