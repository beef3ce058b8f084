//! Client settings and loading
//!
//! Settings precedence: environment variables > config file > defaults.
//! The API key is read from `WORKOS_API_KEY` or from `api_key_file`, never
//! from the TOML directly, so config files can be committed without leaking it.
//!
//! Validation is lazy: each API module checks only the settings it needs when
//! it is constructed (SSO needs the client ID, everything needs the API key).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::secret::Secret;

/// Production API host.
pub const DEFAULT_API_BASE_URL: &str = "https://api.workos.com";

const ENV_API_KEY: &str = "WORKOS_API_KEY";
const ENV_CLIENT_ID: &str = "WORKOS_CLIENT_ID";
const ENV_API_BASE_URL: &str = "WORKOS_API_BASE_URL";

/// API surface whose settings requirements are checked before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    Sso,
    Passwordless,
    UserManagement,
    Organizations,
}

impl Module {
    pub fn label(&self) -> &'static str {
        match self {
            Module::Sso => "SSO",
            Module::Passwordless => "Passwordless",
            Module::UserManagement => "User Management",
            Module::Organizations => "Organizations",
        }
    }

    fn requires_client_id(&self) -> bool {
        matches!(self, Module::Sso)
    }
}

/// Credentials and endpoint used by every outbound call.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: Option<Secret<String>>,
    pub client_id: Option<String>,
    pub api_base_url: String,
}

/// On-disk shape of the TOML config file.
#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    #[serde(default)]
    client_id: Option<String>,
    #[serde(default)]
    api_base_url: Option<String>,
    /// Path to a file containing the API key (alternative to WORKOS_API_KEY)
    #[serde(default)]
    api_key_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Empty settings pointing at the production API host.
    pub fn new() -> Self {
        Self {
            api_key: None,
            client_id: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = non_empty(api_key.into()).map(Secret::new);
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = non_empty(client_id.into());
        self
    }

    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    /// Settings from `WORKOS_API_KEY`, `WORKOS_CLIENT_ID` and
    /// `WORKOS_API_BASE_URL`. Unset or empty variables leave the default.
    pub fn from_env() -> Result<Self> {
        let mut settings = Self::new();
        settings.overlay_env();
        settings.check_base_url()?;
        Ok(settings)
    }

    /// Load settings from a TOML file, then overlay environment variables.
    ///
    /// API key resolution order:
    /// 1. WORKOS_API_KEY env var
    /// 2. api_key_file path from config
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let file: FileSettings = toml::from_str(&contents)?;

        let mut settings = Self::new();
        if let Some(client_id) = file.client_id {
            settings.client_id = non_empty(client_id);
        }
        if let Some(url) = file.api_base_url {
            settings.api_base_url = url;
        }

        if env_value(ENV_API_KEY).is_none()
            && let Some(key_file) = &file.api_key_file
        {
            let key = std::fs::read_to_string(key_file).map_err(|e| {
                Error::Config(format!(
                    "failed to read api_key_file {}: {e}",
                    key_file.display()
                ))
            })?;
            settings.api_key = non_empty(key.trim().to_owned()).map(Secret::new);
        }

        settings.overlay_env();
        settings.check_base_url()?;
        debug!(
            path = %path.display(),
            api_key = settings.api_key.is_some(),
            client_id = settings.client_id.is_some(),
            "loaded settings"
        );
        Ok(settings)
    }

    /// Check that `module` has everything it needs.
    pub fn validate(&self, module: Module) -> Result<()> {
        let mut missing = Vec::new();
        if self.api_key.is_none() {
            missing.push("apiKey");
        }
        if module.requires_client_id() && self.client_id.is_none() {
            missing.push("clientId");
        }
        if missing.is_empty() {
            return Ok(());
        }
        Err(Error::Config(format!(
            "{} must be configured to use {}",
            missing.join(" and "),
            module.label()
        )))
    }

    /// The API key, or a configuration error when it is missing.
    pub fn require_api_key(&self) -> Result<&Secret<String>> {
        self.api_key
            .as_ref()
            .ok_or_else(|| Error::Config("apiKey is not configured".into()))
    }

    /// The client ID, or a configuration error when it is missing.
    pub fn require_client_id(&self) -> Result<&str> {
        self.client_id
            .as_deref()
            .ok_or_else(|| Error::Config("clientId is not configured".into()))
    }

    fn overlay_env(&mut self) {
        if let Some(key) = env_value(ENV_API_KEY) {
            self.api_key = Some(Secret::new(key));
        }
        if let Some(client_id) = env_value(ENV_CLIENT_ID) {
            self.client_id = Some(client_id);
        }
        if let Some(url) = env_value(ENV_API_BASE_URL) {
            self.api_base_url = url;
        }
    }

    fn check_base_url(&self) -> Result<()> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(Error::Config(format!(
                "api_base_url must start with http:// or https://, got: {}",
                self.api_base_url
            )));
        }
        Ok(())
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(non_empty)
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
