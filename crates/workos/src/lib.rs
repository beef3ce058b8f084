//! WorkOS API client
//!
//! Thin, typed façade over the WorkOS REST API: SSO, Passwordless (Magic
//! Link), User Management and Organizations. Each module method maps to one
//! HTTP round trip through a `gateway::Gateway` and returns hydrated
//! `resource` types.
//!
//! Usage:
//! 1. Build `Settings` (explicit setters, `Settings::from_env()` or `Settings::load()`)
//! 2. `WorkOs::new(settings)` wires the settings to an `HttpGateway`
//! 3. Ask for a module (`workos.sso()?`); construction validates the
//!    settings that module needs
//! 4. Call its methods; errors come back as `Error`
//!
//! There is no global client: every module is an explicit value, so several
//! configurations can coexist in one process.

pub mod constants;
pub mod error;
pub mod organizations;
pub mod passwordless;
pub mod sso;
pub mod user_management;

#[cfg(test)]
mod testing;

pub use constants::DEFAULT_PAGE_SIZE;
pub use error::{Error, Result};
pub use organizations::{ListOrganizations, Organizations};
pub use passwordless::Passwordless;
pub use sso::{ListConnections, Sso};
pub use user_management::{ListUsers, UserManagement};

pub use common::{Module, Secret, Settings};
pub use gateway::{Gateway, HttpGateway};
pub use resource::{
    Connection, ConnectionType, Domain, ListMetadata, Order, Organization, OrganizationDomain,
    PasswordlessSession, Profile, ProfileAndToken, Resource, User, UserAndToken,
};

use std::sync::Arc;
use std::time::Duration;

/// Entry point holding the settings and the gateway shared by all modules.
#[derive(Clone)]
pub struct WorkOs {
    settings: Arc<Settings>,
    gateway: Arc<dyn Gateway>,
}

impl WorkOs {
    /// Client backed by an `HttpGateway`.
    pub fn new(settings: Settings) -> Result<Self> {
        let settings = Arc::new(settings);
        let gateway = HttpGateway::new(settings.clone())?;
        Ok(Self::with_gateway(settings, Arc::new(gateway)))
    }

    /// Client whose requests fail with `Error::Transport` after `timeout`.
    pub fn with_timeout(settings: Settings, timeout: Duration) -> Result<Self> {
        let settings = Arc::new(settings);
        let gateway = HttpGateway::with_timeout(settings.clone(), timeout)?;
        Ok(Self::with_gateway(settings, Arc::new(gateway)))
    }

    /// Client over any gateway (test doubles, decorators).
    pub fn with_gateway(settings: Arc<Settings>, gateway: Arc<dyn Gateway>) -> Self {
        Self { settings, gateway }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn sso(&self) -> Result<Sso> {
        Sso::new(self.settings.clone(), self.gateway.clone())
    }

    pub fn passwordless(&self) -> Result<Passwordless> {
        Passwordless::new(&self.settings, self.gateway.clone())
    }

    pub fn user_management(&self) -> Result<UserManagement> {
        UserManagement::new(&self.settings, self.gateway.clone())
    }

    pub fn organizations(&self) -> Result<Organizations> {
        Organizations::new(&self.settings, self.gateway.clone())
    }
}
