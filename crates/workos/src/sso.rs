//! Single Sign-On
//!
//! The SSO flow has two halves:
//! 1. `get_authorization_url()` builds the URL the user is redirected to
//!    (pure, no network I/O)
//! 2. `get_profile()` exchanges the authorization code returned to the
//!    redirect URI for the user's profile
//!
//! The code exchange authenticates with `client_id` + `client_secret` in a
//! form-encoded body rather than with a bearer header, like any OAuth 2.0
//! token endpoint. Connection management calls use the API key.

use std::sync::Arc;

use common::{Module, Settings};
use gateway::{Auth, Gateway, Params, Request, generate_url, path_segment};
use resource::{
    Connection, ConnectionType, Order, Page, Profile, ProfileAndToken, construct_from_response,
    construct_page,
};
use tracing::debug;

use crate::constants::{DEFAULT_PAGE_SIZE, PATH_AUTHORIZATION, PATH_CONNECTIONS, PATH_TOKEN};
use crate::error::{Error, Result};

/// Filters and cursors for `Sso::list_connections`.
#[derive(Debug, Clone, Default)]
pub struct ListConnections {
    pub connection_type: Option<ConnectionType>,
    pub domain: Option<String>,
    pub organization_id: Option<String>,
    /// Defaults to `DEFAULT_PAGE_SIZE`
    pub limit: Option<u32>,
    pub before: Option<String>,
    pub after: Option<String>,
    pub order: Option<Order>,
}

impl ListConnections {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.insert(
            "connection_type".into(),
            self.connection_type.map(|t| t.as_str()).into(),
        );
        params.insert("domain".into(), self.domain.clone().into());
        params.insert(
            "organization_id".into(),
            self.organization_id.clone().into(),
        );
        params.insert(
            "limit".into(),
            self.limit.unwrap_or(DEFAULT_PAGE_SIZE).into(),
        );
        params.insert("before".into(), self.before.clone().into());
        params.insert("after".into(), self.after.clone().into());
        params.insert("order".into(), self.order.map(|o| o.as_str()).into());
        params
    }
}

pub struct Sso {
    settings: Arc<Settings>,
    gateway: Arc<dyn Gateway>,
}

impl Sso {
    /// Fails with a configuration error unless both the API key and the
    /// client ID are set.
    pub fn new(settings: Arc<Settings>, gateway: Arc<dyn Gateway>) -> Result<Self> {
        settings.validate(Module::Sso)?;
        Ok(Self { settings, gateway })
    }

    /// Build the OAuth 2.0 authorization URL that starts the SSO flow.
    ///
    /// At least one of `domain` or `provider` is required. `state` is
    /// returned unchanged to the redirect URI; empty state is not sent.
    pub fn get_authorization_url(
        &self,
        domain: Option<&str>,
        redirect_uri: Option<&str>,
        state: Option<&str>,
        provider: Option<ConnectionType>,
    ) -> Result<String> {
        if domain.is_none() && provider.is_none() {
            return Err(Error::InvalidArgument(
                "either domain or provider is required".into(),
            ));
        }

        let mut params = Params::new();
        params.insert("client_id".into(), self.settings.require_client_id()?.into());
        params.insert("response_type".into(), "code".into());
        if let Some(domain) = domain {
            params.insert("domain".into(), domain.into());
        }
        if let Some(uri) = redirect_uri {
            params.insert("redirect_uri".into(), uri.into());
        }
        if let Some(state) = state.filter(|s| !s.is_empty()) {
            params.insert("state".into(), state.into());
        }
        if let Some(provider) = provider {
            params.insert("provider".into(), provider.as_str().into());
        }

        Ok(generate_url(
            &self.settings.api_base_url,
            PATH_AUTHORIZATION,
            &params,
        )?)
    }

    /// Exchange an authorization code for the user's profile.
    pub async fn get_profile(&self, code: &str) -> Result<Profile> {
        Ok(self.get_profile_and_token(code).await?.profile)
    }

    /// Exchange an authorization code for the user's profile and an access token.
    pub async fn get_profile_and_token(&self, code: &str) -> Result<ProfileAndToken> {
        let mut params = Params::new();
        params.insert("client_id".into(), self.settings.require_client_id()?.into());
        params.insert(
            "client_secret".into(),
            self.settings.require_api_key()?.expose().as_str().into(),
        );
        params.insert("code".into(), code.into());
        params.insert("grant_type".into(), "authorization_code".into());

        let response = self
            .gateway
            .request(
                Request::post(PATH_TOKEN)
                    .with_auth(Auth::None)
                    .with_params(params)
                    .form_encoded(),
            )
            .await?;
        let exchanged = construct_from_response::<ProfileAndToken>(&response)?;
        debug!(profile_id = %exchanged.profile.id, "exchanged authorization code");
        Ok(exchanged)
    }

    pub async fn get_connection(&self, connection_id: &str) -> Result<Connection> {
        let response = self
            .gateway
            .request(Request::get(connection_path(connection_id)?))
            .await?;
        Ok(construct_from_response(&response)?)
    }

    /// One page of connections and its `(before, after)` cursors.
    pub async fn list_connections(
        &self,
        options: &ListConnections,
    ) -> Result<(Option<String>, Option<String>, Vec<Connection>)> {
        let response = self
            .gateway
            .request(Request::get(PATH_CONNECTIONS).with_params(options.to_params()))
            .await?;
        let page: Page<Connection> = construct_page(&response)?;
        Ok(page.into_parts())
    }

    pub async fn delete_connection(&self, connection_id: &str) -> Result<()> {
        self.gateway
            .request(Request::delete(connection_path(connection_id)?))
            .await?;
        debug!(connection_id, "deleted connection");
        Ok(())
    }
}

fn connection_path(connection_id: &str) -> Result<String> {
    Ok(format!("{PATH_CONNECTIONS}/{}", path_segment(connection_id)?))
}
