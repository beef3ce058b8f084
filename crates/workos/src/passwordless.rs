//! Passwordless (Magic Link) sessions

use std::sync::Arc;

use common::{Module, Settings};
use gateway::{Gateway, Params, Request, path_segment};
use resource::{ConnectionType, PasswordlessSession, construct_from_response};
use tracing::debug;

use crate::constants::PATH_PASSWORDLESS_SESSIONS;
use crate::error::Result;

pub struct Passwordless {
    gateway: Arc<dyn Gateway>,
}

impl Passwordless {
    /// Fails with a configuration error when the API key is not set.
    pub fn new(settings: &Settings, gateway: Arc<dyn Gateway>) -> Result<Self> {
        settings.validate(Module::Passwordless)?;
        Ok(Self { gateway })
    }

    /// Create a session for `email`. `redirect_uri` and `state` are only
    /// sent when provided and non-empty.
    pub async fn create_session(
        &self,
        email: &str,
        redirect_uri: Option<&str>,
        state: Option<&str>,
        session_type: ConnectionType,
    ) -> Result<PasswordlessSession> {
        let mut params = Params::new();
        params.insert("email".into(), email.into());
        params.insert("type".into(), session_type.as_str().into());
        if let Some(uri) = redirect_uri.filter(|s| !s.is_empty()) {
            params.insert("redirect_uri".into(), uri.into());
        }
        if let Some(state) = state.filter(|s| !s.is_empty()) {
            params.insert("state".into(), state.into());
        }

        let response = self
            .gateway
            .request(Request::post(PATH_PASSWORDLESS_SESSIONS).with_params(params))
            .await?;
        let session = construct_from_response::<PasswordlessSession>(&response)?;
        debug!(session_id = %session.id, "created passwordless session");
        Ok(session)
    }

    /// Have WorkOS email the session's link. Returns `true` once sent; an
    /// expired or unknown session fails with `Error::Api`.
    pub async fn send_session(&self, session: &PasswordlessSession) -> Result<bool> {
        self.gateway
            .request(Request::post(format!(
                "{PATH_PASSWORDLESS_SESSIONS}/{}/send",
                path_segment(&session.id)?
            )))
            .await?;
        debug!(session_id = %session.id, "sent passwordless session");
        Ok(true)
    }
}
