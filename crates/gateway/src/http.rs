//! reqwest-backed gateway
//!
//! Resolves request paths against the configured API host, attaches the
//! Authorization header selected by `Auth`, serializes params, and maps the
//! response into either parsed JSON or a typed error. No retries: a failed
//! call surfaces immediately.

use std::sync::Arc;
use std::time::{Duration, Instant};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use serde_json::Value;
use tracing::{debug, warn};

use common::Settings;

use crate::error::{Error, Result};
use crate::url::{append_query, endpoint_url, query_pairs};
use crate::{Auth, BodyEncoding, Gateway, Request, ResponseFuture};

/// User-Agent sent on every request.
pub const USER_AGENT: &str = concat!("workos-rust/", env!("CARGO_PKG_VERSION"));

/// Gateway issuing real HTTP requests. Holds no per-call state, so one
/// instance can serve concurrent calls.
pub struct HttpGateway {
    client: reqwest::Client,
    settings: Arc<Settings>,
}

impl HttpGateway {
    /// Gateway with a default reqwest client (no timeout beyond reqwest's defaults).
    pub fn new(settings: Arc<Settings>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Transport(format!("building HTTP client: {e}")))?;
        Ok(Self::with_client(client, settings))
    }

    /// Gateway whose requests fail with `Error::Transport` after `timeout`.
    pub fn with_timeout(settings: Arc<Settings>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transport(format!("building HTTP client: {e}")))?;
        Ok(Self::with_client(client, settings))
    }

    /// Gateway over a caller-configured client (proxies, custom TLS roots).
    pub fn with_client(client: reqwest::Client, settings: Arc<Settings>) -> Self {
        Self { client, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Authorization header value for `auth`, if any.
    fn authorization(&self, auth: &Auth) -> Result<Option<HeaderValue>> {
        let raw = match auth {
            Auth::ApiKey => {
                let key = self.settings.require_api_key()?;
                format!("Bearer {}", key.expose())
            }
            Auth::Header(value) => value.clone(),
            Auth::Basic { username, password } => basic_credentials(username, password),
            Auth::None => return Ok(None),
        };
        let mut value =
            HeaderValue::from_str(&raw).map_err(|e| Error::InvalidHeader(e.to_string()))?;
        value.set_sensitive(true);
        Ok(Some(value))
    }

    async fn send(&self, request: Request) -> Result<Value> {
        let method = request.method.as_str();
        let mut url = endpoint_url(&self.settings.api_base_url, &request.path)?;
        if !request.method.sends_body()
            && let Some(params) = &request.params
        {
            append_query(&mut url, params);
        }

        let mut builder = self.client.request(request.method.into(), url);
        if let Some(value) = self.authorization(&request.auth)? {
            builder = builder.header(AUTHORIZATION, value);
        }
        if request.method.sends_body()
            && let Some(params) = &request.params
        {
            builder = match request.encoding {
                BodyEncoding::Json => builder.json(params),
                BodyEncoding::Form => builder.form(&query_pairs(params)),
            };
        }

        debug!(method, path = %request.path, "sending API request");
        let started = Instant::now();

        let response = builder.send().await.map_err(|e| {
            crate::metrics::record_transport_error(method);
            warn!(method, path = %request.path, error = %e, "API request failed");
            Error::Transport(format!("{method} {} failed: {e}", request.path))
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            crate::metrics::record_transport_error(method);
            Error::Transport(format!("reading response body: {e}"))
        })?;
        crate::metrics::record_request(method, status.as_u16(), started.elapsed().as_secs_f64());

        if !status.is_success() {
            let body = error_body(&bytes);
            warn!(method, path = %request.path, status = status.as_u16(), "API returned error status");
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        debug!(method, path = %request.path, status = status.as_u16(), "API request completed");
        parse_body(&bytes)
    }
}

impl Gateway for HttpGateway {
    fn request(&self, request: Request) -> ResponseFuture<'_> {
        Box::pin(self.send(request))
    }
}

fn basic_credentials(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

/// Parse a 2xx body. Empty bodies (204 No Content) become `Value::Null`.
fn parse_body(bytes: &[u8]) -> Result<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(bytes)
        .map_err(|e| Error::MalformedResponse(format!("response is not valid JSON: {e}")))
}

/// Error payloads are kept as JSON when possible, otherwise as raw text.
fn error_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
