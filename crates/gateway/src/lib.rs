//! HTTP request gateway for the WorkOS API
//!
//! Every API module funnels its calls through the `Gateway` trait: one
//! `Request` in, one parsed JSON body out. `HttpGateway` is the reqwest-backed
//! implementation; tests substitute a recording double, and resilience
//! features (retries, backoff) belong in a decorator wrapping a `Gateway`
//! rather than in `HttpGateway` itself.
//!
//! Request flow:
//! 1. Module assembles a `Request` (method, path, auth, params)
//! 2. Gateway resolves the path against `Settings::api_base_url`
//! 3. GET/DELETE params go to the query string, POST/PUT params to the body
//! 4. Non-2xx responses become `Error::Api` carrying status and error payload

pub mod error;
pub mod http;
pub mod metrics;
pub mod url;

pub use error::{Error, Result};
pub use http::{HttpGateway, USER_AGENT};
pub use url::{generate_url, path_segment};

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

/// Request parameters. Keys are wire names; `Value::Null` marks a key that
/// is part of the endpoint contract but unset by the caller.
pub type Params = serde_json::Map<String, Value>;

/// HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// POST/PUT carry params in the body, GET/DELETE in the query string.
    pub fn sends_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// How a request authenticates.
#[derive(Clone, PartialEq, Eq)]
pub enum Auth {
    /// `Authorization: Bearer <apiKey>` from the configured settings
    ApiKey,
    /// Caller-supplied Authorization header value, sent verbatim
    Header(String),
    /// `Authorization: Basic base64(username:password)`
    Basic { username: String, password: String },
    /// No Authorization header (credentials travel in the body)
    None,
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Auth::ApiKey => f.write_str("ApiKey"),
            Auth::Header(_) => f.write_str("Header([REDACTED])"),
            Auth::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
            Auth::None => f.write_str("None"),
        }
    }
}

/// Body serialization for POST/PUT requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyEncoding {
    #[default]
    Json,
    /// `application/x-www-form-urlencoded`, used by the OAuth token exchange
    Form,
}

/// One API call.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    /// Path relative to the API host, without a leading slash (e.g. `users/{id}`)
    pub path: String,
    pub auth: Auth,
    pub params: Option<Params>,
    pub encoding: BodyEncoding,
}

impl Request {
    /// A request authenticated with the API key, without params.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            auth: Auth::ApiKey,
            params: None,
            encoding: BodyEncoding::Json,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    pub fn with_auth(mut self, auth: Auth) -> Self {
        self.auth = auth;
        self
    }

    /// Send POST/PUT params form-encoded instead of as JSON.
    pub fn form_encoded(mut self) -> Self {
        self.encoding = BodyEncoding::Form;
        self
    }
}

/// Boxed future returned by `Gateway::request`.
pub type ResponseFuture<'a> = Pin<Box<dyn Future<Output = Result<Value>> + Send + 'a>>;

/// Abstraction over the transport that executes API requests.
///
/// Uses `Pin<Box<dyn Future>>` return types for dyn-compatibility
/// (`Arc<dyn Gateway>`), so API modules can hold any implementation.
pub trait Gateway: Send + Sync {
    /// Issue `request` and return the parsed JSON body (`Value::Null` for an
    /// empty 2xx body).
    fn request(&self, request: Request) -> ResponseFuture<'_>;
}
