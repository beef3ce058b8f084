//! API paths and defaults
//!
//! Paths are relative to `Settings::api_base_url`; `{id}` segments are
//! filled in by the module issuing the call.

/// Page size sent by list operations when the caller does not choose one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

pub const PATH_AUTHORIZATION: &str = "sso/authorize";
pub const PATH_TOKEN: &str = "sso/token";
pub const PATH_CONNECTIONS: &str = "connections";

pub const PATH_PASSWORDLESS_SESSIONS: &str = "passwordless/sessions";

pub const PATH_USERS: &str = "users";
pub const PATH_EMAIL_VERIFICATION: &str = "users/email_verification";

pub const PATH_ORGANIZATIONS: &str = "organizations";
