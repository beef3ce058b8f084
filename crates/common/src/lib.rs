//! Common types for the WorkOS client workspace
//!
//! Holds the process configuration (`Settings`), the `Secret` wrapper used
//! for the API key, and the configuration error type shared by every crate.

mod error;
mod secret;
mod settings;

pub use error::{Error, Result};
pub use secret::Secret;
pub use settings::{DEFAULT_API_BASE_URL, Module, Settings};
