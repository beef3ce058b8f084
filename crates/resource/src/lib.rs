//! Typed WorkOS resources and their hydration from API responses
//!
//! Each resource declares a static rename table (`Resource::FIELDS`) mapping
//! snake_case response keys to camelCase attribute names. A single generic
//! function, `construct_from_response`, walks that table, so adding a
//! resource is a matter of declaring its fields rather than writing parsing
//! code. Resources that own child resources (a connection's domains, an
//! organization's domains) declare `Resource::NESTED` hooks that hydrate the
//! raw child value element-wise.
//!
//! `Resource::to_mapping` inverts hydration: it produces the attribute map
//! (camelCase keys, nested resources flattened recursively, unset optional
//! attributes as `null`). Response keys absent from the rename table are
//! dropped on hydration and never reappear.

pub mod connection_type;
pub mod error;
pub mod hydrate;
pub mod list;
pub mod organization;
pub mod passwordless;
pub mod sso;
pub mod user;

pub use connection_type::ConnectionType;
pub use error::{Error, Result};
pub use hydrate::{
    Field, Nested, Resource, construct_from_response, hydrate_collection, hydrate_one,
};
pub use list::{ListMetadata, Order, Page, construct_page};
pub use organization::{Organization, OrganizationDomain};
pub use passwordless::PasswordlessSession;
pub use sso::{Connection, Domain, Profile, ProfileAndToken};
pub use user::{User, UserAndToken};
