//! Passwordless (Magic Link) resources

use serde::{Deserialize, Serialize};

use crate::hydrate::{Field, Resource};

/// A Magic Link session created for one email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordlessSession {
    pub object: Option<String>,
    pub id: String,
    pub email: String,
    pub expires_at: Option<String>,
    /// Link that authenticates the user when followed
    pub link: Option<String>,
}

impl Resource for PasswordlessSession {
    const RESOURCE_TYPE: &'static str = "passwordless_session";
    const FIELDS: &'static [Field] = &[
        Field::optional("object", "object"),
        Field::required("id", "id"),
        Field::required("email", "email"),
        Field::optional("expires_at", "expiresAt"),
        Field::optional("link", "link"),
    ];
}
