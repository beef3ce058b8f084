//! User Management resources

use serde::{Deserialize, Serialize};

use crate::hydrate::{Field, Nested, Resource, hydrate_one};

/// A user managed by User Management.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub object: Option<String>,
    pub id: String,
    /// `managed` or `unmanaged`
    pub user_type: Option<String>,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_verified_at: Option<String>,
    pub sso_profile_id: Option<String>,
    pub google_oauth_profile_id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Resource for User {
    const RESOURCE_TYPE: &'static str = "user";
    const FIELDS: &'static [Field] = &[
        Field::optional("object", "object"),
        Field::required("id", "id"),
        Field::optional("user_type", "userType"),
        Field::required("email", "email"),
        Field::optional("first_name", "firstName"),
        Field::optional("last_name", "lastName"),
        Field::optional("email_verified_at", "emailVerifiedAt"),
        Field::optional("sso_profile_id", "ssoProfileId"),
        Field::optional("google_oauth_profile_id", "googleOauthProfileId"),
        Field::optional("created_at", "createdAt"),
        Field::optional("updated_at", "updatedAt"),
    ];
}

/// Response of an email verification challenge: the user plus the
/// verification token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAndToken {
    pub token: String,
    pub user: User,
}

impl Resource for UserAndToken {
    const RESOURCE_TYPE: &'static str = "user_and_token";
    const FIELDS: &'static [Field] = &[Field::required("token", "token")];
    const NESTED: &'static [Nested] = &[Nested {
        response_key: "user",
        attribute: "user",
        required: true,
        hydrate: hydrate_one::<User>,
    }];
}
