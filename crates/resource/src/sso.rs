//! SSO resources: profiles and connections

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::hydrate::{Field, Nested, Resource, hydrate_collection, hydrate_one};

/// Identity of a user who completed an SSO flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub object: Option<String>,
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub connection_id: Option<String>,
    pub connection_type: Option<String>,
    pub organization_id: Option<String>,
    /// User identifier at the identity provider
    pub idp_id: Option<String>,
    /// Unprocessed attributes from the identity provider
    pub raw_attributes: Option<Value>,
}

impl Resource for Profile {
    const RESOURCE_TYPE: &'static str = "profile";
    const FIELDS: &'static [Field] = &[
        Field::optional("object", "object"),
        Field::required("id", "id"),
        Field::required("email", "email"),
        Field::optional("first_name", "firstName"),
        Field::optional("last_name", "lastName"),
        Field::optional("connection_id", "connectionId"),
        Field::optional("connection_type", "connectionType"),
        Field::optional("organization_id", "organizationId"),
        Field::optional("idp_id", "idpId"),
        Field::optional("raw_attributes", "rawAttributes"),
    ];
}

/// Token endpoint response: the profile plus an access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAndToken {
    pub access_token: String,
    pub profile: Profile,
}

impl Resource for ProfileAndToken {
    const RESOURCE_TYPE: &'static str = "profile_and_token";
    const FIELDS: &'static [Field] = &[Field::required("access_token", "accessToken")];
    const NESTED: &'static [Nested] = &[Nested {
        response_key: "profile",
        attribute: "profile",
        required: true,
        hydrate: hydrate_one::<Profile>,
    }];
}

/// A configured SSO connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: String,
    pub domains: Vec<Domain>,
    pub status: Option<String>,
    pub name: Option<String>,
    pub connection_type: Option<String>,
    pub organization_id: Option<String>,
}

impl Resource for Connection {
    const RESOURCE_TYPE: &'static str = "connection";
    const FIELDS: &'static [Field] = &[
        Field::required("id", "id"),
        Field::optional("status", "status"),
        Field::optional("name", "name"),
        Field::optional("connection_type", "connectionType"),
        Field::optional("organization_id", "organizationId"),
    ];
    const NESTED: &'static [Nested] = &[Nested {
        response_key: "domains",
        attribute: "domains",
        required: true,
        hydrate: hydrate_collection::<Domain>,
    }];
}

/// Email domain routed to a connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub object: Option<String>,
    pub id: String,
    pub domain: String,
}

impl Resource for Domain {
    const RESOURCE_TYPE: &'static str = "connection_domain";
    const FIELDS: &'static [Field] = &[
        Field::optional("object", "object"),
        Field::required("id", "id"),
        Field::required("domain", "domain"),
    ];
}
