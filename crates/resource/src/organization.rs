//! Organization resources

use serde::{Deserialize, Serialize};

use crate::hydrate::{Field, Nested, Resource, hydrate_collection};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub object: Option<String>,
    pub id: String,
    pub name: String,
    pub allow_profiles_outside_organization: Option<bool>,
    #[serde(default)]
    pub domains: Vec<OrganizationDomain>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Resource for Organization {
    const RESOURCE_TYPE: &'static str = "organization";
    const FIELDS: &'static [Field] = &[
        Field::optional("object", "object"),
        Field::required("id", "id"),
        Field::required("name", "name"),
        Field::optional(
            "allow_profiles_outside_organization",
            "allowProfilesOutsideOrganization",
        ),
        Field::optional("created_at", "createdAt"),
        Field::optional("updated_at", "updatedAt"),
    ];
    const NESTED: &'static [Nested] = &[Nested {
        response_key: "domains",
        attribute: "domains",
        required: false,
        hydrate: hydrate_collection::<OrganizationDomain>,
    }];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDomain {
    pub object: Option<String>,
    pub id: String,
    pub domain: String,
}

impl Resource for OrganizationDomain {
    const RESOURCE_TYPE: &'static str = "organization_domain";
    const FIELDS: &'static [Field] = &[
        Field::optional("object", "object"),
        Field::required("id", "id"),
        Field::required("domain", "domain"),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hydrate::construct_from_response;
    use serde_json::json;

    #[test]
    fn organization_hydrates_domains_and_flags() {
        let org: Organization = construct_from_response(&json!({
            "object": "organization",
            "id": "org_01EHQMYV6MBK39QC5PZXHY59C3",
            "name": "Foo Corp",
            "allow_profiles_outside_organization": false,
            "domains": [
                {
                    "object": "organization_domain",
                    "id": "org_domain_01EHQMYV71XT8H31WE5HF8YK4A",
                    "domain": "foo-corp.com"
                }
            ]
        }))
        .unwrap();

        assert_eq!(org.name, "Foo Corp");
        assert_eq!(org.allow_profiles_outside_organization, Some(false));
        assert_eq!(org.domains[0].domain, "foo-corp.com");
        assert_eq!(org.to_mapping()["allowProfilesOutsideOrganization"], false);
    }

    #[test]
    fn domains_are_optional() {
        let org: Organization =
            construct_from_response(&json!({"id": "org_1", "name": "Foo Corp"})).unwrap();
        assert!(org.domains.is_empty());
        assert_eq!(org.created_at, None);
    }
}
