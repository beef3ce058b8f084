//! Organizations

use std::sync::Arc;

use common::{Module, Settings};
use gateway::{Gateway, Params, Request, path_segment};
use resource::{Order, Organization, Page, construct_from_response, construct_page};
use serde_json::Value;
use tracing::debug;

use crate::constants::{DEFAULT_PAGE_SIZE, PATH_ORGANIZATIONS};
use crate::error::Result;

/// Filters and cursors for `Organizations::list_organizations`.
#[derive(Debug, Clone, Default)]
pub struct ListOrganizations {
    /// Only organizations owning one of these domains
    pub domains: Vec<String>,
    /// Defaults to `DEFAULT_PAGE_SIZE`
    pub limit: Option<u32>,
    pub before: Option<String>,
    pub after: Option<String>,
    pub order: Option<Order>,
}

impl ListOrganizations {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        let domains = if self.domains.is_empty() {
            Value::Null
        } else {
            self.domains.clone().into()
        };
        params.insert("domains".into(), domains);
        params.insert(
            "limit".into(),
            self.limit.unwrap_or(DEFAULT_PAGE_SIZE).into(),
        );
        params.insert("before".into(), self.before.clone().into());
        params.insert("after".into(), self.after.clone().into());
        params.insert("order".into(), self.order.map(|o| o.as_str()).into());
        params
    }
}

pub struct Organizations {
    gateway: Arc<dyn Gateway>,
}

impl Organizations {
    /// Fails with a configuration error when the API key is not set.
    pub fn new(settings: &Settings, gateway: Arc<dyn Gateway>) -> Result<Self> {
        settings.validate(Module::Organizations)?;
        Ok(Self { gateway })
    }

    /// One page of organizations and its `(before, after)` cursors.
    pub async fn list_organizations(
        &self,
        options: &ListOrganizations,
    ) -> Result<(Option<String>, Option<String>, Vec<Organization>)> {
        let response = self
            .gateway
            .request(Request::get(PATH_ORGANIZATIONS).with_params(options.to_params()))
            .await?;
        let page: Page<Organization> = construct_page(&response)?;
        Ok(page.into_parts())
    }

    pub async fn create_organization(
        &self,
        name: &str,
        domains: &[&str],
        allow_profiles_outside_organization: Option<bool>,
    ) -> Result<Organization> {
        let params = organization_params(name, domains, allow_profiles_outside_organization);
        let response = self
            .gateway
            .request(Request::post(PATH_ORGANIZATIONS).with_params(params))
            .await?;
        let organization = construct_from_response::<Organization>(&response)?;
        debug!(organization_id = %organization.id, "created organization");
        Ok(organization)
    }

    pub async fn get_organization(&self, organization_id: &str) -> Result<Organization> {
        let response = self
            .gateway
            .request(Request::get(organization_path(organization_id)?))
            .await?;
        Ok(construct_from_response(&response)?)
    }

    /// Replace the organization's name and domains.
    pub async fn update_organization(
        &self,
        organization_id: &str,
        name: &str,
        domains: &[&str],
        allow_profiles_outside_organization: Option<bool>,
    ) -> Result<Organization> {
        let params = organization_params(name, domains, allow_profiles_outside_organization);
        let response = self
            .gateway
            .request(Request::put(organization_path(organization_id)?).with_params(params))
            .await?;
        Ok(construct_from_response(&response)?)
    }

    pub async fn delete_organization(&self, organization_id: &str) -> Result<()> {
        self.gateway
            .request(Request::delete(organization_path(organization_id)?))
            .await?;
        debug!(organization_id, "deleted organization");
        Ok(())
    }
}

fn organization_path(organization_id: &str) -> Result<String> {
    Ok(format!(
        "{PATH_ORGANIZATIONS}/{}",
        path_segment(organization_id)?
    ))
}

fn organization_params(
    name: &str,
    domains: &[&str],
    allow_profiles_outside_organization: Option<bool>,
) -> Params {
    let mut params = Params::new();
    params.insert("name".into(), name.into());
    params.insert("domains".into(), domains.to_vec().into());
    if let Some(allow) = allow_profiles_outside_organization {
        params.insert("allow_profiles_outside_organization".into(), allow.into());
    }
    params
}
