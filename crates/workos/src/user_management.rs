//! User Management
//!
//! One method per endpoint. Every call authenticates with the API key and
//! returns hydrated resources; list calls return `(before, after, items)`.

use std::sync::Arc;

use common::{Module, Settings};
use gateway::{Gateway, Params, Request, path_segment};
use resource::{Order, Page, User, UserAndToken, construct_from_response, construct_page};
use serde_json::Value;
use tracing::debug;

use crate::constants::{DEFAULT_PAGE_SIZE, PATH_EMAIL_VERIFICATION, PATH_USERS};
use crate::error::Result;

/// Filters and cursors for `UserManagement::list_users`.
#[derive(Debug, Clone, Default)]
pub struct ListUsers {
    /// `managed` or `unmanaged`
    pub user_type: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
    /// Defaults to `DEFAULT_PAGE_SIZE`
    pub limit: Option<u32>,
    pub before: Option<String>,
    pub after: Option<String>,
    pub order: Option<Order>,
}

impl ListUsers {
    /// Every key of the endpoint contract; unset filters are sent as null
    /// (dropped from the query string by the gateway).
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.insert("type".into(), self.user_type.clone().into());
        params.insert("email".into(), self.email.clone().into());
        params.insert("organization".into(), self.organization.clone().into());
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

pub struct UserManagement {
    gateway: Arc<dyn Gateway>,
}

impl UserManagement {
    /// Fails with a configuration error when the API key is not set.
    pub fn new(settings: &Settings, gateway: Arc<dyn Gateway>) -> Result<Self> {
        settings.validate(Module::UserManagement)?;
        Ok(Self { gateway })
    }

    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
        email_verified: Option<bool>,
    ) -> Result<User> {
        let mut params = Params::new();
        params.insert("email".into(), email.into());
        params.insert("password".into(), password.into());
        params.insert("first_name".into(), first_name.into());
        params.insert("last_name".into(), last_name.into());
        if let Some(verified) = email_verified {
            params.insert("email_verified".into(), verified.into());
        }

        let response = self
            .gateway
            .request(Request::post(PATH_USERS).with_params(params))
            .await?;
        let user = construct_from_response::<User>(&response)?;
        debug!(user_id = %user.id, "created user");
        Ok(user)
    }

    pub async fn get_user(&self, user_id: &str) -> Result<User> {
        let response = self
            .gateway
            .request(Request::get(user_path(user_id)?))
            .await?;
        Ok(construct_from_response(&response)?)
    }

    /// One page of users and its `(before, after)` cursors.
    pub async fn list_users(
        &self,
        options: &ListUsers,
    ) -> Result<(Option<String>, Option<String>, Vec<User>)> {
        let response = self
            .gateway
            .request(Request::get(PATH_USERS).with_params(options.to_params()))
            .await?;
        let page: Page<User> = construct_page(&response)?;
        Ok(page.into_parts())
    }

    pub async fn add_user_to_organization(
        &self,
        user_id: &str,
        organization_id: &str,
    ) -> Result<User> {
        let mut params = Params::new();
        params.insert("organization_id".into(), organization_id.into());

        let response = self
            .gateway
            .request(
                Request::post(format!("{}/organizations", user_path(user_id)?))
                    .with_params(params),
            )
            .await?;
        Ok(construct_from_response(&response)?)
    }

    /// Returns the user as it stands after the removal.
    pub async fn remove_user_from_organization(
        &self,
        user_id: &str,
        organization_id: &str,
    ) -> Result<User> {
        let response = self
            .gateway
            .request(Request::delete(format!(
                "{}/organizations/{}",
                user_path(user_id)?,
                path_segment(organization_id)?
            )))
            .await?;
        Ok(construct_from_response(&response)?)
    }

    /// Email a verification link pointing at `verification_url`.
    pub async fn create_email_verification_challenge(
        &self,
        user_id: &str,
        verification_url: &str,
    ) -> Result<UserAndToken> {
        let mut params = Params::new();
        params.insert("verification_url".into(), verification_url.into());

        let path = format!("{}/email_verification_challenge", user_path(user_id)?);
        let response = self
            .gateway
            .request(Request::post(path).with_params(params))
            .await?;
        Ok(construct_from_response(&response)?)
    }

    pub async fn complete_email_verification(&self, token: &str) -> Result<User> {
        let mut params = Params::new();
        params.insert("token".into(), Value::from(token));

        let response = self
            .gateway
            .request(Request::post(PATH_EMAIL_VERIFICATION).with_params(params))
            .await?;
        Ok(construct_from_response(&response)?)
    }
}

fn user_path(user_id: &str) -> Result<String> {
    Ok(format!("{PATH_USERS}/{}", path_segment(user_id)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testing::{RecordingGateway, user_mapping, user_response};
    use gateway::{Auth, Method};
    use resource::Resource;
    use serde_json::json;

    const USER_ID: &str = "user_01H7X1M4TZJN5N4HG4XXMA1234";
    const ORG_ID: &str = "org_01EHQMYV6MBK39QC5PZXHY59C3";

    fn module(gateway: &Arc<RecordingGateway>) -> UserManagement {
        let settings = Settings::new().with_api_key("sk_test");
        UserManagement::new(&settings, gateway.clone()).unwrap()
    }

    fn params(value: Value) -> Option<Params> {
        value.as_object().cloned()
    }

    #[test]
    fn requires_api_key() {
        let gateway = RecordingGateway::new();
        let result = UserManagement::new(&Settings::new(), gateway);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[tokio::test]
    async fn create_user_posts_all_fields() {
        let gateway = RecordingGateway::new();
        gateway.respond_with(user_response());

        let user = module(&gateway)
            .create_user("test@test.com", "x^T!V23UN1@V", "Damien", "Alabaster", Some(true))
            .await
            .unwrap();

        let request = gateway.single_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "users");
        assert_eq!(request.auth, Auth::ApiKey);
        assert_eq!(
            request.params,
            params(json!({
                "email": "test@test.com",
                "password": "x^T!V23UN1@V",
                "first_name": "Damien",
                "last_name": "Alabaster",
                "email_verified": true
            }))
        );
        assert_eq!(user.to_mapping(), user_mapping());
    }

    #[tokio::test]
    async fn create_user_omits_unset_email_verified() {
        let gateway = RecordingGateway::new();
        gateway.respond_with(user_response());

        module(&gateway)
            .create_user("test@test.com", "pw", "Damien", "Alabaster", None)
            .await
            .unwrap();

        let params = gateway.single_request().params.unwrap();
        assert!(!params.contains_key("email_verified"));
    }

    #[tokio::test]
    async fn get_user_hydrates_response() {
        let gateway = RecordingGateway::new();
        gateway.respond_with(user_response());

        let user = module(&gateway).get_user(USER_ID).await.unwrap();

        let request = gateway.single_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, format!("users/{USER_ID}"));
        assert_eq!(request.params, None);
        assert_eq!(user.id, USER_ID);
        assert_eq!(user.user_type.as_deref(), Some("unmanaged"));
    }

    #[tokio::test]
    async fn list_users_sends_null_filters_and_default_limit() {
        let gateway = RecordingGateway::new();
        gateway.respond_with(json!({
            "data": [user_response()],
            "list_metadata": {"before": null, "after": null}
        }));

        let (before, after, users) = module(&gateway)
            .list_users(&ListUsers::default())
            .await
            .unwrap();

        let request = gateway.single_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "users");
        assert_eq!(
            request.params,
            params(json!({
                "type": null,
                "email": null,
                "organization": null,
                "limit": DEFAULT_PAGE_SIZE,
                "before": null,
                "after": null,
                "order": null
            }))
        );
        assert_eq!(before, None);
        assert_eq!(after, None);
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].to_mapping(), user_mapping());
    }

    #[tokio::test]
    async fn list_users_passes_filters_and_cursors() {
        let gateway = RecordingGateway::new();
        gateway.respond_with(json!({
            "data": [],
            "list_metadata": {"before": "user_a", "after": "user_b"}
        }));

        let options = ListUsers {
            user_type: Some("managed".into()),
            organization: Some(ORG_ID.into()),
            limit: Some(25),
            after: Some("user_0".into()),
            order: Some(Order::Desc),
            ..Default::default()
        };
        let (before, after, users) = module(&gateway).list_users(&options).await.unwrap();

        let sent = gateway.single_request().params.unwrap();
        assert_eq!(sent["type"], "managed");
        assert_eq!(sent["organization"], ORG_ID);
        assert_eq!(sent["limit"], 25);
        assert_eq!(sent["after"], "user_0");
        assert_eq!(sent["order"], "desc");
        assert_eq!(sent["email"], Value::Null);
        assert_eq!(before.as_deref(), Some("user_a"));
        assert_eq!(after.as_deref(), Some("user_b"));
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn add_user_to_organization_posts_org_id() {
        let gateway = RecordingGateway::new();
        gateway.respond_with(user_response());

        let user = module(&gateway)
            .add_user_to_organization(USER_ID, ORG_ID)
            .await
            .unwrap();

        let request = gateway.single_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, format!("users/{USER_ID}/organizations"));
        assert_eq!(request.params, params(json!({"organization_id": ORG_ID})));
        assert_eq!(user.to_mapping(), user_mapping());
    }

    #[tokio::test]
    async fn remove_user_from_organization_deletes_without_body() {
        let gateway = RecordingGateway::new();
        gateway.respond_with(user_response());

        let user = module(&gateway)
            .remove_user_from_organization(USER_ID, ORG_ID)
            .await
            .unwrap();

        let request = gateway.single_request();
        assert_eq!(request.method, Method::Delete);
        assert_eq!(
            request.path,
            format!("users/{USER_ID}/organizations/{ORG_ID}")
        );
        assert_eq!(request.params, None);
        assert_eq!(user.to_mapping(), user_mapping());
    }

    #[tokio::test]
    async fn email_verification_challenge_returns_token_and_user() {
        let gateway = RecordingGateway::new();
        gateway.respond_with(json!({
            "token": "01DMEK0J53CVMC32CK5SE0KZ8Q",
            "user": user_response()
        }));

        let response = module(&gateway)
            .create_email_verification_challenge(
                "user_01E4ZCR3C56J083X43JQXF3JK5",
                "https://your-app.com/verify-email",
            )
            .await
            .unwrap();

        let request = gateway.single_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.path,
            "users/user_01E4ZCR3C56J083X43JQXF3JK5/email_verification_challenge"
        );
        assert_eq!(
            request.params,
            params(json!({"verification_url": "https://your-app.com/verify-email"}))
        );
        assert_eq!(response.token, "01DMEK0J53CVMC32CK5SE0KZ8Q");
        assert_eq!(response.user.to_mapping(), user_mapping());
    }

    #[tokio::test]
    async fn complete_email_verification_posts_token() {
        let gateway = RecordingGateway::new();
        gateway.respond_with(user_response());

        let user = module(&gateway)
            .complete_email_verification("01DMEK0J53CVMC32CK5SE0KZ8Q")
            .await
            .unwrap();

        let request = gateway.single_request();
        assert_eq!(request.path, "users/email_verification");
        assert_eq!(
            request.params,
            params(json!({"token": "01DMEK0J53CVMC32CK5SE0KZ8Q"}))
        );
        assert_eq!(user.to_mapping(), user_mapping());
    }

    #[tokio::test]
    async fn ids_are_escaped_into_a_single_segment() {
        let gateway = RecordingGateway::new();
        gateway.respond_with(user_response());
        gateway.respond_with(user_response());

        let module = module(&gateway);
        module
            .get_user("../organizations/org_1?limit=1000")
            .await
            .unwrap();
        module
            .remove_user_from_organization(USER_ID, "org_1#frag")
            .await
            .unwrap();

        let requests = gateway.requests();
        assert_eq!(
            requests[0].path,
            "users/..%2Forganizations%2Forg_1%3Flimit%3D1000"
        );
        assert_eq!(
            requests[1].path,
            format!("users/{USER_ID}/organizations/org_1%23frag")
        );
    }

    #[tokio::test]
    async fn dot_and_empty_ids_are_rejected_before_any_request() {
        let gateway = RecordingGateway::new();
        let module = module(&gateway);

        for id in ["", ".", ".."] {
            let err = module.get_user(id).await.unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "got {err:?}");
        }
        let err = module
            .add_user_to_organization("..", "org_1")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)), "got {err:?}");
        assert!(gateway.requests().is_empty());
    }

    #[tokio::test]
    async fn api_errors_surface_unchanged() {
        let gateway = RecordingGateway::new();
        gateway.fail_with(gateway::Error::Api {
            status: 404,
            body: json!({"message": "User not found"}),
        });

        let err = module(&gateway).get_user("user_missing").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn response_missing_required_field_is_reported() {
        let gateway = RecordingGateway::new();
        gateway.respond_with(json!({"object": "user", "id": USER_ID}));

        let err = module(&gateway).get_user(USER_ID).await.unwrap_err();
        assert!(
            matches!(err, Error::MissingField { resource: "user", field: "email" }),
            "got {err:?}"
        );
    }
}
