//! Recording gateway double for module tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use gateway::{Gateway, Request, ResponseFuture};
use serde_json::Value;

/// Records every request and answers with queued responses in order
/// (`Value::Null` once the queue is empty).
#[derive(Default)]
pub struct RecordingGateway {
    requests: Mutex<Vec<Request>>,
    responses: Mutex<VecDeque<gateway::Result<Value>>>,
}

impl RecordingGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond_with(&self, body: Value) {
        self.responses.lock().unwrap().push_back(Ok(body));
    }

    pub fn fail_with(&self, err: gateway::Error) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    /// The only request issued so far.
    pub fn single_request(&self) -> Request {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl Gateway for RecordingGateway {
    fn request(&self, request: Request) -> ResponseFuture<'_> {
        self.requests.lock().unwrap().push(request);
        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Value::Null));
        Box::pin(async move { response })
    }
}

pub fn user_response() -> Value {
    serde_json::json!({
        "object": "user",
        "id": "user_01H7X1M4TZJN5N4HG4XXMA1234",
        "user_type": "unmanaged",
        "email": "test@test.com",
        "first_name": "Damien",
        "last_name": "Alabaster",
        "email_verified_at": "2021-07-25T19:07:33.155Z",
        "sso_profile_id": "1AO5ZPQDE43",
        "google_oauth_profile_id": "goog_123ABC",
        "created_at": "2021-06-25T19:07:33.155Z",
        "updated_at": "2021-06-25T19:07:33.155Z"
    })
}

/// `user_response()` as an attribute mapping.
pub fn user_mapping() -> Value {
    serde_json::json!({
        "object": "user",
        "id": "user_01H7X1M4TZJN5N4HG4XXMA1234",
        "userType": "unmanaged",
        "email": "test@test.com",
        "firstName": "Damien",
        "lastName": "Alabaster",
        "emailVerifiedAt": "2021-07-25T19:07:33.155Z",
        "googleOauthProfileId": "goog_123ABC",
        "ssoProfileId": "1AO5ZPQDE43",
        "createdAt": "2021-06-25T19:07:33.155Z",
        "updatedAt": "2021-06-25T19:07:33.155Z"
    })
}
