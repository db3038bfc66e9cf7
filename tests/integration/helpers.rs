//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use contenthub_api::{AppState, build_app};
use contenthub_auth::JwtEncoder;
use contenthub_core::config::{AppConfig, StoreProvider};
use contenthub_database::StoreManager;
use contenthub_entity::user::UserRole;

/// Id of the admin that owns elements created through [`TestApp::create_element`].
pub const ADMIN_ID: i64 = 1;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    encoder: JwtEncoder,
}

impl TestApp {
    /// Create a new test application on fresh in-memory stores.
    pub fn new() -> Self {
        Self::with_config(Self::test_config())
    }

    /// Create a test application with test mode (hard deletes) switched on.
    pub fn in_test_mode() -> Self {
        let mut config = Self::test_config();
        config.content.test_mode = true;
        Self::with_config(config)
    }

    fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.database.provider = StoreProvider::Memory;
        config.auth.jwt_secret = "integration-test-secret".to_string();
        config
    }

    /// Create a test application from an explicit config.
    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::new(config.clone(), StoreManager::memory());
        Self {
            router: build_app(state),
            encoder: JwtEncoder::new(&config.auth),
            config,
        }
    }

    /// A bearer token for `user_id` with `role`.
    pub fn token(&self, user_id: i64, role: UserRole) -> String {
        self.encoder
            .issue(user_id, role)
            .expect("Failed to issue token")
            .0
    }

    pub fn admin_token(&self) -> String {
        self.token(ADMIN_ID, UserRole::Admin)
    }

    pub fn user_token(&self, user_id: i64) -> String {
        self.token(user_id, UserRole::User)
    }

    /// Create an element as [`ADMIN_ID`] and return its id.
    pub async fn create_element(&self, parent_id: i64, title: &str, tags: &str) -> i64 {
        let token = self.admin_token();
        let response = self
            .request(
                "POST",
                "/contentelements",
                Some(json!({
                    "parent_id": parent_id,
                    "slug": title.to_lowercase().replace(' ', "-"),
                    "title": title,
                    "status": "active",
                    "tags": tags,
                })),
                Some(&token),
            )
            .await;
        response.assert_ok();
        response.data()["id"].as_i64().expect("element id")
    }

    /// Add a comment as `user_id` and return its id.
    pub async fn add_comment(
        &self,
        element_id: i64,
        user_id: i64,
        text: &str,
        parent_comment_id: i64,
    ) -> i64 {
        let token = self.user_token(user_id);
        let response = self
            .request(
                "POST",
                &format!("/contentelements/{element_id}/comments"),
                Some(json!({ "text": text, "parent_comment_id": parent_comment_id })),
                Some(&token),
            )
            .await;
        response.assert_ok();
        response.data()["id"].as_i64().expect("comment id")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.raw_request(method, path, body_str, token, &[]).await
    }

    /// Make an HTTP request with a pre-encoded body and extra headers.
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        body: String,
        token: Option<&str>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }
        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Test HTTP response
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    pub fn errors(&self) -> &Vec<Value> {
        self.body["errors"].as_array().expect("errors array")
    }

    pub fn count(&self) -> Option<u64> {
        self.body["count"].as_u64()
    }

    /// Ids of the `data` array, in order.
    pub fn ids(&self) -> Vec<i64> {
        self.data()
            .as_array()
            .expect("data array")
            .iter()
            .map(|v| v["id"].as_i64().expect("id"))
            .collect()
    }

    /// Assert a 200 with no error entries.
    pub fn assert_ok(&self) {
        assert_eq!(self.status, StatusCode::OK, "body: {}", self.body);
        assert!(self.errors().is_empty(), "unexpected errors: {}", self.body);
    }

    /// Assert a 200 carrying exactly one error entry for `field`.
    pub fn assert_domain_error(&self, field: &str, message: &str) {
        assert_eq!(self.status, StatusCode::OK, "body: {}", self.body);
        assert!(self.data().is_null(), "data should be null: {}", self.body);
        let errors = self.errors();
        assert_eq!(errors.len(), 1, "body: {}", self.body);
        assert_eq!(errors[0]["field"], field);
        assert_eq!(errors[0]["message"], message);
    }

    /// Assert a 200 carrying one error entry for `field`, any message.
    pub fn assert_error_field(&self, field: &str) {
        assert_eq!(self.status, StatusCode::OK, "body: {}", self.body);
        let errors = self.errors();
        assert_eq!(errors.len(), 1, "body: {}", self.body);
        assert_eq!(errors[0]["field"], field, "body: {}", self.body);
    }
}
