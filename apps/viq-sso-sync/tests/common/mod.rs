//! Shared fixtures for integration tests: a wiremock server standing in
//! for the platform API and a temporary directory holding the sheet.

#![allow(dead_code)]

use std::path::PathBuf;

use serde_json::{json, Value};
use tempfile::TempDir;
use viq_sso_sync::api::ApiClient;
use viq_sso_sync::config::Config;
use viq_sso_sync::models::UserRecord;
use viq_sso_sync::store::SheetStore;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "test-token-abc123";
pub const TEST_USERNAME: &str = "admin@example.com";
pub const TEST_PASSWORD: &str = "correct-horse";

pub struct TestContext {
    pub server: MockServer,
    pub dir: TempDir,
    pub config: Config,
}

impl TestContext {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = Config {
            api_url: server.uri(),
            timeout_secs: 5,
            sheet_file: dir.path().join("sheet.csv"),
            page_size: 2,
            max_pages: 50,
        };
        Self {
            server,
            dir,
            config,
        }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    pub fn sheet_path(&self) -> PathBuf {
        self.config.sheet_file.clone()
    }

    pub fn store(&self) -> SheetStore {
        SheetStore::new(self.sheet_path())
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.config.clone()).expect("Failed to create client")
    }

    /// Client that already passed the mocked login
    pub async fn logged_in_client(&self) -> ApiClient {
        self.mock_login_success().await;
        let mut client = self.client();
        client
            .authenticate(TEST_USERNAME, TEST_PASSWORD)
            .await
            .expect("Login failed");
        client
    }

    pub async fn mock_login_success(&self) {
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(json!({
                "username": TEST_USERNAME,
                "password": TEST_PASSWORD
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": TEST_TOKEN,
                "token_type": "Bearer",
                "expires_in": 86400
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_login_status(&self, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_identity(&self, name: &str, data_center: &str) {
        Mock::given(method("GET"))
            .and(path("/account/home"))
            .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 9001,
                "name": name,
                "data_center": data_center
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_ownership(&self, vhm_id: &str, owner_id: i64) {
        Mock::given(method("GET"))
            .and(path("/account/viq"))
            .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "vhm_id": vhm_id,
                "owner_id": owner_id
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount one page of a listing endpoint
    pub async fn mock_page(&self, endpoint: &str, page: u32, total_pages: u32, data: Value) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .and(query_param("page", page.to_string().as_str()))
            .and(query_param("limit", self.config.page_size.to_string().as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": page,
                "count": data.as_array().map(|a| a.len()).unwrap_or(0),
                "total_pages": total_pages,
                "total_count": 0,
                "data": data
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mount a successful creation for one login name
    pub async fn mock_create_success(&self, login_name: &str, user_role: &str) {
        Mock::given(method("POST"))
            .and(path("/users/external"))
            .and(body_json(json!({
                "login_name": login_name,
                "user_role": user_role,
                "org_id": 0,
                "location_ids": []
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 77,
                "login_name": login_name
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_create_failure(&self, login_name: &str, status: u16, message: &str) {
        Mock::given(method("POST"))
            .and(path("/users/external"))
            .and(body_json(json!({
                "login_name": login_name,
                "user_role": "OPERATOR",
                "org_id": 0,
                "location_ids": []
            })))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "error_code": "INVALID_ARGUMENT",
                "error_message": message
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub fn write_sheet(&self, records: &[UserRecord]) {
        self.store()
            .write_replace(records)
            .expect("Failed to write sheet");
    }
}

/// API user row as returned by `GET /users`
pub fn api_user(id: i64, login_name: &str, role: &str) -> Value {
    json!({
        "id": id,
        "login_name": login_name,
        "first_name": "Test",
        "last_name": format!("User{id}"),
        "display_name": null,
        "user_role": role,
        "locale": "en_US"
    })
}

/// External user row as returned by `GET /users/external`
pub fn api_external_user(id: i64, grantee_id: i64, login_name: &str, role: &str) -> Value {
    json!({
        "id": id,
        "grantee_id": grantee_id,
        "login_name": login_name,
        "user_role": role,
        "org_id": 0
    })
}

pub fn sheet_record(id: i64, login_name: &str, role: &str) -> UserRecord {
    UserRecord {
        home_instance_id: id,
        login_name: login_name.to_string(),
        first_name: "Test".to_string(),
        last_name: format!("User{id}"),
        display_name: String::new(),
        user_role: role.to_string(),
        vhm_id: "VHM-SRC".to_string(),
        owner_id: "4242".to_string(),
        instance_name: "Source VIQ".to_string(),
    }
}
