//! Integration tests for the import workflow
//!
//! Drives `commands::import::run` against a mock target instance with a
//! sheet on disk, covering reconciliation and per-item creation failures.

mod common;

use common::{api_external_user, sheet_record, TestContext};
use serde_json::json;
use viq_sso_sync::batch::BatchItemStatus;
use viq_sso_sync::commands::{import, login};
use viq_sso_sync::error::CliError;
use viq_sso_sync::interactive::Credentials;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_matched_and_local_users_need_no_action() {
    let ctx = TestContext::new().await;
    ctx.write_sheet(&[
        sheet_record(1, "a@saml.login", "ADMINISTRATOR"),
        sheet_record(2, "b@local.example", "OPERATOR"),
    ]);
    ctx.mock_identity("Target VIQ", "US_WEST").await;
    ctx.mock_page(
        "/users/external",
        1,
        1,
        json!([api_external_user(900, 1, "a@saml.login", "ADMINISTRATOR")]),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/users/external"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.server)
        .await;
    let client = ctx.logged_in_client().await;

    let outcome = import::run(&client, &ctx.store()).await.unwrap();

    assert!(matches!(outcome, import::ImportOutcome::NothingToDo(_)));
    let worklist = outcome.worklist();
    assert!(worklist.is_empty());
    assert_eq!(worklist.already_external, 1);
    assert_eq!(worklist.skipped_local, 1);
}

#[tokio::test]
async fn test_missing_sso_user_is_created() {
    let ctx = TestContext::new().await;
    ctx.write_sheet(&[sheet_record(3, "c@saml.login", "OPERATOR")]);
    ctx.mock_identity("Target VIQ", "US_WEST").await;
    ctx.mock_page("/users/external", 1, 0, json!([])).await;
    ctx.mock_create_success("c@saml.login", "OPERATOR").await;
    let client = ctx.logged_in_client().await;

    let outcome = import::run(&client, &ctx.store()).await.unwrap();

    match outcome {
        import::ImportOutcome::Created { worklist, result } => {
            assert_eq!(worklist.len(), 1);
            assert_eq!(result.success_count, 1);
            assert!(result.all_succeeded());
            assert_eq!(result.items[0].name, "c@saml.login");
        }
        other => panic!("Expected Created, got {other:?}"),
    }
}

#[tokio::test]
async fn test_creation_failure_does_not_stop_batch() {
    let ctx = TestContext::new().await;
    ctx.write_sheet(&[
        sheet_record(10, "first@saml.login", "OPERATOR"),
        sheet_record(11, "dup@saml.login", "OPERATOR"),
        sheet_record(12, "third@saml.login", "OPERATOR"),
    ]);
    ctx.mock_identity("Target VIQ", "US_WEST").await;
    ctx.mock_page("/users/external", 1, 1, json!([])).await;
    ctx.mock_create_success("first@saml.login", "OPERATOR").await;
    ctx.mock_create_failure("dup@saml.login", 400, "Login name already exists")
        .await;
    ctx.mock_create_success("third@saml.login", "OPERATOR").await;
    let client = ctx.logged_in_client().await;

    let outcome = import::run(&client, &ctx.store()).await.unwrap();

    let import::ImportOutcome::Created { result, .. } = outcome else {
        panic!("Expected the batch to run");
    };
    assert_eq!(result.total, 3);
    assert_eq!(result.success_count, 2);
    assert_eq!(result.failure_count, 1);

    let names: Vec<&str> = result.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["first@saml.login", "dup@saml.login", "third@saml.login"]);

    let failed = &result.items[1];
    assert_eq!(failed.status, BatchItemStatus::Failed);
    let detail = failed.error.as_deref().unwrap();
    assert!(detail.contains("HTTP Status Code: 400"));
    assert!(detail.contains("Login name already exists"));
}

#[tokio::test]
async fn test_rerun_after_success_is_idempotent() {
    let ctx = TestContext::new().await;
    ctx.write_sheet(&[
        sheet_record(3, "c@saml.login", "OPERATOR"),
        sheet_record(4, "d@saml.login", "MONITOR"),
    ]);
    ctx.mock_identity("Target VIQ", "US_WEST").await;
    // The target now lists both users as external
    ctx.mock_page(
        "/users/external",
        1,
        1,
        json!([
            api_external_user(501, 3, "c@saml.login", "OPERATOR"),
            api_external_user(502, 4, "d@saml.login", "MONITOR")
        ]),
    )
    .await;
    let client = ctx.logged_in_client().await;

    let outcome = import::run(&client, &ctx.store()).await.unwrap();
    assert!(outcome.worklist().is_empty());
}

#[tokio::test]
async fn test_import_without_sheet_is_fatal() {
    let ctx = TestContext::new().await;
    let client = ctx.logged_in_client().await;

    let err = import::run(&client, &ctx.store()).await.unwrap_err();
    assert!(matches!(err, CliError::SheetMissing(_)));
    assert!(err.is_fatal());
}

#[tokio::test]
async fn test_external_fetch_failure_creates_nothing() {
    let ctx = TestContext::new().await;
    ctx.write_sheet(&[sheet_record(3, "c@saml.login", "OPERATOR")]);
    ctx.mock_identity("Target VIQ", "US_WEST").await;
    Mock::given(method("GET"))
        .and(path("/users/external"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&ctx.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users/external"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.server)
        .await;
    let client = ctx.logged_in_client().await;

    let err = import::run(&client, &ctx.store()).await.unwrap_err();
    assert!(matches!(err, CliError::Api { status: 502, .. }));
}

#[tokio::test]
async fn test_login_rejects_blank_credentials_before_any_request() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let err = login(&ctx.config, &Credentials::new("", "secret"))
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::Validation(_)));
    assert!(!err.is_fatal());
}

#[tokio::test]
async fn test_login_helper_returns_authenticated_client() {
    let ctx = TestContext::new().await;
    ctx.mock_login_success().await;

    let client = login(
        &ctx.config,
        &Credentials::new(common::TEST_USERNAME, common::TEST_PASSWORD),
    )
    .await
    .unwrap();
    assert!(client.is_authenticated());
}
