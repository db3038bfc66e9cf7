//! Integration tests for health and cross-cutting HTTP behavior.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();

    let response = app.request("GET", "/health", None, None).await;

    response.assert_ok();
    assert_eq!(response.data()["status"], "ok");
    assert_eq!(response.data()["store"], true);
    assert!(response.data()["version"].is_string());
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new();

    let response = app.request("GET", "/nonexistent", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method() {
    let app = TestApp::new();

    let response = app.request("PUT", "/contenttags", None, None).await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_token_from_other_secret_is_rejected() {
    let app = TestApp::new();
    let mut foreign = app.config.clone();
    foreign.auth.jwt_secret = "another-secret".to_string();
    let other = TestApp::with_config(foreign);

    let response = app
        .request(
            "DELETE",
            "/contentelements/1",
            None,
            Some(&other.admin_token()),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.errors()[0]["field"], "auth");
}

#[tokio::test]
async fn test_reads_need_no_token() {
    let app = TestApp::new();
    let id = app.create_element(0, "Public", "").await;

    for path in [
        "/contentelements".to_string(),
        format!("/contentelements/{id}"),
        format!("/contentelements/{id}/comments"),
        "/contenttags".to_string(),
        "/parents".to_string(),
    ] {
        let response = app.request("GET", &path, None, None).await;
        response.assert_ok();
    }
}
