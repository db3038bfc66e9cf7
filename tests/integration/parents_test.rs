//! Integration tests for the flattened parent listing.

use serde_json::json;

use crate::helpers::TestApp;

fn names(response: &crate::helpers::TestResponse) -> Vec<String> {
    response
        .data()
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_parents_pre_order_with_indentation() {
    let app = TestApp::new();
    let news = app.create_element(0, "News", "").await;
    let local = app.create_element(news, "Local", "").await;
    app.create_element(local, "City", "").await;
    app.create_element(news, "World", "").await;
    app.create_element(0, "Sports", "").await;

    let response = app.request("GET", "/parents", None, None).await;

    response.assert_ok();
    assert!(response.body.get("count").is_none());
    assert_eq!(
        names(&response),
        vec!["News0", "-- Local1", "---- City2", "-- World1", "Sports0"]
    );
    assert_eq!(response.ids(), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_parents_skip_inactive_roots() {
    let app = TestApp::new();
    let token = app.admin_token();
    app.create_element(0, "Live", "").await;

    let response = app
        .request(
            "POST",
            "/contentelements",
            Some(json!({ "slug": "hidden", "title": "Hidden", "status": "draft" })),
            Some(&token),
        )
        .await;
    let hidden = response.data()["id"].as_i64().unwrap();
    app.create_element(hidden, "Under hidden", "").await;

    let response = app.request("GET", "/parents", None, None).await;
    assert_eq!(names(&response), vec!["Live0"]);
}

#[tokio::test]
async fn test_parents_skip_deleted_branches() {
    let app = TestApp::new();
    let token = app.admin_token();
    let news = app.create_element(0, "News", "").await;
    let local = app.create_element(news, "Local", "").await;
    app.create_element(local, "City", "").await;

    app.request(
        "DELETE",
        &format!("/contentelements/{local}"),
        None,
        Some(&token),
    )
    .await
    .assert_ok();

    let response = app.request("GET", "/parents", None, None).await;
    assert_eq!(names(&response), vec!["News0"]);
}

#[tokio::test]
async fn test_parents_empty() {
    let app = TestApp::new();

    let response = app.request("GET", "/parents", None, None).await;
    response.assert_ok();
    assert!(response.data().as_array().unwrap().is_empty());
}
