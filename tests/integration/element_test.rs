//! Integration tests for content element endpoints.

use http::StatusCode;
use serde_json::json;

use crate::helpers::{ADMIN_ID, TestApp};

#[tokio::test]
async fn test_create_element_as_admin() {
    let app = TestApp::new();
    let token = app.admin_token();

    let response = app
        .request(
            "POST",
            "/contentelements",
            Some(json!({
                "slug": "news",
                "title": "News",
                "description": "Daily news",
                "kind": "page",
                "status": "draft",
                "tags": "world,local",
            })),
            Some(&token),
        )
        .await;

    response.assert_ok();
    let data = response.data();
    assert_eq!(data["id"], 1);
    assert_eq!(data["parent_id"], 0);
    assert_eq!(data["status"], "draft");
    assert_eq!(data["owner_user_id"], ADMIN_ID);
    assert!(data.get("deleted_at").is_none());
    assert!(response.body.get("count").is_none());
}

#[tokio::test]
async fn test_create_requires_token() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/contentelements",
            Some(json!({ "slug": "a", "title": "A", "status": "active" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.data().is_null());
    assert_eq!(response.errors()[0]["field"], "auth");
}

#[tokio::test]
async fn test_create_rejects_garbage_token() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/contentelements",
            Some(json!({ "slug": "a", "title": "A", "status": "active" })),
            Some("not-a-jwt"),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_requires_admin_role() {
    let app = TestApp::new();
    let token = app.user_token(5);

    let response = app
        .request(
            "POST",
            "/contentelements",
            Some(json!({ "slug": "a", "title": "A", "status": "active" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.errors().len(), 1);
}

#[tokio::test]
async fn test_create_validation_errors() {
    let app = TestApp::new();
    let token = app.admin_token();

    let response = app
        .request(
            "POST",
            "/contentelements",
            Some(json!({ "title": "No slug", "status": "active" })),
            Some(&token),
        )
        .await;
    response.assert_domain_error("slug", "Slug is required");

    let response = app
        .request(
            "POST",
            "/contentelements",
            Some(json!({ "slug": "x", "status": "active" })),
            Some(&token),
        )
        .await;
    response.assert_domain_error("title", "Title is required");

    let response = app
        .request(
            "POST",
            "/contentelements",
            Some(json!({ "slug": "x", "title": "X" })),
            Some(&token),
        )
        .await;
    response.assert_domain_error("status", "Status is required");

    let response = app
        .request(
            "POST",
            "/contentelements",
            Some(json!({ "slug": "x", "title": "X", "status": "published" })),
            Some(&token),
        )
        .await;
    response.assert_error_field("status");

    let response = app
        .request(
            "POST",
            "/contentelements",
            Some(json!({ "slug": "x", "title": "X", "status": "active", "parent_id": 99 })),
            Some(&token),
        )
        .await;
    response.assert_domain_error("parent_id", "Parent element 99 does not exist");

    // Nothing was stored.
    let listing = app.request("GET", "/contentelements?tree=-1", None, None).await;
    assert_eq!(listing.count(), Some(0));
}

#[tokio::test]
async fn test_create_malformed_json() {
    let app = TestApp::new();
    let token = app.admin_token();

    let response = app
        .raw_request(
            "POST",
            "/contentelements",
            "{\"slug\": ".to_string(),
            Some(&token),
            &[],
        )
        .await;

    response.assert_error_field("json");
}

#[tokio::test]
async fn test_client_identity_headers_are_replaced() {
    let app = TestApp::new();
    let token = app.admin_token();

    let response = app
        .raw_request(
            "POST",
            "/contentelements",
            json!({ "slug": "a", "title": "A", "status": "active" }).to_string(),
            Some(&token),
            &[("x-user-id", "99"), ("x-user-role", "admin")],
        )
        .await;

    response.assert_ok();
    assert_eq!(response.data()["owner_user_id"], ADMIN_ID);
}

#[tokio::test]
async fn test_list_defaults_to_roots_newest_first() {
    let app = TestApp::new();
    for i in 1..=6 {
        app.create_element(0, &format!("Root {i}"), "").await;
    }
    app.create_element(1, "Child", "").await;

    let response = app.request("GET", "/contentelements", None, None).await;

    response.assert_ok();
    assert_eq!(response.ids(), vec![6, 5, 4, 3, 2]);
    assert_eq!(response.count(), Some(6));

    let root_one = app.request("GET", "/contentelements?sort=id&limit=1", None, None).await;
    assert_eq!(root_one.ids(), vec![1]);
    assert_eq!(root_one.data()[0]["elements"][0]["title"], "Child");
}

#[tokio::test]
async fn test_list_sort_and_paging() {
    let app = TestApp::new();
    for i in 1..=6 {
        app.create_element(0, &format!("Root {i}"), "").await;
    }

    let response = app
        .request("GET", "/contentelements?sort=id&limit=1&offset=1", None, None)
        .await;
    assert_eq!(response.ids(), vec![2]);
    assert_eq!(response.count(), Some(6));

    let response = app
        .request("GET", "/contentelements?sort=-id&limit=10", None, None)
        .await;
    assert_eq!(response.ids(), vec![6, 5, 4, 3, 2, 1]);

    let response = app
        .request("GET", "/contentelements?sort=popularity&limit=2", None, None)
        .await;
    assert_eq!(response.ids(), vec![6, 5]);

    let response = app
        .request("GET", "/contentelements?sort=-title&limit=2", None, None)
        .await;
    assert_eq!(response.ids(), vec![6, 5]);
}

#[tokio::test]
async fn test_list_text_filters() {
    let app = TestApp::new();
    app.create_element(0, "Weather", "rain,sun").await;
    app.create_element(0, "Rainbow", "").await;
    app.create_element(0, "Sports", "football").await;
    let token = app.admin_token();
    app.request(
        "POST",
        "/contentelements",
        Some(json!({
            "slug": "forecast",
            "title": "Forecast",
            "description": "Heavy rain expected",
            "status": "active",
        })),
        Some(&token),
    )
    .await
    .assert_ok();

    let response = app
        .request("GET", "/contentelements?all=RAIN&sort=id", None, None)
        .await;
    assert_eq!(response.ids(), vec![1, 2, 4]);

    let response = app
        .request("GET", "/contentelements?description=heavy", None, None)
        .await;
    assert_eq!(response.ids(), vec![4]);

    let response = app
        .request("GET", "/contentelements?title=rain", None, None)
        .await;
    assert_eq!(response.ids(), vec![2]);

    let response = app
        .request("GET", "/contentelements?tags=foot&status=active", None, None)
        .await;
    assert_eq!(response.ids(), vec![3]);

    let response = app
        .request("GET", "/contentelements?status=draft", None, None)
        .await;
    assert_eq!(response.count(), Some(0));
}

#[tokio::test]
async fn test_list_parent_and_tree_modes() {
    let app = TestApp::new();
    let news = app.create_element(0, "News", "").await;
    let local = app.create_element(news, "Local", "").await;
    app.create_element(local, "City", "").await;

    let response = app
        .request("GET", &format!("/contentelements?parent={news}"), None, None)
        .await;
    assert_eq!(response.ids(), vec![local]);
    assert_eq!(response.data()[0]["elements"][0]["title"], "City");

    let response = app
        .request("GET", "/contentelements?tree=-1&sort=id", None, None)
        .await;
    assert_eq!(response.ids(), vec![1, 2, 3]);
    assert!(response.data()[0]["elements"].as_array().unwrap().is_empty());

    let response = app
        .request("GET", "/contentelements?tree=0", None, None)
        .await;
    assert_eq!(response.ids(), vec![news]);
    assert!(response.data()[0]["elements"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_rejects_malformed_numbers() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/contentelements?limit=ten", None, None)
        .await;
    response.assert_error_field("limit");

    let response = app
        .request("GET", "/contentelements?parent=abc", None, None)
        .await;
    response.assert_error_field("parent");

    let response = app
        .request("GET", "/contentelements?limit=9223372036854775808", None, None)
        .await;
    response.assert_error_field("limit");

    let response = app
        .request("GET", "/contentelements?offset=18446744073709551615", None, None)
        .await;
    response.assert_error_field("offset");
}

#[tokio::test]
async fn test_get_element_with_children_and_comments() {
    let app = TestApp::new();
    let news = app.create_element(0, "News", "").await;
    app.create_element(news, "Local", "").await;
    let top = app.add_comment(news, 7, "First!", 0).await;
    app.add_comment(news, 8, "Reply", top).await;

    let response = app
        .request("GET", &format!("/contentelements/{news}"), None, None)
        .await;

    response.assert_ok();
    let data = response.data();
    assert_eq!(data["title"], "News");
    assert_eq!(data["elements"].as_array().unwrap().len(), 1);
    assert_eq!(data["comments"].as_array().unwrap().len(), 1);
    assert_eq!(data["comments"][0]["replies"][0]["text"], "Reply");
}

#[tokio::test]
async fn test_get_missing_element() {
    let app = TestApp::new();

    let response = app.request("GET", "/contentelements/42", None, None).await;
    response.assert_domain_error("ID", "Contentelement not found");

    let response = app.request("GET", "/contentelements/abc", None, None).await;
    response.assert_error_field("ID");
}

#[tokio::test]
async fn test_update_by_owner() {
    let app = TestApp::new();
    let id = app.create_element(0, "Draft title", "x").await;
    let token = app.admin_token();

    let response = app
        .request(
            "PATCH",
            &format!("/contentelements/{id}"),
            Some(json!({ "title": "Final title", "status": "suspend" })),
            Some(&token),
        )
        .await;

    response.assert_ok();
    assert_eq!(response.data()["title"], "Final title");
    assert_eq!(response.data()["status"], "suspend");
    assert_eq!(response.data()["tags"], "x");
}

#[tokio::test]
async fn test_update_by_non_owner_is_rejected() {
    let app = TestApp::new();
    let id = app.create_element(0, "Mine", "").await;
    let other_admin = app.token(2, contenthub_entity::user::UserRole::Admin);

    let response = app
        .request(
            "PATCH",
            &format!("/contentelements/{id}"),
            Some(json!({ "title": "Stolen" })),
            Some(&other_admin),
        )
        .await;
    response.assert_domain_error("ID", "Only owner can change element");

    let unchanged = app
        .request("GET", &format!("/contentelements/{id}"), None, None)
        .await;
    assert_eq!(unchanged.data()["title"], "Mine");
}

#[tokio::test]
async fn test_update_rejects_self_parent() {
    let app = TestApp::new();
    let id = app.create_element(0, "Loop", "").await;
    let token = app.admin_token();

    let response = app
        .request(
            "PATCH",
            &format!("/contentelements/{id}"),
            Some(json!({ "parent_id": id })),
            Some(&token),
        )
        .await;
    response.assert_error_field("parent_id");
}

#[tokio::test]
async fn test_delete_id_zero_mutates_nothing() {
    let app = TestApp::new();
    app.create_element(0, "Keep", "").await;
    let token = app.admin_token();

    let response = app
        .request("DELETE", "/contentelements/0", None, Some(&token))
        .await;
    response.assert_domain_error("ID", "Contentelement not found");

    let listing = app.request("GET", "/contentelements", None, None).await;
    assert_eq!(listing.count(), Some(1));
}

#[tokio::test]
async fn test_soft_delete_hides_element() {
    let app = TestApp::new();
    let id = app.create_element(0, "Old", "").await;
    let token = app.admin_token();

    let response = app
        .request("DELETE", &format!("/contentelements/{id}"), None, Some(&token))
        .await;
    response.assert_ok();
    assert_eq!(response.data()["id"], id);

    let response = app
        .request("GET", &format!("/contentelements/{id}"), None, None)
        .await;
    response.assert_domain_error("ID", "Contentelement not found");

    let response = app
        .request("DELETE", &format!("/contentelements/{id}"), None, Some(&token))
        .await;
    response.assert_domain_error("ID", "Contentelement not found");
}

#[tokio::test]
async fn test_hard_delete_in_test_mode() {
    let app = TestApp::in_test_mode();
    let id = app.create_element(0, "Temp", "").await;
    let token = app.admin_token();

    let response = app
        .request("DELETE", &format!("/contentelements/{id}"), None, Some(&token))
        .await;
    response.assert_ok();

    let listing = app.request("GET", "/contentelements?tree=-1", None, None).await;
    assert_eq!(listing.count(), Some(0));
}

#[tokio::test]
async fn test_delete_requires_admin() {
    let app = TestApp::new();
    let id = app.create_element(0, "Guarded", "").await;
    let token = app.user_token(3);

    let response = app
        .request("DELETE", &format!("/contentelements/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
