//! Integration tests for comment endpoints.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_add_comment_as_user() {
    let app = TestApp::new();
    let element = app.create_element(0, "News", "").await;
    let token = app.user_token(7);

    let response = app
        .request(
            "POST",
            &format!("/contentelements/{element}/comments"),
            Some(json!({ "text": "Nice article" })),
            Some(&token),
        )
        .await;

    response.assert_ok();
    let data = response.data();
    assert_eq!(data["text"], "Nice article");
    assert_eq!(data["owner_user_id"], 7);
    assert_eq!(data["parent_comment_id"], 0);
    assert_eq!(data["content_element_id"], element);
}

#[tokio::test]
async fn test_add_comment_requires_token() {
    let app = TestApp::new();
    let element = app.create_element(0, "News", "").await;

    let response = app
        .request(
            "POST",
            &format!("/contentelements/{element}/comments"),
            Some(json!({ "text": "Anonymous" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_add_comment_validation() {
    let app = TestApp::new();
    let element = app.create_element(0, "News", "").await;
    let token = app.user_token(7);

    let response = app
        .request(
            "POST",
            &format!("/contentelements/{element}/comments"),
            Some(json!({ "text": "" })),
            Some(&token),
        )
        .await;
    response.assert_domain_error("text", "Text is required");

    let response = app
        .request(
            "POST",
            "/contentelements/99/comments",
            Some(json!({ "text": "Lost" })),
            Some(&token),
        )
        .await;
    response.assert_domain_error("ID", "Contentelement not found");
}

#[tokio::test]
async fn test_reply_must_target_same_element() {
    let app = TestApp::new();
    let first = app.create_element(0, "First", "").await;
    let second = app.create_element(0, "Second", "").await;
    let foreign = app.add_comment(first, 7, "On first", 0).await;
    let token = app.user_token(7);

    let response = app
        .request(
            "POST",
            &format!("/contentelements/{second}/comments"),
            Some(json!({ "text": "Misplaced", "parent_comment_id": foreign })),
            Some(&token),
        )
        .await;
    response.assert_error_field("parent_comment_id");

    let response = app
        .request(
            "POST",
            &format!("/contentelements/{second}/comments"),
            Some(json!({ "text": "Dangling", "parent_comment_id": 500 })),
            Some(&token),
        )
        .await;
    response.assert_error_field("parent_comment_id");
}

#[tokio::test]
async fn test_list_top_level_with_replies() {
    let app = TestApp::new();
    let element = app.create_element(0, "News", "").await;
    let first = app.add_comment(element, 7, "First", 0).await;
    let second = app.add_comment(element, 8, "Second", 0).await;
    app.add_comment(element, 8, "Reply one", first).await;
    app.add_comment(element, 7, "Reply two", first).await;

    let response = app
        .request(
            "GET",
            &format!("/contentelements/{element}/comments"),
            None,
            None,
        )
        .await;

    response.assert_ok();
    assert_eq!(response.ids(), vec![first, second]);
    assert_eq!(response.count(), Some(2));

    let replies = response.data()[0]["replies"].as_array().unwrap();
    let texts: Vec<&str> = replies.iter().map(|r| r["text"].as_str().unwrap()).collect();
    assert_eq!(texts, vec!["Reply one", "Reply two"]);
    assert!(response.data()[1]["replies"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_comments_paging() {
    let app = TestApp::new();
    let element = app.create_element(0, "News", "").await;
    for i in 1..=3 {
        app.add_comment(element, 7, &format!("Comment {i}"), 0).await;
    }

    let response = app
        .request(
            "GET",
            &format!("/contentelements/{element}/comments?limit=1&offset=1"),
            None,
            None,
        )
        .await;
    assert_eq!(response.ids(), vec![2]);
    assert_eq!(response.count(), Some(3));

    let response = app
        .request(
            "GET",
            &format!("/contentelements/{element}/comments?offset=x"),
            None,
            None,
        )
        .await;
    response.assert_error_field("offset");

    let response = app
        .request(
            "GET",
            &format!("/contentelements/{element}/comments?limit=9223372036854775808"),
            None,
            None,
        )
        .await;
    response.assert_error_field("limit");
}

#[tokio::test]
async fn test_update_by_author() {
    let app = TestApp::new();
    let element = app.create_element(0, "News", "").await;
    let comment = app.add_comment(element, 7, "Typo", 0).await;
    let token = app.user_token(7);

    let response = app
        .request(
            "PATCH",
            &format!("/contentelements/{element}/comments/{comment}"),
            Some(json!({ "text": "Fixed" })),
            Some(&token),
        )
        .await;

    response.assert_ok();
    assert_eq!(response.data()["text"], "Fixed");
    assert_eq!(response.data()["owner_user_id"], 7);
}

#[tokio::test]
async fn test_update_by_other_user_is_rejected() {
    let app = TestApp::new();
    let element = app.create_element(0, "News", "").await;
    let comment = app.add_comment(element, 7, "Original", 0).await;
    let intruder = app.user_token(8);

    let response = app
        .request(
            "PATCH",
            &format!("/contentelements/{element}/comments/{comment}"),
            Some(json!({ "text": "Hijacked" })),
            Some(&intruder),
        )
        .await;
    response.assert_domain_error("ID", "Only owner can change element");

    let listing = app
        .request(
            "GET",
            &format!("/contentelements/{element}/comments"),
            None,
            None,
        )
        .await;
    assert_eq!(listing.data()[0]["text"], "Original");
}

#[tokio::test]
async fn test_comment_must_belong_to_element() {
    let app = TestApp::new();
    let first = app.create_element(0, "First", "").await;
    let second = app.create_element(0, "Second", "").await;
    let comment = app.add_comment(first, 7, "Mine", 0).await;
    let token = app.user_token(7);

    let response = app
        .request(
            "PATCH",
            &format!("/contentelements/{second}/comments/{comment}"),
            Some(json!({ "text": "Moved" })),
            Some(&token),
        )
        .await;
    response.assert_domain_error("ID", "Comment not found");

    let response = app
        .request(
            "DELETE",
            &format!("/contentelements/{first}/comments/abc"),
            None,
            Some(&token),
        )
        .await;
    response.assert_error_field("CID");
}

#[tokio::test]
async fn test_delete_by_author() {
    let app = TestApp::new();
    let element = app.create_element(0, "News", "").await;
    let keep = app.add_comment(element, 8, "Keep", 0).await;
    let drop = app.add_comment(element, 7, "Drop", 0).await;
    let token = app.user_token(7);

    let response = app
        .request(
            "DELETE",
            &format!("/contentelements/{element}/comments/{drop}"),
            None,
            Some(&token),
        )
        .await;
    response.assert_ok();
    assert_eq!(response.data()["id"], drop);

    let listing = app
        .request(
            "GET",
            &format!("/contentelements/{element}/comments"),
            None,
            None,
        )
        .await;
    assert_eq!(listing.ids(), vec![keep]);

    let response = app
        .request(
            "DELETE",
            &format!("/contentelements/{element}/comments/{drop}"),
            None,
            Some(&token),
        )
        .await;
    response.assert_domain_error("ID", "Comment not found");
}

#[tokio::test]
async fn test_delete_by_other_user_is_rejected() {
    let app = TestApp::new();
    let element = app.create_element(0, "News", "").await;
    let comment = app.add_comment(element, 7, "Stay", 0).await;
    let intruder = app.user_token(9);

    let response = app
        .request(
            "DELETE",
            &format!("/contentelements/{element}/comments/{comment}"),
            None,
            Some(&intruder),
        )
        .await;
    response.assert_domain_error("ID", "Only owner can change element");
}

#[tokio::test]
async fn test_admin_may_comment() {
    let app = TestApp::new();
    let element = app.create_element(0, "News", "").await;
    let token = app.admin_token();

    let response = app
        .request(
            "POST",
            &format!("/contentelements/{element}/comments"),
            Some(json!({ "text": "Moderator note" })),
            Some(&token),
        )
        .await;
    response.assert_ok();
}
