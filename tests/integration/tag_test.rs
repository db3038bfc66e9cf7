//! Integration tests for the tag index.

use crate::helpers::TestApp;

fn names_and_weights(response: &crate::helpers::TestResponse) -> Vec<(String, i64)> {
    response
        .data()
        .as_array()
        .unwrap()
        .iter()
        .map(|t| {
            (
                t["name"].as_str().unwrap().to_string(),
                t["weight"].as_i64().unwrap(),
            )
        })
        .collect()
}

#[tokio::test]
async fn test_tags_accumulate_per_occurrence() {
    let app = TestApp::new();
    app.create_element(0, "First", "a,b,a").await;

    let response = app.request("GET", "/contenttags", None, None).await;

    response.assert_ok();
    assert_eq!(response.count(), Some(2));
    assert_eq!(
        names_and_weights(&response),
        vec![("a".to_string(), 2), ("b".to_string(), 1)]
    );
}

#[tokio::test]
async fn test_tags_sorted_by_weight() {
    let app = TestApp::new();
    app.create_element(0, "First", "rare,common").await;
    app.create_element(0, "Second", "common").await;
    app.create_element(0, "Third", "common,mid").await;
    app.create_element(0, "Fourth", "mid").await;

    let response = app
        .request("GET", "/contenttags?sort=-weight", None, None)
        .await;
    assert_eq!(
        names_and_weights(&response),
        vec![
            ("common".to_string(), 3),
            ("mid".to_string(), 2),
            ("rare".to_string(), 1),
        ]
    );

    let response = app.request("GET", "/contenttags?sort=name", None, None).await;
    let names: Vec<String> = names_and_weights(&response)
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, vec!["common", "mid", "rare"]);

    // Unknown keys fall back to ascending id.
    let response = app.request("GET", "/contenttags?sort=bogus", None, None).await;
    assert_eq!(response.ids(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_empty_tags_yield_empty_name() {
    let app = TestApp::new();
    app.create_element(0, "Untagged", "").await;
    app.create_element(0, "Also untagged", "").await;

    let response = app.request("GET", "/contenttags", None, None).await;
    assert_eq!(names_and_weights(&response), vec![(String::new(), 2)]);
}

#[tokio::test]
async fn test_tags_survive_element_delete() {
    let app = TestApp::new();
    let id = app.create_element(0, "Short lived", "keep").await;
    let token = app.admin_token();

    app.request("DELETE", &format!("/contentelements/{id}"), None, Some(&token))
        .await
        .assert_ok();

    let response = app.request("GET", "/contenttags", None, None).await;
    assert_eq!(names_and_weights(&response), vec![("keep".to_string(), 1)]);
}
