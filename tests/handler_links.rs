mod common;

use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test]
async fn test_create_link_success(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_app(state)).unwrap();

    common::create_test_account(&pool, "alice", "alice@x.com").await;

    let response = server
        .post("/links")
        .add_header("Authorization", common::bearer_for("alice"))
        .json(&json!({ "url": "https://example.com/very/long/path" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body: serde_json::Value = response.json();
    let code = body["code"].as_str().unwrap();
    assert_eq!(code.len(), 8);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(body["original_url"], "https://example.com/very/long/path");
    assert_eq!(body["click_count"], 0);
    assert_eq!(body["username"], "alice");
    assert_eq!(
        body["short_url"],
        format!("https://sho.rt/{}", code)
    );
}

#[sqlx::test]
async fn test_create_link_requires_auth(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/links")
        .json(&json!({ "url": "https://example.com/" }))
        .await;

    assert_eq!(response.status_code(), 401);
}

#[sqlx::test]
async fn test_create_link_rejects_invalid_url(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_app(state)).unwrap();

    common::create_test_account(&pool, "alice", "alice@x.com").await;

    let response = server
        .post("/links")
        .add_header("Authorization", common::bearer_for("alice"))
        .json(&json!({ "url": "javascript:alert(1)" }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[sqlx::test]
async fn test_create_link_same_url_twice_gets_two_codes(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_app(state)).unwrap();

    common::create_test_account(&pool, "alice", "alice@x.com").await;

    let payload = json!({ "url": "https://example.com/page" });

    let first = server
        .post("/links")
        .add_header("Authorization", common::bearer_for("alice"))
        .json(&payload)
        .await;
    let second = server
        .post("/links")
        .add_header("Authorization", common::bearer_for("alice"))
        .json(&payload)
        .await;

    let first: serde_json::Value = first.json();
    let second: serde_json::Value = second.json();
    assert_ne!(first["code"], second["code"]);
}

#[sqlx::test]
async fn test_my_links_scoped_to_owner(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_app(state)).unwrap();

    let alice = common::create_test_account(&pool, "alice", "alice@x.com").await;
    let bob = common::create_test_account(&pool, "bob", "bob@x.com").await;

    common::create_test_link(&pool, "alice001", "https://example.com/a", alice).await;
    common::create_test_link(&pool, "alice002", "https://example.com/b", alice).await;
    common::create_test_link(&pool, "bob00001", "https://example.com/c", bob).await;

    let response = server
        .get("/my-links")
        .add_header("Authorization", common::bearer_for("alice"))
        .await;

    assert_eq!(response.status_code(), 200);

    let body: serde_json::Value = response.json();
    let links = body.as_array().unwrap();
    assert_eq!(links.len(), 2);
    for link in links {
        assert_eq!(link["username"], "alice");
        assert!(link["code"].as_str().unwrap().starts_with("alice"));
    }
}

#[sqlx::test]
async fn test_my_links_empty_for_new_account(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_app(state)).unwrap();

    common::create_test_account(&pool, "fresh", "fresh@x.com").await;

    let response = server
        .get("/my-links")
        .add_header("Authorization", common::bearer_for("fresh"))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert!(body.as_array().unwrap().is_empty());
}
