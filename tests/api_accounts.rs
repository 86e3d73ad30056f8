mod common;

use axum::http::{header, StatusCode};
use common::spawn_app;
use serde_json::json;

#[tokio::test]
async fn lists_seeded_accounts() {
    let app = spawn_app().await;

    let res = app.get("/api/emailaccounts").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.json(),
        json!([
            { "id": 1, "address": "mock1@example.com", "sentEmails": [] },
            { "id": 2, "address": "mock2@example.com", "sentEmails": [] }
        ])
    );
}

#[tokio::test]
async fn create_fetch_delete_lifecycle() {
    let app = spawn_app().await;

    let res = app
        .post_json("/api/emailaccounts", json!({ "address": "mock3@example.com" }))
        .await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.json(), json!({ "id": 3, "address": "mock3@example.com", "sentEmails": [] }));
    assert_eq!(res.headers[header::LOCATION], "/api/emailaccounts/3");

    let res = app.get("/api/emailaccounts/3").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["address"], "mock3@example.com");
    assert_eq!(res.json()["sentEmails"], json!([]));

    let res = app.delete("/api/emailaccounts/3").await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert!(res.body.is_empty());

    let res = app.get("/api/emailaccounts/3").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn created_ids_are_unique() {
    let app = spawn_app().await;
    let mut ids = Vec::new();
    for address in ["a@example.com", "b@example.com", "c@example.org"] {
        let res = app.post_json("/api/emailaccounts", json!({ "address": address })).await;
        assert_eq!(res.status, StatusCode::CREATED);
        ids.push(res.json()["id"].as_i64().unwrap());
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
    assert!(ids.iter().all(|id| *id > 2));
}

#[tokio::test]
async fn rejects_malformed_addresses_without_persisting() {
    let app = spawn_app().await;

    for bad in ["not-an-email", "", "Someone <someone@example.com>", " x@example.com"] {
        let res = app.post_json("/api/emailaccounts", json!({ "address": bad })).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "{bad:?}");
        assert_eq!(res.text(), "Invalid email format.");
    }

    let res = app.post_json("/api/emailaccounts", json!({})).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    assert_eq!(app.count("email_accounts").await, 2);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = spawn_app().await;
    let res = app
        .request(
            axum::http::Method::POST,
            "/api/emailaccounts",
            Some(("application/json", "{ not json".to_string())),
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.count("email_accounts").await, 2);
}

#[tokio::test]
async fn missing_account_is_not_found() {
    let app = spawn_app().await;

    assert_eq!(app.get("/api/emailaccounts/99").await.status, StatusCode::NOT_FOUND);

    let res = app.delete("/api/emailaccounts/99").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(app.count("email_accounts").await, 2);
}

#[tokio::test]
async fn deleting_an_account_removes_its_messages() {
    let app = spawn_app().await;
    let res = app.post_text("/api/emailaccounts/1/emailmessages", "hello").await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(app.count("email_messages").await, 1);

    assert_eq!(app.delete("/api/emailaccounts/1").await.status, StatusCode::NO_CONTENT);
    assert_eq!(app.count("email_messages").await, 0);
}

#[tokio::test]
async fn health_probe_answers() {
    let app = spawn_app().await;
    let res = app.get("/healthz").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.text(), "ok");
}
