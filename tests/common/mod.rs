#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use email_service::models::{EmailAccountRow, EmailMessage};
use email_service::notifier::{NoopNotifier, Notifier};
use email_service::{build_router, db, AppState};
use serde_json::Value;
use sqlx::SqlitePool;
use std::sync::{Arc, Mutex};
use tower::ServiceExt; // for `oneshot`

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is json")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Records every notification it receives.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<(String, String)>>,
}

#[async_trait::async_trait]
impl Notifier for RecordingNotifier {
    async fn message_sent(&self, account: &EmailAccountRow, message: &EmailMessage) -> anyhow::Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((account.address.clone(), message.content.clone()));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Fails every notification.
pub struct FailingNotifier;

#[async_trait::async_trait]
impl Notifier for FailingNotifier {
    async fn message_sent(&self, _account: &EmailAccountRow, _message: &EmailMessage) -> anyhow::Result<()> {
        anyhow::bail!("relay unavailable")
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// Seeded in-memory store behind the full router.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(Arc::new(NoopNotifier), true).await
}

pub async fn spawn_app_with(notifier: Arc<dyn Notifier>, expose_docs: bool) -> TestApp {
    let pool = db::connect_in_memory().await.unwrap();
    db::prepare(&pool).await.unwrap();
    let router = build_router(AppState::new(pool.clone(), notifier), expose_docs);
    TestApp { router, pool }
}

impl TestApp {
    pub async fn request(&self, method: Method, uri: &str, body: Option<(&str, String)>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some((content_type, payload)) => {
                builder = builder.header(header::CONTENT_TYPE, content_type);
                Body::from(payload)
            }
            None => Body::empty(),
        };
        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec();
        TestResponse { status, headers, body }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(("application/json", body.to_string())))
            .await
    }

    pub async fn put_json(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(("application/json", body.to_string())))
            .await
    }

    pub async fn post_text(&self, uri: &str, body: &str) -> TestResponse {
        self.request(Method::POST, uri, Some(("text/plain", body.to_string())))
            .await
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}
