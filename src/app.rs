use crate::notifier::Notifier;
use crate::routes;
use crate::telemetry::http_trace_layer;
use axum::extract::FromRef;
use axum::{routing::get, Router};
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(pool: SqlitePool, notifier: Arc<dyn Notifier>) -> Self {
        Self { pool, notifier }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Arc<dyn Notifier> {
    fn from_ref(state: &AppState) -> Self {
        state.notifier.clone()
    }
}

/// Full router: API routes, liveness probe, and the OpenAPI document when
/// `expose_docs` is set.
pub fn build_router(state: AppState, expose_docs: bool) -> Router {
    let mut app: Router<AppState> = Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .merge(routes::routes());

    if expose_docs {
        app = app.merge(routes::docs::router());
    }

    app.layer(http_trace_layer()).with_state(state)
}
