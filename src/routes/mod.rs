use crate::notifier::Notifier;
use axum::extract::FromRef;
use axum::routing::{get, post, put};
use axum::Router;
use sqlx::SqlitePool;
use std::sync::Arc;

pub mod accounts;
pub mod docs;
pub mod messages;

pub const ACCOUNTS_PATH: &str = "/api/emailaccounts";

pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    SqlitePool: FromRef<S>,
    Arc<dyn Notifier>: FromRef<S>,
{
    Router::new()
        .route(
            "/api/emailaccounts",
            get(accounts::list_accounts).post(accounts::create_account),
        )
        .route(
            "/api/emailaccounts/:id",
            get(accounts::get_account).delete(accounts::delete_account),
        )
        .route(
            "/api/emailaccounts/:id/emailmessages",
            post(messages::send_message),
        )
        .route(
            "/api/emailaccounts/:id/emailmessages/:message_id",
            put(messages::update_message).delete(messages::delete_message),
        )
}

/// Location of the get-by-id endpoint for `id`.
pub fn account_location(id: i64) -> String {
    format!("{ACCOUNTS_PATH}/{id}")
}
