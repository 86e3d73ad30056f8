//! Message endpoints, scoped under an account id.

use crate::error::{ApiError, ApiResult};
use crate::models::{EmailAccountRow, EmailMessage, UpdateEmailMessage};
use crate::notifier::Notifier;
use crate::services::{account_service, message_service};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use sqlx::SqlitePool;
use std::sync::Arc;

use super::account_location;

/// A JSON string body (`"hello"`) is unwrapped; anything else is taken verbatim.
pub fn parse_content(body: String) -> String {
    serde_json::from_str::<String>(&body).unwrap_or(body)
}

/// POST /api/emailaccounts/:id/emailmessages
pub async fn send_message(
    State(pool): State<SqlitePool>,
    State(notifier): State<Arc<dyn Notifier>>,
    Path(account_id): Path<i64>,
    body: String,
) -> ApiResult<impl IntoResponse> {
    let account = find_account(&pool, account_id).await?;
    let content = parse_content(body);

    let message = message_service::create_message(&pool, account.id, &content).await?;
    tracing::info!(account_id, message_id = message.id, "message stored");

    if let Err(e) = notifier.message_sent(&account, &message).await {
        tracing::warn!(notifier = notifier.name(), message_id = message.id, error = %e, "notification failed");
    }

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, account_location(account_id))],
        Json(message),
    ))
}

/// PUT /api/emailaccounts/:id/emailmessages/:message_id
pub async fn update_message(
    State(pool): State<SqlitePool>,
    Path((account_id, message_id)): Path<(i64, i64)>,
    payload: Result<Json<UpdateEmailMessage>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(req) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    find_owned_message(&pool, account_id, message_id).await?;

    if !message_service::update_message(&pool, message_id, &req.content, req.sent_date).await? {
        return Err(ApiError::MessageNotFound);
    }
    tracing::info!(account_id, message_id, "message updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/emailaccounts/:id/emailmessages/:message_id
pub async fn delete_message(
    State(pool): State<SqlitePool>,
    Path((account_id, message_id)): Path<(i64, i64)>,
) -> ApiResult<StatusCode> {
    find_owned_message(&pool, account_id, message_id).await?;

    if !message_service::delete_message(&pool, message_id).await? {
        return Err(ApiError::MessageNotFound);
    }
    tracing::info!(account_id, message_id, "message deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn find_account(pool: &SqlitePool, account_id: i64) -> ApiResult<EmailAccountRow> {
    account_service::find_account_row(pool, account_id)
        .await?
        .ok_or(ApiError::AccountNotFound)
}

/// A message under another account is reported as missing.
async fn find_owned_message(
    pool: &SqlitePool,
    account_id: i64,
    message_id: i64,
) -> ApiResult<EmailMessage> {
    find_account(pool, account_id).await?;
    match message_service::get_message(pool, message_id).await? {
        Some(m) if m.email_account_id == account_id => Ok(m),
        _ => Err(ApiError::MessageNotFound),
    }
}
