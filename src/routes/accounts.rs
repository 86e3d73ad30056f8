//! Account collection endpoints
use crate::error::{ApiError, ApiResult};
use crate::models::{EmailAccount, NewEmailAccount};
use crate::services::account_service;
use crate::validation::is_valid_email;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use sqlx::SqlitePool;

use super::account_location;

/// GET /api/emailaccounts
pub async fn list_accounts(State(pool): State<SqlitePool>) -> ApiResult<Json<Vec<EmailAccount>>> {
    Ok(Json(account_service::list_accounts(&pool).await?))
}

/// GET /api/emailaccounts/:id
pub async fn get_account(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> ApiResult<Json<EmailAccount>> {
    account_service::get_account(&pool, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// POST /api/emailaccounts
pub async fn create_account(
    State(pool): State<SqlitePool>,
    payload: Result<Json<NewEmailAccount>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(req) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    if !is_valid_email(&req.address) {
        tracing::debug!(address = %req.address, "rejected account with invalid address");
        return Err(ApiError::InvalidEmail);
    }

    let account = account_service::create_account(&pool, &req.address).await?;
    tracing::info!(id = account.id, address = %account.address, "account created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, account_location(account.id))],
        Json(account),
    ))
}

/// DELETE /api/emailaccounts/:id
pub async fn delete_account(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if !account_service::delete_account(&pool, id).await? {
        return Err(ApiError::NotFound);
    }
    tracing::info!(id, "account deleted");
    Ok(StatusCode::NO_CONTENT)
}
