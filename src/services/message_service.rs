use crate::models::EmailMessage;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// Persist a message stamped with the current UTC time.
pub async fn create_message(
    pool: &SqlitePool,
    account_id: i64,
    content: &str,
) -> Result<EmailMessage, sqlx::Error> {
    let sent_date = Utc::now();
    let result = sqlx::query(
        "INSERT INTO email_messages (content, sent_date, email_account_id) VALUES (?, ?, ?)",
    )
    .bind(content)
    .bind(sent_date)
    .bind(account_id)
    .execute(pool)
    .await?;

    Ok(EmailMessage {
        id: result.last_insert_rowid(),
        content: content.to_string(),
        sent_date,
        email_account_id: account_id,
    })
}

pub async fn get_message(pool: &SqlitePool, id: i64) -> Result<Option<EmailMessage>, sqlx::Error> {
    sqlx::query_as::<_, EmailMessage>(
        "SELECT id, content, sent_date, email_account_id FROM email_messages WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Overwrite content and sent date. Returns false if the row vanished.
pub async fn update_message(
    pool: &SqlitePool,
    id: i64,
    content: &str,
    sent_date: DateTime<Utc>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE email_messages SET content = ?, sent_date = ? WHERE id = ?")
        .bind(content)
        .bind(sent_date)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_message(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM email_messages WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
