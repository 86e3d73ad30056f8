//! Account repository
use crate::models::{EmailAccount, EmailAccountRow, EmailMessage};
use sqlx::SqlitePool;
use std::collections::HashMap;

/// All accounts with their messages, ordered by id. Each account appears once.
pub async fn list_accounts(pool: &SqlitePool) -> Result<Vec<EmailAccount>, sqlx::Error> {
    let rows = sqlx::query_as::<_, EmailAccountRow>(
        "SELECT id, address FROM email_accounts ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    let messages = sqlx::query_as::<_, EmailMessage>(
        "SELECT id, content, sent_date, email_account_id FROM email_messages ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    let mut by_account: HashMap<i64, Vec<EmailMessage>> = HashMap::new();
    for m in messages {
        by_account.entry(m.email_account_id).or_default().push(m);
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let sent = by_account.remove(&row.id).unwrap_or_default();
            EmailAccount::from_row(row, sent)
        })
        .collect())
}

/// Get account by ID, with its messages
pub async fn get_account(pool: &SqlitePool, id: i64) -> Result<Option<EmailAccount>, sqlx::Error> {
    let Some(row) = find_account_row(pool, id).await? else {
        return Ok(None);
    };

    let messages = sqlx::query_as::<_, EmailMessage>(
        "SELECT id, content, sent_date, email_account_id FROM email_messages WHERE email_account_id = ? ORDER BY id",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(Some(EmailAccount::from_row(row, messages)))
}

/// Account row without messages; the existence check used by the message endpoints.
pub async fn find_account_row(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<EmailAccountRow>, sqlx::Error> {
    sqlx::query_as::<_, EmailAccountRow>("SELECT id, address FROM email_accounts WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a new account. The address is stored as given; validate before calling.
pub async fn create_account(pool: &SqlitePool, address: &str) -> Result<EmailAccount, sqlx::Error> {
    let result = sqlx::query("INSERT INTO email_accounts (address) VALUES (?)")
        .bind(address)
        .execute(pool)
        .await?;

    Ok(EmailAccount {
        id: result.last_insert_rowid(),
        address: address.to_string(),
        sent_emails: Vec::new(),
    })
}

/// Delete account. Its messages go with it through the foreign key cascade.
pub async fn delete_account(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM email_accounts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::services::message_service;

    async fn pool() -> SqlitePool {
        let pool = db::connect_in_memory().await.unwrap();
        db::run_migrations(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn ids_are_assigned_and_unique() {
        let pool = pool().await;
        let a = create_account(&pool, "a@example.com").await.unwrap();
        let b = create_account(&pool, "b@example.com").await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(get_account(&pool, a.id).await.unwrap(), Some(a));
    }

    #[tokio::test]
    async fn list_groups_messages_under_their_account() {
        let pool = pool().await;
        let a = create_account(&pool, "a@example.com").await.unwrap();
        let b = create_account(&pool, "b@example.com").await.unwrap();
        message_service::create_message(&pool, a.id, "one").await.unwrap();
        message_service::create_message(&pool, a.id, "two").await.unwrap();

        let all = list_accounts(&pool).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, a.id);
        assert_eq!(all[0].sent_emails.len(), 2);
        assert_eq!(all[1].id, b.id);
        assert!(all[1].sent_emails.is_empty());
    }

    #[tokio::test]
    async fn delete_removes_owned_messages() {
        let pool = pool().await;
        let a = create_account(&pool, "a@example.com").await.unwrap();
        let m = message_service::create_message(&pool, a.id, "bye").await.unwrap();

        assert!(delete_account(&pool, a.id).await.unwrap());
        assert!(!delete_account(&pool, a.id).await.unwrap());
        assert!(message_service::get_message(&pool, m.id).await.unwrap().is_none());
    }
}
