use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const SCHEMA: &str = include_str!("../../migrations/0001_email_tables.sql");

/// Addresses inserted when the account table is empty.
pub const SEED_ADDRESSES: [&str; 2] = ["mock1@example.com", "mock2@example.com"];

/// Opens a pool for `database_url`, creating the database file if missing.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let url = normalize_sqlite_url(database_url);
    let options = SqliteConnectOptions::from_str(&url)?
        .create_if_missing(true)
        .foreign_keys(true);
    SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await
}

/// Private in-memory database. Each SQLite memory connection is its own
/// database, so the pool holds exactly one connection and never recycles it.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Creates the tables if they do not exist yet.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}

/// Inserts the placeholder accounts when, and only when, no account exists.
/// Returns how many rows were inserted.
pub async fn seed_accounts(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM email_accounts")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        return Ok(0);
    }

    let mut inserted = 0;
    for address in SEED_ADDRESSES {
        inserted += sqlx::query("INSERT INTO email_accounts (address) VALUES (?)")
            .bind(address)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }
    tx.commit().await?;
    Ok(inserted)
}

/// Schema + seed, run once at startup.
pub async fn prepare(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    run_migrations(pool).await?;
    seed_accounts(pool).await
}

/// Accepts `sqlite:foo.db`, `sqlite://foo.db`, `file:foo.db`, `sqlite::memory:`
/// or a bare path and returns the form sqlx expects.
pub fn normalize_sqlite_url(input: &str) -> String {
    if input.starts_with("sqlite://") || input.starts_with("sqlite::memory:") {
        return input.to_string();
    }
    if let Some(rest) = input.strip_prefix("sqlite:") {
        return format!("sqlite://{}", rest.trim_start_matches('/'));
    }
    if let Some(rest) = input.strip_prefix("file:") {
        return format!("sqlite://{}", rest);
    }
    format!("sqlite://{}", input)
}
