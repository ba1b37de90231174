use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqlitePoolOptions};
use sqlx::ConnectOptions;

pub type DbPool = sqlx::SqlitePool;

pub async fn connect(database_url: &str) -> Result<DbPool, sqlx::Error> {
    connect_with_settings(database_url, 5, 30, false).await
}

/// Pooled access for operator tooling and health probes.
pub async fn connect_with_settings(
    database_url: &str,
    max_connections: u32,
    timeout_secs: u64,
    create_if_missing: bool,
) -> Result<DbPool, sqlx::Error> {
    let options = connect_options(database_url, timeout_secs, create_if_missing)?;

    SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .acquire_timeout(Duration::from_secs(timeout_secs.max(1)))
        .connect_with(options)
        .await
}

/// Round-trips `SELECT 1` to prove the database answers.
pub async fn ping(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Opens one standalone connection. The caller owns it and must close it.
pub async fn open_connection(
    database_url: &str,
    timeout_secs: u64,
    create_if_missing: bool,
) -> Result<SqliteConnection, sqlx::Error> {
    connect_options(database_url, timeout_secs, create_if_missing)?.connect().await
}

fn connect_options(
    database_url: &str,
    timeout_secs: u64,
    create_if_missing: bool,
) -> Result<SqliteConnectOptions, sqlx::Error> {
    Ok(SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(create_if_missing)
        .busy_timeout(Duration::from_secs(timeout_secs.max(1))))
}
