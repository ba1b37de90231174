use sqlx::migrate::{MigrateError, Migrator};
use sqlx::SqliteExecutor;

use crate::DbPool;

pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

pub const LEAVE_APPLICATIONS_TABLE: &str = "leave_applications";

pub async fn run_pending(pool: &DbPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

pub async fn leave_applications_table_exists<'e, E>(executor: E) -> Result<bool, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
    )
    .bind(LEAVE_APPLICATIONS_TABLE)
    .fetch_one(executor)
    .await?;
    Ok(count == 1)
}

/// Column names of the leave applications table in declaration order.
pub async fn leave_applications_columns<'e, E>(executor: E) -> Result<Vec<String>, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query_scalar("SELECT name FROM pragma_table_info(?) ORDER BY cid")
        .bind(LEAVE_APPLICATIONS_TABLE)
        .fetch_all(executor)
        .await
}
