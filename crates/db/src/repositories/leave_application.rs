use sqlx::sqlite::SqliteRow;
use sqlx::{Connection, Row, SqliteConnection};
use tracing::warn;

use leavedesk_core::domain::leave::{LeaveApplication, LeaveApplicationId, NewLeaveApplication};

use super::{LeaveApplicationRepository, RepositoryError};
use crate::connection::open_connection;

const INSERT_SQL: &str = "INSERT INTO leave_applications \
     (leave_type, start_date, end_date, reason, leave_days) VALUES (?, ?, ?, ?, ?)";

const SELECT_ALL_SQL: &str = "SELECT id, leave_type, start_date, end_date, reason, leave_days \
     FROM leave_applications ORDER BY id";

/// Opens a dedicated connection per call and closes it before returning.
/// The schema must already exist; missing database files are not created.
pub struct SqlLeaveApplicationRepository {
    database_url: String,
    timeout_secs: u64,
}

impl SqlLeaveApplicationRepository {
    pub fn new(database_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self { database_url: database_url.into(), timeout_secs }
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    async fn open(&self) -> Result<SqliteConnection, RepositoryError> {
        Ok(open_connection(&self.database_url, self.timeout_secs, false).await?)
    }
}

async fn release(conn: SqliteConnection) {
    if let Err(error) = conn.close().await {
        warn!(
            event_name = "system.db_close_failed",
            error = %error,
            "failed to close leave application store connection"
        );
    }
}

fn decode_text(row: &SqliteRow, column: &str) -> Result<String, RepositoryError> {
    let value: Option<String> =
        row.try_get(column).map_err(|e| RepositoryError::Decode(e.to_string()))?;
    value.ok_or_else(|| RepositoryError::Decode(format!("column `{column}` is NULL")))
}

fn row_to_application(row: &SqliteRow) -> Result<LeaveApplication, RepositoryError> {
    let id: i64 = row.try_get("id").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let leave_days: Option<i64> =
        row.try_get("leave_days").map_err(|e| RepositoryError::Decode(e.to_string()))?;

    Ok(LeaveApplication {
        id: LeaveApplicationId(id),
        leave_type: decode_text(row, "leave_type")?,
        start_date: decode_text(row, "start_date")?,
        end_date: decode_text(row, "end_date")?,
        reason: decode_text(row, "reason")?,
        leave_days: leave_days
            .ok_or_else(|| RepositoryError::Decode("column `leave_days` is NULL".to_string()))?,
    })
}

#[async_trait::async_trait]
impl LeaveApplicationRepository for SqlLeaveApplicationRepository {
    async fn insert_application(
        &self,
        application: NewLeaveApplication,
    ) -> Result<LeaveApplicationId, RepositoryError> {
        let mut conn = self.open().await?;

        let outcome = sqlx::query(INSERT_SQL)
            .bind(&application.leave_type)
            .bind(&application.start_date)
            .bind(&application.end_date)
            .bind(&application.reason)
            .bind(application.leave_days)
            .execute(&mut conn)
            .await;

        release(conn).await;
        Ok(LeaveApplicationId(outcome?.last_insert_rowid()))
    }

    async fn list_applications(&self) -> Result<Vec<LeaveApplication>, RepositoryError> {
        let mut conn = self.open().await?;
        let rows = sqlx::query(SELECT_ALL_SQL).fetch_all(&mut conn).await;
        release(conn).await;

        rows?.iter().map(row_to_application).collect()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use leavedesk_core::domain::leave::{LeaveApplicationId, NewLeaveApplication};

    use super::SqlLeaveApplicationRepository;
    use crate::repositories::{LeaveApplicationRepository, RepositoryError};
    use crate::{connect_with_settings, run_pending};

    fn sample() -> NewLeaveApplication {
        NewLeaveApplication {
            leave_type: "sick".to_string(),
            start_date: "15/03/2024".to_string(),
            end_date: "2024-03-17".to_string(),
            reason: "flu".to_string(),
            leave_days: 3,
        }
    }

    async fn migrated_store(dir: &TempDir) -> SqlLeaveApplicationRepository {
        let url = format!("sqlite://{}", dir.path().join("leave.db").display());
        let pool = connect_with_settings(&url, 1, 5, true).await.expect("create database");
        run_pending(&pool).await.expect("migrate");
        pool.close().await;
        SqlLeaveApplicationRepository::new(url, 5)
    }

    #[tokio::test]
    async fn insert_persists_the_five_values_verbatim() {
        let dir = TempDir::new().expect("tempdir");
        let repo = migrated_store(&dir).await;

        let id = repo.insert_application(sample()).await.expect("insert");
        let stored = repo.list_applications().await.expect("list");

        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, id);
        assert_eq!(stored[0].leave_type, "sick");
        assert_eq!(stored[0].start_date, "15/03/2024");
        assert_eq!(stored[0].end_date, "2024-03-17");
        assert_eq!(stored[0].reason, "flu");
        assert_eq!(stored[0].leave_days, 3);
    }

    #[tokio::test]
    async fn identical_submissions_create_distinct_rows() {
        let dir = TempDir::new().expect("tempdir");
        let repo = migrated_store(&dir).await;

        let first = repo.insert_application(sample()).await.expect("first insert");
        let second = repo.insert_application(sample()).await.expect("second insert");

        assert_ne!(first, second);
        assert_eq!(second, LeaveApplicationId(first.0 + 1));
        assert_eq!(repo.list_applications().await.expect("list").len(), 2);
    }

    #[tokio::test]
    async fn insert_fails_when_the_schema_is_missing() {
        let dir = TempDir::new().expect("tempdir");
        let url = format!("sqlite://{}", dir.path().join("empty.db").display());
        let pool = connect_with_settings(&url, 1, 5, true).await.expect("create database");
        pool.close().await;

        let repo = SqlLeaveApplicationRepository::new(url, 5);
        let error = repo.insert_application(sample()).await.expect_err("no table");
        assert!(matches!(error, RepositoryError::Database(_)));
    }

    #[tokio::test]
    async fn insert_fails_when_the_database_file_is_absent() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("missing.db");
        let repo = SqlLeaveApplicationRepository::new(format!("sqlite://{}", path.display()), 5);

        assert!(repo.insert_application(sample()).await.is_err());
        assert!(!path.exists(), "the store must not create the database on insert");
    }
}
