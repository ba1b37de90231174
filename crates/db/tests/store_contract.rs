use std::sync::Arc;

use tempfile::TempDir;

use leavedesk_core::domain::leave::NewLeaveApplication;
use leavedesk_db::{
    connect_with_settings, leave_applications_table_exists, run_pending,
    InMemoryLeaveApplicationRepository, LeaveApplicationRepository, SqlLeaveApplicationRepository,
};

fn application(leave_type: &str, leave_days: i64) -> NewLeaveApplication {
    NewLeaveApplication {
        leave_type: leave_type.to_string(),
        start_date: "2025-02-10".to_string(),
        end_date: "2025-02-12".to_string(),
        reason: "family event".to_string(),
        leave_days,
    }
}

async fn exercise_store(repo: Arc<dyn LeaveApplicationRepository>) {
    let first = repo.insert_application(application("casual", 2)).await.expect("first insert");
    let second = repo.insert_application(application("study", 3)).await.expect("second insert");
    assert!(second > first);

    let stored = repo.list_applications().await.expect("list");
    let summary: Vec<(&str, i64)> =
        stored.iter().map(|row| (row.leave_type.as_str(), row.leave_days)).collect();
    assert_eq!(summary, vec![("casual", 2), ("study", 3)]);
}

#[tokio::test]
async fn in_memory_store_honors_the_repository_contract() {
    exercise_store(Arc::new(InMemoryLeaveApplicationRepository::default())).await;
}

#[tokio::test]
async fn sqlite_store_honors_the_repository_contract() {
    let dir = TempDir::new().expect("tempdir");
    let url = format!("sqlite://{}", dir.path().join("leave_applications.db").display());

    let pool = connect_with_settings(&url, 1, 5, true).await.expect("create database");
    run_pending(&pool).await.expect("migrate");
    assert!(leave_applications_table_exists(&pool).await.expect("schema probe"));
    pool.close().await;

    exercise_store(Arc::new(SqlLeaveApplicationRepository::new(url, 5))).await;
}
