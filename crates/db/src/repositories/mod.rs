use async_trait::async_trait;
use thiserror::Error;

use leavedesk_core::domain::leave::{LeaveApplication, LeaveApplicationId, NewLeaveApplication};

pub mod leave_application;
pub mod memory;

pub use leave_application::SqlLeaveApplicationRepository;
pub use memory::InMemoryLeaveApplicationRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("decode error: {0}")]
    Decode(String),
}

/// Insert-only store for completed leave forms. No dedup: every call adds a row.
#[async_trait]
pub trait LeaveApplicationRepository: Send + Sync {
    async fn insert_application(
        &self,
        application: NewLeaveApplication,
    ) -> Result<LeaveApplicationId, RepositoryError>;

    /// All stored applications in insertion order.
    async fn list_applications(&self) -> Result<Vec<LeaveApplication>, RepositoryError>;
}
