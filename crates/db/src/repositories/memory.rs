use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use leavedesk_core::domain::leave::{LeaveApplication, LeaveApplicationId, NewLeaveApplication};

use super::{LeaveApplicationRepository, RepositoryError};

#[derive(Default)]
pub struct InMemoryLeaveApplicationRepository {
    applications: RwLock<Vec<LeaveApplication>>,
    unavailable: AtomicBool,
}

impl InMemoryLeaveApplicationRepository {
    /// A store whose writes always fail, for exercising the failure path.
    pub fn unavailable() -> Self {
        let repo = Self::default();
        repo.set_unavailable(true);
        repo
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.applications.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.applications.read().await.is_empty()
    }

    fn check_available(&self) -> Result<(), RepositoryError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::Database(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl LeaveApplicationRepository for InMemoryLeaveApplicationRepository {
    async fn insert_application(
        &self,
        application: NewLeaveApplication,
    ) -> Result<LeaveApplicationId, RepositoryError> {
        self.check_available()?;
        let mut applications = self.applications.write().await;
        let id = LeaveApplicationId(applications.len() as i64 + 1);
        applications.push(LeaveApplication::from_new(id, application));
        Ok(id)
    }

    async fn list_applications(&self) -> Result<Vec<LeaveApplication>, RepositoryError> {
        self.check_available()?;
        Ok(self.applications.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use leavedesk_core::domain::leave::{LeaveApplicationId, NewLeaveApplication};

    use super::InMemoryLeaveApplicationRepository;
    use crate::repositories::LeaveApplicationRepository;

    fn sample() -> NewLeaveApplication {
        NewLeaveApplication {
            leave_type: "annual".to_string(),
            start_date: "01/01/2025".to_string(),
            end_date: "05/01/2025".to_string(),
            reason: "vacation".to_string(),
            leave_days: 5,
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_sequentially() {
        let repo = InMemoryLeaveApplicationRepository::default();
        assert_eq!(repo.insert_application(sample()).await.expect("insert"), LeaveApplicationId(1));
        assert_eq!(repo.insert_application(sample()).await.expect("insert"), LeaveApplicationId(2));
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn unavailable_store_rejects_writes_without_recording() {
        let repo = InMemoryLeaveApplicationRepository::unavailable();
        assert!(repo.insert_application(sample()).await.is_err());
        assert!(repo.is_empty().await);
    }
}
