use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use leavedesk_core::domain::leave::LeaveApplication;
use leavedesk_core::errors::{ApplicationError, DomainError};
use leavedesk_core::flows::{SlotMap, TurnContext};
use leavedesk_core::i18n::catalog::submission_confirmation;
use leavedesk_core::i18n::{BilingualResponder, MessageSink};
use leavedesk_db::{LeaveApplicationRepository, RepositoryError};

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("leave application could not be stored: {0}")]
    Persistence(#[from] RepositoryError),
}

impl From<SubmissionError> for ApplicationError {
    fn from(value: SubmissionError) -> Self {
        match value {
            SubmissionError::Domain(error) => Self::Domain(error),
            SubmissionError::Persistence(error) => Self::Persistence(error.to_string()),
        }
    }
}

pub struct SubmissionHandler {
    repository: Arc<dyn LeaveApplicationRepository>,
    responder: BilingualResponder,
}

impl SubmissionHandler {
    pub const NAME: &'static str = "action_submit_leave";

    pub fn new(
        repository: Arc<dyn LeaveApplicationRepository>,
        responder: BilingualResponder,
    ) -> Self {
        Self { repository, responder }
    }

    /// Writes one row for the completed form, then confirms it to the user.
    ///
    /// Nothing is emitted when the write fails. Repeated calls with the same
    /// slots write repeated rows.
    pub async fn submit<S>(
        &self,
        slots: &SlotMap,
        turn: &TurnContext,
        sink: &S,
    ) -> Result<LeaveApplication, SubmissionError>
    where
        S: MessageSink + ?Sized,
    {
        let application = slots.to_application()?;

        let id = match self.repository.insert_application(application.clone()).await {
            Ok(id) => id,
            Err(err) => {
                error!(
                    event_name = "leave.submission_failed",
                    correlation_id = %turn.correlation_id,
                    session_id = %turn.session_id,
                    error = %err,
                    "leave application insert failed"
                );
                return Err(err.into());
            }
        };

        let locale =
            self.responder.respond(sink, &turn.user_text, &submission_confirmation(&application));
        info!(
            event_name = "leave.application_submitted",
            correlation_id = %turn.correlation_id,
            session_id = %turn.session_id,
            application_id = %id,
            leave_type = %application.leave_type,
            leave_days = application.leave_days,
            locale = ?locale,
            "leave application stored"
        );

        Ok(LeaveApplication::from_new(id, application))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use leavedesk_core::domain::leave::{FormField, LeaveApplicationId};
    use leavedesk_core::errors::DomainError;
    use leavedesk_core::flows::{SlotMap, TurnContext};
    use leavedesk_core::i18n::{BilingualResponder, CollectingSink, OutboundMessage};
    use leavedesk_db::{InMemoryLeaveApplicationRepository, LeaveApplicationRepository};

    use super::{SubmissionError, SubmissionHandler};

    fn complete_slots() -> SlotMap {
        SlotMap::new()
            .with(FormField::LeaveType, "sick")
            .with(FormField::StartDate, "15/03/2024")
            .with(FormField::EndDate, "2024-03-17")
            .with(FormField::Reason, "flu")
            .with(FormField::LeaveDays, 3)
    }

    fn handler(repo: Arc<InMemoryLeaveApplicationRepository>) -> SubmissionHandler {
        SubmissionHandler::new(repo, BilingualResponder::new())
    }

    #[tokio::test]
    async fn submission_stores_one_row_and_confirms_in_english() {
        let repo = Arc::new(InMemoryLeaveApplicationRepository::default());
        let sink = CollectingSink::default();

        let stored = handler(repo.clone())
            .submit(&complete_slots(), &TurnContext::new("s-1", "req-1", "submit"), &sink)
            .await
            .expect("submit");

        assert_eq!(stored.id, LeaveApplicationId(1));
        assert_eq!(repo.len().await, 1);
        assert_eq!(
            sink.messages(),
            vec![OutboundMessage::text(
                "✅ Leave request submitted!\nType: sick\nFrom: 15/03/2024 To: 2024-03-17\nDays: 3\nReason: flu"
            )]
        );
    }

    #[tokio::test]
    async fn bengali_turn_gets_the_bengali_confirmation() {
        let repo = Arc::new(InMemoryLeaveApplicationRepository::default());
        let sink = CollectingSink::default();

        handler(repo)
            .submit(&complete_slots(), &TurnContext::new("s-1", "req-1", "জমা দিন"), &sink)
            .await
            .expect("submit");

        let messages = sink.messages();
        assert_eq!(messages.len(), 1);
        assert!(matches!(&messages[0], OutboundMessage::Text { text } if text.contains("ছুটির আবেদন")));
    }

    #[tokio::test]
    async fn identical_submissions_are_not_deduplicated() {
        let repo = Arc::new(InMemoryLeaveApplicationRepository::default());
        let handler = handler(repo.clone());
        let turn = TurnContext::new("s-1", "req-1", "submit");

        let first = handler.submit(&complete_slots(), &turn, &CollectingSink::default()).await;
        let second = handler.submit(&complete_slots(), &turn, &CollectingSink::default()).await;

        assert_ne!(first.expect("first").id, second.expect("second").id);
        assert_eq!(repo.list_applications().await.expect("list").len(), 2);
    }

    #[tokio::test]
    async fn store_failure_emits_no_confirmation() {
        let repo = Arc::new(InMemoryLeaveApplicationRepository::unavailable());
        let sink = CollectingSink::default();

        let result = handler(repo)
            .submit(&complete_slots(), &TurnContext::new("s-1", "req-1", "submit"), &sink)
            .await;

        assert!(matches!(result, Err(SubmissionError::Persistence(_))));
        assert!(sink.messages().is_empty());
    }

    #[tokio::test]
    async fn incomplete_slots_are_an_invariant_violation() {
        let repo = Arc::new(InMemoryLeaveApplicationRepository::default());
        let sink = CollectingSink::default();
        let slots = SlotMap::new().with(FormField::LeaveType, "sick");

        let result =
            handler(repo.clone()).submit(&slots, &TurnContext::default(), &sink).await;

        assert!(matches!(
            result,
            Err(SubmissionError::Domain(DomainError::MissingSlot(FormField::StartDate)))
        ));
        assert!(repo.is_empty().await);
        assert!(sink.messages().is_empty());
    }
}
