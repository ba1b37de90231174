use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use leavedesk_core::errors::{ApplicationError, InterfaceError};
use leavedesk_core::faq::FaqDispatcher;
use leavedesk_core::flows::{FormValidationAction, TurnContext};
use leavedesk_core::i18n::{BilingualResponder, CollectingSink};
use leavedesk_core::validation::PatternError;
use leavedesk_db::LeaveApplicationRepository;

use crate::registry::ActionRegistry;
use crate::request::{ActionRequest, ActionResponse};
use crate::submission::SubmissionHandler;

/// A failed action turn. `response` already carries the apology for the user.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct ActionFailure {
    pub error: InterfaceError,
    pub response: ActionResponse,
}

pub struct ActionRuntime {
    registry: ActionRegistry,
    responder: BilingualResponder,
}

impl ActionRuntime {
    pub fn new(registry: ActionRegistry, responder: BilingualResponder) -> Self {
        Self { registry, responder }
    }

    /// Registers the form validator, the submission handler and the FAQ dispatcher.
    pub fn standard(
        repository: Arc<dyn LeaveApplicationRepository>,
    ) -> Result<Self, PatternError> {
        let responder = BilingualResponder::new();
        let mut registry = ActionRegistry::default();
        registry.register(FormValidationAction::standard()?);
        registry.register(SubmissionHandler::new(repository, responder));
        registry.register(FaqDispatcher);
        Ok(Self::new(registry, responder))
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub async fn handle(
        &self,
        request: &ActionRequest,
        correlation_id: &str,
    ) -> Result<ActionResponse, ActionFailure> {
        let sink = CollectingSink::default();
        let turn =
            TurnContext::new(&request.sender_id, correlation_id, request.tracker.user_text());

        debug!(
            event_name = "system.action_dispatched",
            correlation_id = %correlation_id,
            session_id = %turn.session_id,
            action = %request.next_action,
            "dispatching custom action"
        );

        let outcome = match self.registry.get(&request.next_action) {
            Some(action) => action.run(&request.tracker, &turn, &sink).await,
            None => Err(ApplicationError::UnsupportedAction(request.next_action.clone())),
        };

        match outcome {
            Ok(updates) => Ok(ActionResponse::new(&updates, sink.messages())),
            Err(error) => {
                let error = error.into_interface(correlation_id);
                warn!(
                    event_name = "system.action_failed",
                    correlation_id = %correlation_id,
                    session_id = %turn.session_id,
                    action = %request.next_action,
                    error = %error,
                    "custom action failed"
                );
                self.responder.respond(&sink, &turn.user_text, error.user_message());
                Err(ActionFailure { error, response: ActionResponse::new(&[], sink.messages()) })
            }
        }
    }
}
