use tracing::{debug, info};

use crate::domain::leave::FormField;
use crate::flows::slots::{SlotUpdate, SlotValue};
use crate::i18n::responder::{BilingualResponder, MessageSink};
use crate::validation::{PatternError, ValidatorRegistry, Verdict};

/// Per-turn context supplied by the form driver.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnContext {
    pub session_id: String,
    pub correlation_id: String,
    /// The user's latest utterance, used to pick the reply language.
    pub user_text: String,
}

impl TurnContext {
    pub fn new(
        session_id: impl Into<String>,
        correlation_id: impl Into<String>,
        user_text: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            correlation_id: correlation_id.into(),
            user_text: user_text.into(),
        }
    }
}

/// Validates the slot the form driver is currently requesting.
pub struct FormValidationAction {
    validators: ValidatorRegistry,
    responder: BilingualResponder,
}

impl FormValidationAction {
    pub const NAME: &'static str = "validate_leave_form";

    pub fn new(validators: ValidatorRegistry, responder: BilingualResponder) -> Self {
        Self { validators, responder }
    }

    pub fn standard() -> Result<Self, PatternError> {
        Ok(Self::new(ValidatorRegistry::standard()?, BilingualResponder::new()))
    }

    pub fn on_field_value<S>(
        &self,
        field: FormField,
        raw: &SlotValue,
        turn: &TurnContext,
        sink: &S,
    ) -> SlotUpdate
    where
        S: MessageSink + ?Sized,
    {
        match self.validators.validate(field, raw) {
            Verdict::Accepted(normalized) => {
                debug!(
                    event_name = "form.slot_accepted",
                    correlation_id = %turn.correlation_id,
                    session_id = %turn.session_id,
                    field = %field,
                    "slot value accepted"
                );
                SlotUpdate::set(field, normalized)
            }
            Verdict::Rejected(reason) => {
                let locale = self.responder.respond(sink, &turn.user_text, reason.message());
                info!(
                    event_name = "form.slot_rejected",
                    correlation_id = %turn.correlation_id,
                    session_id = %turn.session_id,
                    field = %field,
                    reason_code = reason.code(),
                    locale = ?locale,
                    "slot value rejected"
                );
                SlotUpdate::unset(field)
            }
        }
    }
}
