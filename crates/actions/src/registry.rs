use std::collections::HashMap;

use async_trait::async_trait;

use leavedesk_core::domain::leave::FormField;
use leavedesk_core::errors::ApplicationError;
use leavedesk_core::faq::FaqDispatcher;
use leavedesk_core::flows::{FormValidationAction, SlotUpdate, TurnContext};
use leavedesk_core::i18n::MessageSink;

use crate::request::Tracker;
use crate::submission::SubmissionHandler;

/// A named custom action the dialogue host can invoke.
#[async_trait]
pub trait Action: Send + Sync {
    fn name(&self) -> &'static str;

    async fn run(
        &self,
        tracker: &Tracker,
        turn: &TurnContext,
        sink: &dyn MessageSink,
    ) -> Result<Vec<SlotUpdate>, ApplicationError>;
}

#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<String, Box<dyn Action>>,
}

impl ActionRegistry {
    pub fn register<T>(&mut self, action: T)
    where
        T: Action + 'static,
    {
        self.actions.insert(action.name().to_string(), Box::new(action));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Action> {
        self.actions.get(name).map(|action| action.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[async_trait]
impl Action for FormValidationAction {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Validates only the slot the form is currently requesting. A request with
    /// no requested slot, or no candidate value for it, changes nothing.
    async fn run(
        &self,
        tracker: &Tracker,
        turn: &TurnContext,
        sink: &dyn MessageSink,
    ) -> Result<Vec<SlotUpdate>, ApplicationError> {
        let Some(requested) = tracker.requested_slot() else {
            return Ok(Vec::new());
        };
        let field = requested.parse::<FormField>()?;
        let Some(raw) = tracker.slot(field.slot_name()) else {
            return Ok(Vec::new());
        };

        Ok(vec![self.on_field_value(field, &raw, turn, sink)])
    }
}

#[async_trait]
impl Action for SubmissionHandler {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn run(
        &self,
        tracker: &Tracker,
        turn: &TurnContext,
        sink: &dyn MessageSink,
    ) -> Result<Vec<SlotUpdate>, ApplicationError> {
        self.submit(&tracker.form_slots(), turn, sink).await?;
        Ok(Vec::new())
    }
}

#[async_trait]
impl Action for FaqDispatcher {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn run(
        &self,
        tracker: &Tracker,
        _turn: &TurnContext,
        sink: &dyn MessageSink,
    ) -> Result<Vec<SlotUpdate>, ApplicationError> {
        if let Some(intent) = tracker.intent_name() {
            self.dispatch(intent, sink);
        }
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use leavedesk_core::faq::FaqDispatcher;
    use leavedesk_core::flows::FormValidationAction;

    use super::ActionRegistry;

    #[test]
    fn registry_indexes_actions_by_name() {
        let mut registry = ActionRegistry::default();
        assert!(registry.is_empty());

        registry.register(FaqDispatcher);
        registry.register(FormValidationAction::standard().expect("validators"));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["action_handle_faq", "validate_leave_form"]);
        assert!(registry.get("action_handle_faq").is_some());
        assert!(registry.get("action_unknown").is_none());
    }
}
