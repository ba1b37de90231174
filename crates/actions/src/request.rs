use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use leavedesk_core::domain::leave::FormField;
use leavedesk_core::flows::{SlotMap, SlotUpdate, SlotValue};
use leavedesk_core::i18n::OutboundMessage;

const REQUESTED_SLOT: &str = "requested_slot";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub next_action: String,
    #[serde(default)]
    pub sender_id: String,
    #[serde(default)]
    pub tracker: Tracker,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tracker {
    #[serde(default)]
    pub latest_message: LatestMessage,
    #[serde(default)]
    pub slots: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_slot: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestMessage {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    #[serde(default)]
    pub name: Option<String>,
}

impl Tracker {
    pub fn user_text(&self) -> &str {
        &self.latest_message.text
    }

    pub fn intent_name(&self) -> Option<&str> {
        self.latest_message.intent.as_ref().and_then(|intent| intent.name.as_deref())
    }

    /// The explicit field wins; otherwise the host's own `requested_slot` slot.
    pub fn requested_slot(&self) -> Option<&str> {
        self.requested_slot
            .as_deref()
            .or_else(|| self.slots.get(REQUESTED_SLOT).and_then(Value::as_str))
    }

    pub fn slot(&self, name: &str) -> Option<SlotValue> {
        self.slots.get(name).and_then(SlotValue::from_json)
    }

    /// The five form fields as currently filled. Other host slots are ignored.
    pub fn form_slots(&self) -> SlotMap {
        FormField::ALL
            .into_iter()
            .filter_map(|field| self.slot(field.slot_name()).map(|value| (field, value)))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotEvent {
    pub event: String,
    pub name: String,
    pub value: Option<SlotValue>,
}

impl From<&SlotUpdate> for SlotEvent {
    fn from(update: &SlotUpdate) -> Self {
        Self {
            event: "slot".to_string(),
            name: update.field.slot_name().to_string(),
            value: update.value.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub events: Vec<SlotEvent>,
    pub responses: Vec<OutboundMessage>,
}

impl ActionResponse {
    pub fn new(updates: &[SlotUpdate], responses: Vec<OutboundMessage>) -> Self {
        Self { events: updates.iter().map(SlotEvent::from).collect(), responses }
    }
}
