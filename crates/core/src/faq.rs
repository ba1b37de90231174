use std::str::FromStr;

use tracing::debug;

use crate::i18n::responder::{MessageSink, OutboundMessage};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaqIntent {
    AskLeavePolicy,
    AskSalaryDate,
    AskAttendanceRules,
    ThankYou,
}

impl FaqIntent {
    pub const ALL: [FaqIntent; 4] =
        [Self::AskLeavePolicy, Self::AskSalaryDate, Self::AskAttendanceRules, Self::ThankYou];

    pub fn intent_name(&self) -> &'static str {
        match self {
            Self::AskLeavePolicy => "ask_leave_policy",
            Self::AskSalaryDate => "ask_salary_date",
            Self::AskAttendanceRules => "ask_attendance_rules",
            Self::ThankYou => "thank_you",
        }
    }

    pub fn response(&self) -> &'static str {
        match self {
            Self::AskLeavePolicy => "utter_ask_leave_policy",
            Self::AskSalaryDate => "utter_ask_salary_date",
            Self::AskAttendanceRules => "utter_ask_attendance_rules",
            Self::ThankYou => "utter_thank_you",
        }
    }
}

impl FromStr for FaqIntent {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|intent| intent.intent_name() == value).ok_or(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FaqDispatcher;

impl FaqDispatcher {
    pub const NAME: &'static str = "action_handle_faq";

    /// Emits the canned response for a recognized intent. Unknown intents emit nothing.
    pub fn dispatch<S>(&self, intent_name: &str, sink: &S) -> Option<FaqIntent>
    where
        S: MessageSink + ?Sized,
    {
        let intent = intent_name.parse::<FaqIntent>().ok()?;
        sink.emit(OutboundMessage::template(intent.response()));
        debug!(event_name = "faq.dispatched", intent = intent.intent_name(), "faq response emitted");
        Some(intent)
    }
}
