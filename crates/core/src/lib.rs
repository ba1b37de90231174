pub mod config;
pub mod domain;
pub mod errors;
pub mod faq;
pub mod flows;
pub mod i18n;
pub mod validation;

pub use domain::leave::{
    FormField, LeaveApplication, LeaveApplicationId, LeaveType, NewLeaveApplication,
};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use faq::{FaqDispatcher, FaqIntent};
pub use flows::{FormValidationAction, SlotMap, SlotUpdate, SlotValue, TurnContext};
pub use i18n::{BilingualPair, BilingualResponder, CollectingSink, Locale, MessageSink, OutboundMessage};
pub use validation::{FieldValidator, PatternError, RejectionReason, ValidatorRegistry, Verdict};
