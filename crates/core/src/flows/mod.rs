pub mod form;
pub mod slots;

pub use form::{FormValidationAction, TurnContext};
pub use slots::{SlotMap, SlotUpdate, SlotValue};
