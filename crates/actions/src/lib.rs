//! Custom actions for the leave-application assistant.
//!
//! The dialogue host drives a slot-filling form and calls back into this crate
//! by action name:
//! - `validate_leave_form` checks the slot the form just requested and either
//!   keeps the normalized value or clears it with a bilingual rejection message
//! - `action_submit_leave` writes the completed form to the store and confirms
//! - `action_handle_faq` maps a recognized FAQ intent to its canned response
//!
//! # Key Types
//!
//! - `ActionRuntime` dispatches a webhook request to the registered action
//! - `SubmissionHandler` owns the insert-then-confirm sequence
//! - `ActionRequest` / `ActionResponse` are the host wire format

pub mod registry;
pub mod request;
pub mod runtime;
pub mod submission;

pub use registry::{Action, ActionRegistry};
pub use request::{ActionRequest, ActionResponse, LatestMessage, SlotEvent, Tracker};
pub use runtime::{ActionFailure, ActionRuntime};
pub use submission::{SubmissionError, SubmissionHandler};
