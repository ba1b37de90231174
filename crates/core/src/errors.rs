use thiserror::Error;

use crate::domain::leave::FormField;
use crate::i18n::catalog;
use crate::i18n::responder::BilingualPair;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown form field `{0}`")]
    UnknownField(String),
    #[error("required slot `{0}` is not filled")]
    MissingSlot(FormField),
    #[error("slot `{field}` holds a {found} value, expected {expected}")]
    SlotTypeMismatch { field: FormField, expected: &'static str, found: &'static str },
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("persistence failure: {0}")]
    Persistence(String),
    #[error("unsupported action `{0}`")]
    UnsupportedAction(String),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("bad request: {message}")]
    BadRequest { message: String, correlation_id: String },
    #[error("service unavailable: {message}")]
    ServiceUnavailable { message: String, correlation_id: String },
    #[error("internal error: {message}")]
    Internal { message: String, correlation_id: String },
}

impl InterfaceError {
    pub fn user_message(&self) -> &'static BilingualPair {
        match self {
            Self::BadRequest { .. } => &catalog::REQUEST_NOT_PROCESSED,
            Self::ServiceUnavailable { .. } => &catalog::SUBMISSION_UNAVAILABLE,
            Self::Internal { .. } => &catalog::INTERNAL_ERROR,
        }
    }

    pub fn correlation_id(&self) -> &str {
        match self {
            Self::BadRequest { correlation_id, .. }
            | Self::ServiceUnavailable { correlation_id, .. }
            | Self::Internal { correlation_id, .. } => correlation_id,
        }
    }
}

impl ApplicationError {
    pub fn into_interface(self, correlation_id: impl Into<String>) -> InterfaceError {
        let correlation_id = correlation_id.into();
        let mut mapped = InterfaceError::from(self);
        match &mut mapped {
            InterfaceError::BadRequest { correlation_id: id, .. }
            | InterfaceError::ServiceUnavailable { correlation_id: id, .. }
            | InterfaceError::Internal { correlation_id: id, .. } => *id = correlation_id,
        }
        mapped
    }
}

impl From<ApplicationError> for InterfaceError {
    fn from(value: ApplicationError) -> Self {
        match value {
            ApplicationError::Domain(error) => Self::BadRequest {
                message: error.to_string(),
                correlation_id: "unassigned".to_owned(),
            },
            ApplicationError::UnsupportedAction(action) => Self::BadRequest {
                message: format!("unsupported action `{action}`"),
                correlation_id: "unassigned".to_owned(),
            },
            ApplicationError::Persistence(message) => {
                Self::ServiceUnavailable { message, correlation_id: "unassigned".to_owned() }
            }
            ApplicationError::Configuration(message) => {
                Self::Internal { message, correlation_id: "unassigned".to_owned() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::leave::FormField;
    use crate::errors::{ApplicationError, DomainError, InterfaceError};

    #[test]
    fn domain_error_maps_to_bad_request_interface_error() {
        let interface =
            ApplicationError::from(DomainError::MissingSlot(FormField::Reason)).into_interface("req-1");

        assert!(matches!(
            interface,
            InterfaceError::BadRequest {
                ref correlation_id,
                ..
            } if correlation_id == "req-1"
        ));
    }

    #[test]
    fn persistence_error_maps_to_service_unavailable_with_bilingual_apology() {
        let interface = ApplicationError::Persistence("database is locked".to_owned())
            .into_interface("req-2");

        assert!(matches!(interface, InterfaceError::ServiceUnavailable { .. }));
        assert_eq!(interface.correlation_id(), "req-2");
        let apology = interface.user_message();
        assert!(apology.english.contains("could not save your leave application"));
        assert!(apology.other.contains("সংরক্ষণ"));
    }

    #[test]
    fn unsupported_action_maps_to_bad_request() {
        let interface = ApplicationError::UnsupportedAction("action_fly_to_moon".to_owned())
            .into_interface("req-3");

        assert!(matches!(interface, InterfaceError::BadRequest { ref message, .. }
            if message.contains("action_fly_to_moon")));
    }

    #[test]
    fn configuration_error_maps_to_internal() {
        let interface =
            ApplicationError::Configuration("date patterns failed to compile".to_owned())
                .into_interface("req-4");

        assert!(matches!(interface, InterfaceError::Internal { .. }));
        assert_eq!(interface.user_message().english, "An unexpected internal error occurred.");
    }
}
