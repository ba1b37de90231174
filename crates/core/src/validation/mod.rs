//! Per-field acceptance rules for the leave form.
//!
//! Each validator judges one raw slot value and either accepts it (returning the
//! normalized value to store) or rejects it with a reason code. Validators are
//! pure; messaging on rejection belongs to the form orchestrator.

mod rules;

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::leave::FormField;
use crate::flows::slots::SlotValue;
use crate::i18n::catalog;
use crate::i18n::responder::BilingualPair;

pub use rules::{DateValidator, LeaveDaysValidator, LeaveTypeValidator, ReasonValidator};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accepted(SlotValue),
    Rejected(RejectionReason),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    InvalidLeaveType,
    InvalidDateFormat,
    ReasonTooShort,
    /// Covers both non-numeric input and out-of-range counts.
    InvalidLeaveDays,
}

impl RejectionReason {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidLeaveType => "invalid_leave_type",
            Self::InvalidDateFormat => "invalid_date_format",
            Self::ReasonTooShort => "reason_too_short",
            Self::InvalidLeaveDays => "invalid_leave_days",
        }
    }

    pub fn message(&self) -> &'static BilingualPair {
        match self {
            Self::InvalidLeaveType => &catalog::INVALID_LEAVE_TYPE,
            Self::InvalidDateFormat => &catalog::INVALID_DATE_FORMAT,
            Self::ReasonTooShort => &catalog::REASON_TOO_SHORT,
            Self::InvalidLeaveDays => &catalog::INVALID_LEAVE_DAYS,
        }
    }
}

pub trait FieldValidator: Send + Sync {
    fn validate(&self, raw: &SlotValue) -> Verdict;
}

#[derive(Debug, thiserror::Error)]
#[error("date pattern `{pattern}` failed to compile: {source}")]
pub struct PatternError {
    pub pattern: &'static str,
    #[source]
    pub source: regex::Error,
}

/// Closed mapping from form field to its validator, built once at startup.
#[derive(Clone)]
pub struct ValidatorRegistry {
    validators: HashMap<FormField, Arc<dyn FieldValidator>>,
}

impl ValidatorRegistry {
    pub fn standard() -> Result<Self, PatternError> {
        let dates: Arc<dyn FieldValidator> = Arc::new(DateValidator::new()?);

        let validators = HashMap::from([
            (FormField::LeaveType, Arc::new(LeaveTypeValidator) as Arc<dyn FieldValidator>),
            (FormField::StartDate, Arc::clone(&dates)),
            (FormField::EndDate, dates),
            (FormField::Reason, Arc::new(ReasonValidator) as Arc<dyn FieldValidator>),
            (FormField::LeaveDays, Arc::new(LeaveDaysValidator) as Arc<dyn FieldValidator>),
        ]);

        Ok(Self { validators })
    }

    pub fn validator(&self, field: FormField) -> Option<&Arc<dyn FieldValidator>> {
        self.validators.get(&field)
    }

    pub fn validate(&self, field: FormField, raw: &SlotValue) -> Verdict {
        match self.validator(field) {
            Some(validator) => validator.validate(raw),
            // `standard` registers every field; unreachable unless a registry is hand-built.
            None => Verdict::Accepted(raw.clone()),
        }
    }
}
