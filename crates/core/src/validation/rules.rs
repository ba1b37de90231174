use regex::Regex;

use super::{FieldValidator, PatternError, RejectionReason, Verdict};
use crate::domain::leave::{LeaveType, LEAVE_DAYS_RANGE, MIN_REASON_CHARS};
use crate::flows::slots::SlotValue;

const DATE_PATTERNS: [&str; 2] = [r"^\d{1,2}/\d{1,2}/\d{4}$", r"^\d{4}-\d{2}-\d{2}$"];

#[derive(Clone, Copy, Debug, Default)]
pub struct LeaveTypeValidator;

impl FieldValidator for LeaveTypeValidator {
    fn validate(&self, raw: &SlotValue) -> Verdict {
        match LeaveType::parse(&raw.as_text()) {
            Some(leave_type) => Verdict::Accepted(SlotValue::Text(leave_type.as_str().to_string())),
            None => Verdict::Rejected(RejectionReason::InvalidLeaveType),
        }
    }
}

/// Shape-only check; calendar validity and start/end ordering are not enforced.
#[derive(Clone, Debug)]
pub struct DateValidator {
    patterns: Vec<Regex>,
}

impl DateValidator {
    pub fn new() -> Result<Self, PatternError> {
        let patterns = DATE_PATTERNS
            .into_iter()
            .map(|pattern| Regex::new(pattern).map_err(|source| PatternError { pattern, source }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }
}

impl FieldValidator for DateValidator {
    fn validate(&self, raw: &SlotValue) -> Verdict {
        let value = raw.as_text();
        if self.patterns.iter().any(|pattern| pattern.is_match(&value)) {
            Verdict::Accepted(raw.clone())
        } else {
            Verdict::Rejected(RejectionReason::InvalidDateFormat)
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ReasonValidator;

impl FieldValidator for ReasonValidator {
    fn validate(&self, raw: &SlotValue) -> Verdict {
        let value = raw.as_text();
        if value.trim().chars().count() > MIN_REASON_CHARS {
            Verdict::Accepted(raw.clone())
        } else {
            Verdict::Rejected(RejectionReason::ReasonTooShort)
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LeaveDaysValidator;

impl FieldValidator for LeaveDaysValidator {
    fn validate(&self, raw: &SlotValue) -> Verdict {
        let days = match raw {
            SlotValue::Integer(days) => Some(*days),
            SlotValue::Text(text) => ascii_digits(text.trim()).parse::<i64>().ok(),
        };

        match days {
            Some(days) if LEAVE_DAYS_RANGE.contains(&days) => {
                Verdict::Accepted(SlotValue::Integer(days))
            }
            _ => Verdict::Rejected(RejectionReason::InvalidLeaveDays),
        }
    }
}

/// Bengali digits (০-৯) are read as their ASCII counterparts.
fn ascii_digits(value: &str) -> String {
    value
        .chars()
        .map(|character| match character {
            '\u{09E6}'..='\u{09EF}' => {
                char::from(b'0' + (u32::from(character) - 0x09E6) as u8)
            }
            other => other,
        })
        .collect()
}
