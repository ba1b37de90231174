use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

pub const LEAVE_DAYS_RANGE: RangeInclusive<i64> = 1..=365;

/// Reasons must be strictly longer than this once trimmed.
pub const MIN_REASON_CHARS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    LeaveType,
    StartDate,
    EndDate,
    Reason,
    LeaveDays,
}

impl FormField {
    pub const ALL: [FormField; 5] =
        [Self::LeaveType, Self::StartDate, Self::EndDate, Self::Reason, Self::LeaveDays];

    pub fn slot_name(&self) -> &'static str {
        match self {
            Self::LeaveType => "leave_type",
            Self::StartDate => "start_date",
            Self::EndDate => "end_date",
            Self::Reason => "reason",
            Self::LeaveDays => "leave_days",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slot_name())
    }
}

impl FromStr for FormField {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.slot_name() == value)
            .ok_or_else(|| DomainError::UnknownField(value.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveType {
    #[serde(rename = "annual")]
    Annual,
    #[serde(rename = "sick")]
    Sick,
    #[serde(rename = "casual")]
    Casual,
    #[serde(rename = "maternity")]
    Maternity,
    #[serde(rename = "paternity")]
    Paternity,
    #[serde(rename = "unpaid")]
    Unpaid,
    #[serde(rename = "study")]
    Study,
    #[serde(rename = "emergency leave")]
    EmergencyLeave,
    #[serde(rename = "compensatory")]
    Compensatory,
    #[serde(rename = "bereavement leave")]
    BereavementLeave,
}

impl LeaveType {
    pub const ALL: [LeaveType; 10] = [
        Self::Annual,
        Self::Sick,
        Self::Casual,
        Self::Maternity,
        Self::Paternity,
        Self::Unpaid,
        Self::Study,
        Self::EmergencyLeave,
        Self::Compensatory,
        Self::BereavementLeave,
    ];

    /// Normalized value as stored in the slot and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Sick => "sick",
            Self::Casual => "casual",
            Self::Maternity => "maternity",
            Self::Paternity => "paternity",
            Self::Unpaid => "unpaid",
            Self::Study => "study",
            Self::EmergencyLeave => "emergency leave",
            Self::Compensatory => "compensatory",
            Self::BereavementLeave => "bereavement leave",
        }
    }

    /// Matches a user-supplied value after trimming and lower-casing.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        Self::ALL.into_iter().find(|leave_type| leave_type.as_str() == normalized)
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LeaveApplicationId(pub i64);

impl fmt::Display for LeaveApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A completed form, ready to be written. Mirrors the five persisted columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLeaveApplication {
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
    pub leave_days: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveApplication {
    pub id: LeaveApplicationId,
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
    pub leave_days: i64,
}

impl LeaveApplication {
    pub fn from_new(id: LeaveApplicationId, application: NewLeaveApplication) -> Self {
        Self {
            id,
            leave_type: application.leave_type,
            start_date: application.start_date,
            end_date: application.end_date,
            reason: application.reason,
            leave_days: application.leave_days,
        }
    }
}
