use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::leave::{FormField, NewLeaveApplication};
use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotValue {
    Integer(i64),
    Text(String),
}

impl SlotValue {
    /// Converts an arbitrary JSON slot value as sent by the form driver.
    /// `null` means the slot is unset.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => None,
            serde_json::Value::String(text) => Some(Self::Text(text.clone())),
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(integer) => Some(Self::Integer(integer)),
                None => match number.as_f64() {
                    Some(float) if float.fract() == 0.0 && float.abs() < i64::MAX as f64 => {
                        Some(Self::Integer(float as i64))
                    }
                    _ => Some(Self::Text(number.to_string())),
                },
            },
            other => Some(Self::Text(other.to_string())),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Integer(integer) => serde_json::Value::from(*integer),
            Self::Text(text) => serde_json::Value::from(text.as_str()),
        }
    }

    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Integer(integer) => Cow::Owned(integer.to_string()),
            Self::Text(text) => Cow::Borrowed(text),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Text(_) => "text",
        }
    }
}

impl fmt::Display for SlotValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(integer) => write!(f, "{integer}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for SlotValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SlotValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for SlotValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// Slot update returned to the form driver. `None` asks the driver to re-request the field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotUpdate {
    pub field: FormField,
    pub value: Option<SlotValue>,
}

impl SlotUpdate {
    pub fn set(field: FormField, value: SlotValue) -> Self {
        Self { field, value: Some(value) }
    }

    pub fn unset(field: FormField) -> Self {
        Self { field, value: None }
    }

    pub fn is_accepted(&self) -> bool {
        self.value.is_some()
    }

    /// `{field: value_or_null}` as expected by the form driver.
    pub fn to_map(&self) -> BTreeMap<String, Option<SlotValue>> {
        BTreeMap::from([(self.field.slot_name().to_string(), self.value.clone())])
    }
}

/// Read-only view of the form driver's slots for one session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlotMap {
    values: BTreeMap<FormField, SlotValue>,
}

impl SlotMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: FormField, value: impl Into<SlotValue>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    pub fn insert(&mut self, field: FormField, value: SlotValue) {
        self.values.insert(field, value);
    }

    pub fn apply(&mut self, update: &SlotUpdate) {
        match &update.value {
            Some(value) => {
                self.values.insert(update.field, value.clone());
            }
            None => {
                self.values.remove(&update.field);
            }
        }
    }

    pub fn get(&self, field: FormField) -> Option<&SlotValue> {
        self.values.get(&field)
    }

    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL.into_iter().filter(|field| !self.values.contains_key(field)).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Builds the record to persist. Values are taken as the validators left them;
    /// only presence and shape are checked here.
    pub fn to_application(&self) -> Result<NewLeaveApplication, DomainError> {
        Ok(NewLeaveApplication {
            leave_type: self.text(FormField::LeaveType)?,
            start_date: self.text(FormField::StartDate)?,
            end_date: self.text(FormField::EndDate)?,
            reason: self.text(FormField::Reason)?,
            leave_days: self.integer(FormField::LeaveDays)?,
        })
    }

    fn require(&self, field: FormField) -> Result<&SlotValue, DomainError> {
        self.get(field).ok_or(DomainError::MissingSlot(field))
    }

    fn text(&self, field: FormField) -> Result<String, DomainError> {
        Ok(self.require(field)?.as_text().into_owned())
    }

    fn integer(&self, field: FormField) -> Result<i64, DomainError> {
        match self.require(field)? {
            SlotValue::Integer(integer) => Ok(*integer),
            other => Err(DomainError::SlotTypeMismatch {
                field,
                expected: "integer",
                found: other.kind(),
            }),
        }
    }
}

impl FromIterator<(FormField, SlotValue)> for SlotMap {
    fn from_iter<I: IntoIterator<Item = (FormField, SlotValue)>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}
