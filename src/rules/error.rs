//! Validation failures.
//!
//! A failed rule is an expected outcome, not a fault: nothing here is
//! ever raised as a panic.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::patterns::CharClass;

/// Why a rule failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    MissingRequiredValue,
    BelowMinLength,
    AboveMaxLength,
    InvalidEmailShape,
    MissingPasswordCharacterClass(CharClass),
    FieldsDoNotMatch,
}

/// Failure of a single rule on a single field.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct RuleError {
    /// Name of the rule inside its rule set (e.g. "required", "hasNumber")
    pub rule: &'static str,
    pub kind: FailureKind,
    /// Message to display; exactly one per failure
    pub message: String,
}

/// Failures grouped by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    #[serde(flatten)]
    pub fields: BTreeMap<String, Vec<RuleError>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, error: RuleError) {
        self.fields.entry(field.into()).or_default().push(error);
    }

    pub fn add_all(&mut self, field: impl Into<String>, errors: Vec<RuleError>) {
        if errors.is_empty() {
            return;
        }
        self.fields.entry(field.into()).or_default().extend(errors);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total number of failures across fields.
    pub fn len(&self) -> usize {
        self.fields.values().map(|v| v.len()).sum()
    }

    pub fn get(&self, field: &str) -> Option<&[RuleError]> {
        self.fields.get(field).map(|v| v.as_slice())
    }

    /// First message for `field`, if it has any failure.
    pub fn first_message(&self, field: &str) -> Option<&str> {
        self.get(field)
            .and_then(|errors| errors.first())
            .map(|e| e.message.as_str())
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed: {} error(s)", self.len())
    }
}

impl std::error::Error for ValidationErrors {}
