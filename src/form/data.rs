//! Form data record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::rules::FieldValues;

/// Current values of a form's fields, keyed by field name.
///
/// A field that was never set reads as absent, which every rule treats
/// like an empty string. `Debug` prints field names only, since values
/// include passwords.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData {
    values: BTreeMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Writes `value` into `field`. Returns `true` if the stored value changed.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) -> bool {
        let value = value.into();
        match self.values.entry(field.into()) {
            std::collections::btree_map::Entry::Occupied(mut slot) => {
                if *slot.get() == value {
                    return false;
                }
                slot.insert(value);
                true
            }
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl FieldValues for FormData {
    fn value(&self, field: &str) -> Option<&str> {
        self.get(field)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = FormData::new();
        for (field, value) in iter {
            data.set(field, value);
        }
        data
    }
}

impl fmt::Debug for FormData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.values.keys().map(|k| (k, "[REDACTED]")))
            .finish()
    }
}
