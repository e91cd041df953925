//! Validation session - field state and the facade over it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::data::FormData;
use crate::rules::{RuleError, RuleSet, ValidationErrors};

/// Rule sets keyed by the field they validate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormRules {
    fields: BTreeMap<String, RuleSet>,
}

impl FormRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `rules` to `field`, replacing anything bound before.
    pub fn field(mut self, field: impl Into<String>, rules: impl Into<RuleSet>) -> Self {
        self.fields.insert(field.into(), rules.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&RuleSet> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleSet)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Session options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationOptions {
    /// Mark a field touched as soon as its value changes.
    pub auto_dirty: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self { auto_dirty: true }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct FieldState {
    dirty: bool,
}

/// Read-only snapshot of one bound field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView<'a> {
    pub name: &'a str,
    /// Touched, either explicitly or by a value change under `auto_dirty`.
    pub dirty: bool,
    /// Some rule currently fails, touched or not.
    pub invalid: bool,
    /// Failures to display: empty until the field is touched.
    pub errors: Vec<RuleError>,
}

impl FieldView<'_> {
    /// Touched and failing.
    pub fn errored(&self) -> bool {
        self.dirty && self.invalid
    }
}

/// Binds rule sets to a form's data and tracks which fields were touched.
///
/// Validity is always derived from the current data, so a cross-field rule
/// sees edits to its target the next time it is read.
#[derive(Debug, Clone)]
pub struct ValidationSession {
    rules: FormRules,
    data: FormData,
    options: ValidationOptions,
    state: BTreeMap<String, FieldState>,
}

/// Creates a session for `rules` over `data`.
pub fn use_form_validation(
    rules: FormRules,
    data: FormData,
    options: ValidationOptions,
) -> ValidationSession {
    ValidationSession::bind(rules, data, options)
}

impl ValidationSession {
    pub fn bind(rules: FormRules, data: FormData, options: ValidationOptions) -> Self {
        let state = rules
            .fields()
            .map(|name| (name.to_string(), FieldState::default()))
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "validation session bound: {} field(s), auto_dirty={}",
            rules.fields.len(),
            options.auto_dirty
        );

        Self {
            rules,
            data,
            options,
            state,
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn rules(&self) -> &FormRules {
        &self.rules
    }

    pub fn options(&self) -> ValidationOptions {
        self.options
    }

    pub fn into_data(self) -> FormData {
        self.data
    }

    /// Writes a field value, touching the field under `auto_dirty` when it changed.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        let changed = self.data.set(field, value);
        if changed && self.options.auto_dirty {
            if let Some(state) = self.state.get_mut(field) {
                state.dirty = true;
            }
        }
    }

    fn failures(&self, field: &str, rules: &RuleSet) -> Vec<RuleError> {
        rules.validate(self.data.get(field), &self.data)
    }

    fn is_field_invalid(&self, field: &str, rules: &RuleSet) -> bool {
        !rules.is_satisfied(self.data.get(field), &self.data)
    }

    fn is_dirty(&self, field: &str) -> bool {
        self.state.get(field).is_some_and(|s| s.dirty)
    }

    /// Snapshot of a bound field, `None` if `name` is not bound.
    pub fn field<'a>(&'a self, name: &'a str) -> Option<FieldView<'a>> {
        let rules = self.rules.get(name)?;
        let dirty = self.is_dirty(name);
        let failures = self.failures(name, rules);
        Some(FieldView {
            name,
            dirty,
            invalid: !failures.is_empty(),
            errors: if dirty { failures } else { Vec::new() },
        })
    }

    /// `true` when no bound field has a failing rule.
    pub fn is_valid(&self) -> bool {
        self.rules
            .iter()
            .all(|(name, rules)| !self.is_field_invalid(name, rules))
    }

    /// `true` when some touched field has a failing rule.
    pub fn has_errors(&self) -> bool {
        self.rules
            .iter()
            .any(|(name, rules)| self.is_dirty(name) && self.is_field_invalid(name, rules))
    }

    /// First displayed error of `field`, or an empty string.
    ///
    /// Unknown fields read as error-free.
    pub fn get_error(&self, field: &str) -> String {
        let Some(rules) = self.rules.get(field) else {
            #[cfg(feature = "tracing")]
            tracing::debug!("get_error on unbound field: {}", field);
            return String::new();
        };
        if !self.is_dirty(field) {
            return String::new();
        }
        rules
            .iter()
            .find_map(|rule| rule.validate(self.data.get(field), &self.data).err())
            .map(|e| e.message)
            .unwrap_or_default()
    }

    /// Whether `field` is touched and failing. Unknown fields read as `false`.
    pub fn has_error(&self, field: &str) -> bool {
        match self.rules.get(field) {
            Some(rules) => self.is_dirty(field) && self.is_field_invalid(field, rules),
            None => false,
        }
    }

    /// Displayed errors of every touched field.
    pub fn errors(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for (name, rules) in self.rules.iter() {
            if self.is_dirty(name) {
                errors.add_all(name, self.failures(name, rules));
            }
        }
        errors
    }

    /// Touches every bound field and reports whether the form is valid.
    pub fn validate_form(&mut self) -> bool {
        for state in self.state.values_mut() {
            state.dirty = true;
        }
        let valid = self.is_valid();

        #[cfg(feature = "tracing")]
        tracing::debug!("form validated: valid={}", valid);

        valid
    }

    /// [`ValidationSession::validate_form`] for callers running on an executor.
    ///
    /// Every rule here is synchronous; this yields once so the caller's
    /// pending UI work runs before the result is read.
    #[cfg(feature = "async")]
    pub async fn validate_form_async(&mut self) -> bool {
        tokio::task::yield_now().await;
        self.validate_form()
    }

    /// Clears touched state on every field. Data is kept.
    pub fn reset_validation(&mut self) {
        for state in self.state.values_mut() {
            state.dirty = false;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("validation state reset");
    }

    /// Marks `field` touched. No-op for unknown fields.
    pub fn touch(&mut self, field: &str) {
        match self.state.get_mut(field) {
            Some(state) => state.dirty = true,
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!("touch on unbound field ignored: {}", field);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{EmailOptions, create_validation};

    fn register_session(options: ValidationOptions) -> ValidationSession {
        let v = create_validation();
        let rules = FormRules::new()
            .field("email", v.email(EmailOptions::default()))
            .field("password", v.password(None))
            .field("confirm_password", v.confirm_password("password"));
        use_form_validation(rules, FormData::new(), options)
    }

    #[test]
    fn test_fresh_session_invalid_without_errors() {
        let session = register_session(ValidationOptions::default());
        assert!(!session.is_valid());
        assert!(!session.has_errors());
        assert_eq!(session.get_error("email"), "");
        assert!(!session.has_error("email"));

        let view = session.field("email").expect("bound field");
        assert!(view.invalid);
        assert!(!view.dirty);
        assert!(!view.errored());
        assert!(view.errors.is_empty());
    }

    #[test]
    fn test_auto_dirty_marks_on_change() {
        let mut session = register_session(ValidationOptions::default());
        session.set("email", "not-an-email");
        assert!(session.has_error("email"));
        assert_eq!(session.get_error("email"), "Please enter a valid email address");
        assert!(session.has_errors());
        assert!(!session.has_error("password"));
    }

    #[test]
    fn test_without_auto_dirty_needs_touch() {
        let mut session = register_session(ValidationOptions { auto_dirty: false });
        session.set("email", "not-an-email");
        assert!(!session.has_error("email"));

        session.touch("email");
        assert!(session.has_error("email"));
    }

    #[test]
    fn test_unknown_field_lookups() {
        let mut session = register_session(ValidationOptions::default());
        assert_eq!(session.get_error("nickname"), "");
        assert!(!session.has_error("nickname"));
        assert!(session.field("nickname").is_none());
        session.touch("nickname");
        assert!(!session.has_errors());
    }

    #[test]
    fn test_validate_form_touches_all() {
        let mut session = register_session(ValidationOptions::default());
        assert!(!session.validate_form());
        assert_eq!(session.get_error("email"), "Email is required");
        assert_eq!(session.get_error("password"), "Password is required");
        assert_eq!(session.get_error("confirm_password"), "Password is required");
        assert_eq!(session.errors().fields.len(), 3);
    }

    #[test]
    fn test_valid_form() {
        let mut session = register_session(ValidationOptions::default());
        session.set("email", "user@example.com");
        session.set("password", "P@ssword123");
        session.set("confirm_password", "P@ssword123");
        assert!(session.is_valid());
        assert!(session.validate_form());
        assert!(!session.has_errors());
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_same_as_follows_target_edits() {
        let mut session = register_session(ValidationOptions::default());
        session.set("password", "Secret1!");
        session.set("confirm_password", "Secret1!");
        assert!(!session.has_error("confirm_password"));

        session.set("password", "Secret2!");
        assert!(session.has_error("confirm_password"));
        assert_eq!(session.get_error("confirm_password"), "Passwords do not match");

        session.set("confirm_password", "Secret2!");
        assert!(!session.has_error("confirm_password"));
    }

    #[test]
    fn test_reset_keeps_data() {
        let mut session = register_session(ValidationOptions::default());
        session.set("email", "bad");
        session.validate_form();
        assert!(session.has_errors());

        session.reset_validation();
        assert!(!session.has_errors());
        assert_eq!(session.get_error("email"), "");
        assert_eq!(session.data().get("email"), Some("bad"));
        assert!(!session.is_valid());
    }

    #[test]
    fn test_unchanged_value_does_not_touch() {
        let data = FormData::new().with("email", "user@example.com");
        let v = create_validation();
        let rules = FormRules::new().field("email", v.email(EmailOptions::default()));
        let mut session = use_form_validation(rules, data, ValidationOptions::default());

        session.set("email", "user@example.com");
        assert!(!session.field("email").expect("bound").dirty);
    }

    #[test]
    fn test_options_deserialize() {
        let opts: ValidationOptions = serde_json::from_str(r#"{"autoDirty": false}"#).unwrap();
        assert!(!opts.auto_dirty);
        let opts: ValidationOptions = serde_json::from_str("{}").unwrap();
        assert!(opts.auto_dirty);
    }
}
