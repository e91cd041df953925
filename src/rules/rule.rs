//! Rule descriptors: a predicate plus the message shown when it fails.

use serde::Serialize;

use super::error::{FailureKind, RuleError};
use crate::patterns::{CharClass, is_email};

/// Read access to the current values of a form.
///
/// Cross-field rules look their target up through this at check time.
pub trait FieldValues {
    /// Current value of `field`, or `None` if the form has no such field.
    fn value(&self, field: &str) -> Option<&str>;
}

/// What a rule checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "arg", rename_all = "camelCase")]
pub enum Check {
    /// Fails on absent, empty or whitespace-only values.
    Required,
    /// Fails when a non-empty value has fewer characters.
    MinLength(usize),
    /// Fails when a non-empty value has more characters.
    MaxLength(usize),
    /// Fails when a non-empty value is not shaped like an email.
    Email,
    /// Fails unless the value contains a character of the class.
    CharClass(CharClass),
    /// Fails unless the value equals the named field's current value.
    SameAs(String),
}

impl Check {
    pub fn passes(&self, value: Option<&str>, form: &dyn FieldValues) -> bool {
        let value = value.unwrap_or("");
        match self {
            Check::Required => !value.trim().is_empty(),
            Check::MinLength(min) => value.is_empty() || value.chars().count() >= *min,
            Check::MaxLength(max) => value.is_empty() || value.chars().count() <= *max,
            Check::Email => value.is_empty() || is_email(value),
            Check::CharClass(class) => class.present_in(value),
            Check::SameAs(target) => value == form.value(target).unwrap_or(""),
        }
    }

    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Check::Required => FailureKind::MissingRequiredValue,
            Check::MinLength(_) => FailureKind::BelowMinLength,
            Check::MaxLength(_) => FailureKind::AboveMaxLength,
            Check::Email => FailureKind::InvalidEmailShape,
            Check::CharClass(class) => FailureKind::MissingPasswordCharacterClass(*class),
            Check::SameAs(_) => FailureKind::FieldsDoNotMatch,
        }
    }
}

/// A named check with its failure message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub name: &'static str,
    pub check: Check,
    pub message: String,
}

impl Rule {
    pub fn new(name: &'static str, check: Check, message: impl Into<String>) -> Self {
        Self {
            name,
            check,
            message: message.into(),
        }
    }

    /// Runs the check, producing the failure if it does not pass.
    pub fn validate(&self, value: Option<&str>, form: &dyn FieldValues) -> Result<(), RuleError> {
        if self.check.passes(value, form) {
            return Ok(());
        }
        Err(RuleError {
            rule: self.name,
            kind: self.check.failure_kind(),
            message: self.message.clone(),
        })
    }
}

/// Ordered rules for one field. The first failing rule is the one displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule, replacing any earlier rule with the same name in place.
    pub fn push(&mut self, rule: Rule) {
        match self.rules.iter_mut().find(|r| r.name == rule.name) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }

    pub fn with(mut self, rule: Rule) -> Self {
        self.push(rule);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every failure for `value`, in declaration order.
    pub fn validate(&self, value: Option<&str>, form: &dyn FieldValues) -> Vec<RuleError> {
        self.rules
            .iter()
            .filter_map(|rule| rule.validate(value, form).err())
            .collect()
    }

    pub fn is_satisfied(&self, value: Option<&str>, form: &dyn FieldValues) -> bool {
        self.rules.iter().all(|rule| rule.check.passes(value, form))
    }
}

impl From<Rule> for RuleSet {
    fn from(rule: Rule) -> Self {
        Self { rules: vec![rule] }
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        let mut set = RuleSet::new();
        for rule in iter {
            set.push(rule);
        }
        set
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl FieldValues for std::collections::HashMap<String, String> {
    fn value(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_required_rejects_blank() {
        let empty = form(&[]);
        assert!(!Check::Required.passes(None, &empty));
        assert!(!Check::Required.passes(Some(""), &empty));
        assert!(!Check::Required.passes(Some("   "), &empty));
        assert!(Check::Required.passes(Some(" a "), &empty));
    }

    #[test]
    fn test_length_bounds_skip_empty_values() {
        let empty = form(&[]);
        assert!(Check::MinLength(3).passes(Some(""), &empty));
        assert!(!Check::MinLength(3).passes(Some("ab"), &empty));
        assert!(Check::MinLength(3).passes(Some("abc"), &empty));
        assert!(Check::MaxLength(3).passes(None, &empty));
        assert!(!Check::MaxLength(3).passes(Some("abcd"), &empty));
    }

    #[test]
    fn test_char_class_fails_on_empty() {
        let empty = form(&[]);
        assert!(!Check::CharClass(CharClass::Digit).passes(Some(""), &empty));
        assert!(Check::CharClass(CharClass::Digit).passes(Some("a1"), &empty));
    }

    #[test]
    fn test_same_as_reads_target_at_check_time() {
        let check = Check::SameAs("password".to_string());
        let mut values = form(&[("password", "Secret1!")]);
        assert!(check.passes(Some("Secret1!"), &values));

        values.insert("password".to_string(), "Changed1!".to_string());
        assert!(!check.passes(Some("Secret1!"), &values));
    }

    #[test]
    fn test_same_as_unknown_target_compares_to_empty() {
        let check = Check::SameAs("missing".to_string());
        let values = form(&[]);
        assert!(check.passes(Some(""), &values));
        assert!(!check.passes(Some("x"), &values));
    }

    #[test]
    fn test_rule_set_preserves_order_and_replaces_by_name() {
        let set = RuleSet::new()
            .with(Rule::new("required", Check::Required, "a"))
            .with(Rule::new("minLength", Check::MinLength(3), "b"))
            .with(Rule::new("required", Check::Required, "c"));

        assert_eq!(set.names().collect::<Vec<_>>(), vec!["required", "minLength"]);
        assert_eq!(set.get("required").map(|r| r.message.as_str()), Some("c"));
    }

    #[test]
    fn test_rule_set_reports_failures_in_order() {
        let set: RuleSet = [
            Rule::new("required", Check::Required, "required"),
            Rule::new("hasNumber", Check::CharClass(CharClass::Digit), "number"),
        ]
        .into_iter()
        .collect();

        let values = form(&[]);
        let errors = set.validate(None, &values);
        let messages: Vec<_> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["required", "number"]);
        assert_eq!(errors[1].kind, FailureKind::MissingPasswordCharacterClass(CharClass::Digit));
        assert!(set.is_satisfied(Some("7"), &values));
    }
}
