//! Rule builder - the fixed set of rules used by the login and register forms.

use super::rule::{Check, Rule, RuleSet};
use crate::config::PasswordPolicyConfig;
use crate::constants::{LENGTH_MAX_DEFAULT, LENGTH_MIN_DEFAULT};
use crate::evaluator::PolicyTracker;
use crate::messages;

/// Options for [`Validation::email`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailOptions {
    pub is_required: bool,
}

impl Default for EmailOptions {
    fn default() -> Self {
        Self { is_required: true }
    }
}

/// Builder namespace returned by [`create_validation`].
///
/// Stateless: every method returns a fresh descriptor that can be shared
/// between forms.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validation;

/// Creates the rule builder namespace.
pub fn create_validation() -> Validation {
    Validation
}

// An empty override falls back to the catalog, same as an absent one.
fn pick(message: Option<&str>, default: impl FnOnce() -> String) -> String {
    match message {
        Some(m) if !m.is_empty() => m.to_string(),
        _ => default(),
    }
}

impl Validation {
    pub fn required(&self, message: Option<&str>) -> Rule {
        Rule::new(
            "required",
            Check::Required,
            pick(message, || messages::REQUIRED.to_string()),
        )
    }

    /// Minimum length rule; `None` uses the generic default bound.
    pub fn min_length(&self, min: Option<usize>, message: Option<&str>) -> Rule {
        let min = min.unwrap_or(LENGTH_MIN_DEFAULT);
        Rule::new(
            "minLength",
            Check::MinLength(min),
            pick(message, || messages::min_length(min)),
        )
    }

    /// Maximum length rule; `None` uses the generic default bound.
    pub fn max_length(&self, max: Option<usize>, message: Option<&str>) -> Rule {
        let max = max.unwrap_or(LENGTH_MAX_DEFAULT);
        Rule::new(
            "maxLength",
            Check::MaxLength(max),
            pick(message, || messages::max_length(max)),
        )
    }

    /// Email rules: an optional required check plus the shape check.
    pub fn email(&self, opts: EmailOptions) -> RuleSet {
        let mut rules = RuleSet::new();
        if opts.is_required {
            rules.push(Rule::new(
                "required",
                Check::Required,
                messages::EMAIL_REQUIRED,
            ));
        }
        rules.push(Rule::new("policy", Check::Email, messages::EMAIL));
        rules
    }

    /// Password rules for `config` (the default policy when `None`).
    ///
    /// Order: required, one rule per enabled character class, then the
    /// length bounds. Class rules share [`crate::CharClass`] with the live
    /// checklist.
    pub fn password(&self, config: Option<&PasswordPolicyConfig>) -> RuleSet {
        let config = PasswordPolicyConfig::resolve(config);

        let mut rules = RuleSet::new().with(Rule::new(
            "required",
            Check::Required,
            messages::PASSWORD_REQUIRED,
        ));

        // Only add class rules that the policy enables
        for class in config.enabled_classes() {
            rules.push(Rule::new(
                class.rule_name(),
                Check::CharClass(class),
                messages::password_missing(class),
            ));
        }

        rules.push(Rule::new(
            "minLength",
            Check::MinLength(config.min_length),
            messages::password_min_length(config.min_length),
        ));
        rules.push(Rule::new(
            "maxLength",
            Check::MaxLength(config.max_length),
            messages::password_max_length(config.max_length),
        ));

        rules
    }

    /// Confirmation rules: required plus equality with `target`.
    pub fn confirm_password(&self, target: impl Into<String>) -> RuleSet {
        RuleSet::new()
            .with(Rule::new(
                "required",
                Check::Required,
                messages::PASSWORD_REQUIRED,
            ))
            .with(Rule::new(
                "sameAs",
                Check::SameAs(target.into()),
                messages::PASSWORD_MATCH_CONFIRM_PASSWORD,
            ))
    }

    /// Equality with the current value of the field named `target`.
    ///
    /// The target is read each time validation runs, never snapshotted.
    pub fn same_as(&self, target: impl Into<String>, message: Option<&str>) -> Rule {
        Rule::new(
            "sameAs",
            Check::SameAs(target.into()),
            pick(message, || messages::FIELDS_MUST_MATCH.to_string()),
        )
    }

    /// Live checklist tracker for a password field.
    pub fn policy(&self, config: Option<PasswordPolicyConfig>) -> PolicyTracker {
        PolicyTracker::new(config)
    }
}
