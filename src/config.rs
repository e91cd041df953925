//! Password policy configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{LENGTH_MAX_PASSWORD, LENGTH_MIN_PASSWORD, PASSWORD_EXPIRY_DAYS};
use crate::patterns::CharClass;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyConfigError {
    #[error("Minimum length {min} is greater than maximum length {max}")]
    InvertedLengthRange { min: usize, max: usize },
}

/// Which checks a password policy enables and the accepted length range.
///
/// Fields are public: a hand-built config is trusted as-is. Use
/// [`PasswordPolicyConfig::checked`] when the bounds come from outside.
///
/// Deserializes from camelCase keys; `hasLowercase`, `hasUppercase`,
/// `hasNumber` and `hasSpecialChar` are accepted as aliases, and missing
/// keys fall back to the default policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PasswordPolicyConfig {
    /// Carried as metadata only.
    pub enable_secure_password: bool,
    /// Carried as metadata only; expiry is never enforced here.
    pub password_expiry_days: u32,
    pub min_length: usize,
    pub max_length: usize,
    #[serde(alias = "hasLowercase")]
    pub require_lowercase: bool,
    #[serde(alias = "hasUppercase")]
    pub require_uppercase: bool,
    #[serde(alias = "hasNumber")]
    pub require_digit: bool,
    #[serde(alias = "hasSpecialChar")]
    pub require_special_char: bool,
}

impl Default for PasswordPolicyConfig {
    fn default() -> Self {
        Self {
            enable_secure_password: true,
            password_expiry_days: PASSWORD_EXPIRY_DAYS,
            min_length: LENGTH_MIN_PASSWORD,
            max_length: LENGTH_MAX_PASSWORD,
            require_lowercase: true,
            require_uppercase: true,
            require_digit: true,
            require_special_char: true,
        }
    }
}

impl PasswordPolicyConfig {
    /// Default policy with the given length range, rejecting `min > max`.
    pub fn checked(min_length: usize, max_length: usize) -> Result<Self, PolicyConfigError> {
        if min_length > max_length {
            return Err(PolicyConfigError::InvertedLengthRange {
                min: min_length,
                max: max_length,
            });
        }
        Ok(Self {
            min_length,
            max_length,
            ..Self::default()
        })
    }

    /// Returns a copy with the given class requirement switched on or off.
    pub fn with_class(mut self, class: CharClass, required: bool) -> Self {
        match class {
            CharClass::Lowercase => self.require_lowercase = required,
            CharClass::Uppercase => self.require_uppercase = required,
            CharClass::Digit => self.require_digit = required,
            CharClass::Special => self.require_special_char = required,
        }
        self
    }

    pub fn requires(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.require_lowercase,
            CharClass::Uppercase => self.require_uppercase,
            CharClass::Digit => self.require_digit,
            CharClass::Special => self.require_special_char,
        }
    }

    /// Required classes, in rule declaration order.
    pub fn enabled_classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL
            .into_iter()
            .filter(move |c| self.requires(*c))
    }

    pub(crate) fn resolve(config: Option<&PasswordPolicyConfig>) -> std::borrow::Cow<'_, Self> {
        match config {
            Some(c) => std::borrow::Cow::Borrowed(c),
            None => std::borrow::Cow::Owned(Self::default()),
        }
    }
}
