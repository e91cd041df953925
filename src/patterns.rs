//! Pattern set - character classes and email shape.
//!
//! The live checklist and the password rules both classify characters
//! through [`CharClass`], so the two can never disagree.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Characters accepted by [`CharClass::Special`]: the 32 ASCII punctuation marks.
///
/// Space, control characters and anything outside ASCII do not count.
pub const SPECIAL_CHARACTERS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// A character class a password policy can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharClass {
    /// All classes, in the order password rules are declared.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Special,
    ];

    /// Returns `true` if `c` belongs to this class.
    pub fn matches(self, c: char) -> bool {
        match self {
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Special => c.is_ascii_punctuation(),
        }
    }

    /// Returns `true` if `value` contains at least one character of this class.
    pub fn present_in(self, value: &str) -> bool {
        value.chars().any(|c| self.matches(c))
    }

    /// Rule name used for this class inside a password rule set.
    pub fn rule_name(self) -> &'static str {
        match self {
            CharClass::Lowercase => "hasLowercase",
            CharClass::Uppercase => "hasUppercase",
            CharClass::Digit => "hasNumber",
            CharClass::Special => "hasSpecialChar",
        }
    }
}

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        // local part of atext segments, dotted domain, TLD of 2+ chars
        Regex::new(
            r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
        )
        .expect("email pattern is a valid regex")
    })
}

/// Returns `true` if `value` has the shape of an email address.
pub fn is_email(value: &str) -> bool {
    email_regex().is_match(value)
}
