//! Message catalog for validation failures.

use crate::patterns::CharClass;

pub const REQUIRED: &str = "This field is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL: &str = "Please enter a valid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_HAS_LOWERCASE: &str = "Password must contain at least one lowercase letter";
pub const PASSWORD_HAS_UPPERCASE: &str = "Password must contain at least one uppercase letter";
pub const PASSWORD_HAS_NUMBER: &str = "Password must contain at least one number";
pub const PASSWORD_HAS_SPECIAL_CHAR: &str =
    "Password must contain at least one special character";
pub const PASSWORD_MATCH_CONFIRM_PASSWORD: &str = "Passwords do not match";
pub const FIELDS_MUST_MATCH: &str = "Fields must match";

pub fn min_length(min: usize) -> String {
    format!("Must be at least {} characters", min)
}

pub fn max_length(max: usize) -> String {
    format!("Must be at most {} characters", max)
}

pub fn password_min_length(min: usize) -> String {
    format!("Password must be at least {} characters", min)
}

pub fn password_max_length(max: usize) -> String {
    format!("Password must be at most {} characters", max)
}

/// Message for a password missing a character class.
pub fn password_missing(class: CharClass) -> &'static str {
    match class {
        CharClass::Lowercase => PASSWORD_HAS_LOWERCASE,
        CharClass::Uppercase => PASSWORD_HAS_UPPERCASE,
        CharClass::Digit => PASSWORD_HAS_NUMBER,
        CharClass::Special => PASSWORD_HAS_SPECIAL_CHAR,
    }
}
