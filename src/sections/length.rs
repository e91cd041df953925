//! Length section - checks the password length against the policy range.

use crate::config::PasswordPolicyConfig;
use crate::evaluator::PolicyState;

/// Sets `is_length_valid` when the length (in characters) is within
/// `[min_length, max_length]`, both ends inclusive.
pub fn length_section(password: &str, config: &PasswordPolicyConfig, state: &mut PolicyState) {
    let len = password.chars().count();
    state.is_length_valid = len >= config.min_length && len <= config.max_length;
}
