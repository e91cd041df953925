//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use crate::config::PasswordPolicyConfig;
use crate::evaluator::PolicyState;
use crate::patterns::CharClass;

/// Records which character classes appear in the password.
///
/// Presence is reported for every class, whether or not the policy requires
/// it; the checklist decides what to show.
pub fn character_variety_section(
    password: &str,
    _config: &PasswordPolicyConfig,
    state: &mut PolicyState,
) {
    state.has_uppercase = CharClass::Uppercase.present_in(password);
    state.has_lowercase = CharClass::Lowercase.present_in(password);
    state.has_number = CharClass::Digit.present_in(password);
    state.has_special_char = CharClass::Special.present_in(password);
}
