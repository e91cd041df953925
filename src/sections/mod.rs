//! Password policy sections
//!
//! Each section derives part of the [`PolicyState`] from the password text.

mod length;
mod variety;

pub use length::length_section;
pub use variety::character_variety_section;

use crate::config::PasswordPolicyConfig;
use crate::evaluator::PolicyState;

/// Signature shared by all sections.
/// Sections only write the facts they own and never read the others.
pub type Section = fn(&str, &PasswordPolicyConfig, &mut PolicyState);
