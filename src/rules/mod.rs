//! Declarative validation rules and the builder that produces them.

mod builder;
mod error;
mod rule;

pub use builder::{EmailOptions, Validation, create_validation};
pub use error::{FailureKind, RuleError, ValidationErrors};
pub use rule::{Check, FieldValues, Rule, RuleSet};
