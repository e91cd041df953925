//! Form validation for the login and register forms
//!
//! This library provides composable validation rules, a session that tracks
//! per-field touched state and errors, and a live password policy checklist.
//!
//! # Features
//!
//! - `async` (default): Enables the channel-driven policy watcher and
//!   `ValidationSession::validate_form_async`
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use form_guard::{create_validation, evaluate, FormData, FormRules, ValidationOptions, use_form_validation};
//!
//! let v = create_validation();
//! let rules = FormRules::new()
//!     .field("email", v.email(Default::default()))
//!     .field("password", v.password(None))
//!     .field("confirm_password", v.confirm_password("password"));
//!
//! let mut session = use_form_validation(rules, FormData::new(), ValidationOptions::default());
//! session.set("email", "user@example.com");
//! session.set("password", "P@ssword123");
//! session.set("confirm_password", "P@ssword123");
//! assert!(session.validate_form());
//!
//! // Live checklist facts
//! let state = evaluate(Some("password123"), None);
//! assert!(!state.has_uppercase);
//! ```

// Internal modules
mod config;
mod constants;
mod evaluator;
mod form;
mod forms;
mod messages;
mod patterns;
mod rules;
mod sections;


// Public API
pub use config::{PasswordPolicyConfig, PolicyConfigError};
pub use constants::{
    LENGTH_MAX_DEFAULT, LENGTH_MAX_PASSWORD, LENGTH_MIN_DEFAULT, LENGTH_MIN_PASSWORD,
    PASSWORD_EXPIRY_DAYS,
};
pub use evaluator::{PolicyState, PolicyTracker, evaluate, evaluate_secret};
pub use form::{
    FieldView, FormData, FormRules, ValidationOptions, ValidationSession, use_form_validation,
};
pub use forms::{
    FIELD_CONFIRM_PASSWORD, FIELD_EMAIL, FIELD_PASSWORD, RegisterForm, login_rules,
    register_rules,
};
pub use patterns::{CharClass, SPECIAL_CHARACTERS, is_email};
pub use rules::{
    Check, EmailOptions, FailureKind, FieldValues, Rule, RuleError, RuleSet, Validation,
    ValidationErrors, create_validation,
};

#[cfg(feature = "async")]
pub use evaluator::{spawn_policy_watcher, watch_password_policy};

/// Default message catalog.
pub mod catalog {
    pub use crate::messages::*;
}
