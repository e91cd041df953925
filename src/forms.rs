//! Rule presets for the two forms the application routes to: login and register.

use secrecy::SecretString;

use crate::config::PasswordPolicyConfig;
use crate::evaluator::{PolicyState, PolicyTracker};
use crate::form::{FormData, FormRules, ValidationOptions, ValidationSession};
use crate::messages;
use crate::rules::{EmailOptions, Validation};

pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_CONFIRM_PASSWORD: &str = "confirm_password";

/// Login: a well-formed email and a non-empty password.
///
/// The password policy is not applied on login; accounts created under an
/// older policy must still be able to sign in.
pub fn login_rules(v: &Validation) -> FormRules {
    FormRules::new()
        .field(FIELD_EMAIL, v.email(EmailOptions::default()))
        .field(FIELD_PASSWORD, v.required(Some(messages::PASSWORD_REQUIRED)))
}

/// Register: email, a password under `config`, and its confirmation.
pub fn register_rules(v: &Validation, config: &PasswordPolicyConfig) -> FormRules {
    FormRules::new()
        .field(FIELD_EMAIL, v.email(EmailOptions::default()))
        .field(FIELD_PASSWORD, v.password(Some(config)))
        .field(FIELD_CONFIRM_PASSWORD, v.confirm_password(FIELD_PASSWORD))
}

/// Register form wiring: one input path feeding both the validation session
/// and the live password checklist.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    session: ValidationSession,
    policy: PolicyTracker,
}

impl RegisterForm {
    pub fn new(v: &Validation, config: Option<PasswordPolicyConfig>, options: ValidationOptions) -> Self {
        let config = config.unwrap_or_default();
        let rules = register_rules(v, &config);
        Self {
            session: ValidationSession::bind(rules, FormData::new(), options),
            policy: v.policy(Some(config)),
        }
    }

    /// Applies a UI input event to `field`.
    pub fn input(&mut self, field: &str, value: impl Into<String>) {
        let value = value.into();
        if field == FIELD_PASSWORD {
            let secret = SecretString::new(value.clone().into());
            self.policy.observe(Some(&secret));
        }
        self.session.set(field, value);
    }

    pub fn checklist(&self) -> PolicyState {
        self.policy.state()
    }

    pub fn session(&self) -> &ValidationSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut ValidationSession {
        &mut self.session
    }
}
