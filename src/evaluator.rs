//! Password policy evaluator - live checklist facts.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

#[cfg(feature = "async")]
use tokio::sync::watch;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::PasswordPolicyConfig;
use crate::patterns::CharClass;
use crate::sections::{Section, character_variety_section, length_section};

/// The five checklist facts for the current password.
///
/// Each fact is independent of the others. A fresh state, and the state of
/// an empty password, has every fact `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyState {
    pub is_length_valid: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_number: bool,
    pub has_special_char: bool,
}

impl PolicyState {
    /// Presence fact for a character class.
    pub fn has(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.has_lowercase,
            CharClass::Uppercase => self.has_uppercase,
            CharClass::Digit => self.has_number,
            CharClass::Special => self.has_special_char,
        }
    }

    /// Number of facts currently `true`.
    pub fn met_count(&self) -> usize {
        [
            self.is_length_valid,
            self.has_uppercase,
            self.has_lowercase,
            self.has_number,
            self.has_special_char,
        ]
        .iter()
        .filter(|&&b| b)
        .count()
    }

    /// `true` when the length is valid and every class `config` requires is present.
    pub fn is_satisfied(&self, config: &PasswordPolicyConfig) -> bool {
        self.is_length_valid && config.enabled_classes().all(|c| self.has(c))
    }
}

/// Derives the checklist facts for `password` under `config`.
///
/// An empty or absent password yields the all-`false` state. An absent
/// config falls back to the default policy.
pub fn evaluate(password: Option<&str>, config: Option<&PasswordPolicyConfig>) -> PolicyState {
    let mut state = PolicyState::default();

    let Some(pwd) = password.filter(|p| !p.is_empty()) else {
        return state;
    };
    let resolved = PasswordPolicyConfig::resolve(config);
    let config: &PasswordPolicyConfig = &resolved;

    // Orchestrator: every section runs, each owns its own facts
    let sections: [(&str, Section); 2] = [
        ("length", length_section),
        ("variety", character_variety_section),
    ];

    for (_section_name, section_fn) in sections {
        #[cfg(feature = "tracing")]
        tracing::trace!("running policy section: {}", _section_name);

        section_fn(pwd, config, &mut state);
    }

    state
}

/// [`evaluate`] for a password held as a secret.
pub fn evaluate_secret(
    password: Option<&SecretString>,
    config: Option<&PasswordPolicyConfig>,
) -> PolicyState {
    evaluate(password.map(|p| p.expose_secret()), config)
}

/// Synchronous observer of a password field.
///
/// Every call to [`PolicyTracker::observe`] recomputes the whole state from
/// the new value and replaces the previous one. Taking `&mut self` keeps a
/// single writer.
#[derive(Debug, Clone, Default)]
pub struct PolicyTracker {
    config: PasswordPolicyConfig,
    state: PolicyState,
}

impl PolicyTracker {
    pub fn new(config: Option<PasswordPolicyConfig>) -> Self {
        Self {
            config: config.unwrap_or_default(),
            state: PolicyState::default(),
        }
    }

    pub fn config(&self) -> &PasswordPolicyConfig {
        &self.config
    }

    pub fn state(&self) -> PolicyState {
        self.state
    }

    /// Recomputes the state for the new password value.
    ///
    /// Returns `true` if any fact changed.
    pub fn observe(&mut self, password: Option<&SecretString>) -> bool {
        let next = evaluate_secret(password, Some(&self.config));
        let changed = next != self.state;
        self.state = next;

        #[cfg(feature = "tracing")]
        if changed {
            tracing::debug!(
                "password policy state updated: {}/5 facts met",
                next.met_count()
            );
        }

        changed
    }

    /// `true` when the current password satisfies the tracked policy.
    pub fn is_satisfied(&self) -> bool {
        self.state.is_satisfied(&self.config)
    }
}

/// Watches a password channel and publishes a fresh [`PolicyState`] on every change.
///
/// The current value is evaluated once on entry. The loop ends when `token`
/// is cancelled or every password sender is dropped.
#[cfg(feature = "async")]
pub async fn watch_password_policy(
    mut password: watch::Receiver<SecretString>,
    config: PasswordPolicyConfig,
    tx: watch::Sender<PolicyState>,
    token: CancellationToken,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("password policy watcher started");

    let initial = evaluate_secret(Some(&*password.borrow_and_update()), Some(&config));
    tx.send_replace(initial);

    loop {
        tokio::select! {
            _ = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::info!("password policy watcher cancelled");
                break;
            }
            changed = password.changed() => {
                if changed.is_err() {
                    #[cfg(feature = "tracing")]
                    tracing::info!("password channel closed, stopping policy watcher");
                    break;
                }
                let state = evaluate_secret(Some(&*password.borrow_and_update()), Some(&config));
                tx.send_replace(state);
            }
        }
    }
}

/// Spawns [`watch_password_policy`] on the current runtime.
///
/// Returns the receiver for the derived state and the task handle.
#[cfg(feature = "async")]
pub fn spawn_policy_watcher(
    password: watch::Receiver<SecretString>,
    config: Option<PasswordPolicyConfig>,
    token: CancellationToken,
) -> (watch::Receiver<PolicyState>, tokio::task::JoinHandle<()>) {
    let (tx, rx) = watch::channel(PolicyState::default());
    let handle = tokio::spawn(watch_password_policy(
        password,
        config.unwrap_or_default(),
        tx,
        token,
    ));
    (rx, handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_evaluate_empty_and_absent() {
        assert_eq!(evaluate(Some(""), None), PolicyState::default());
        assert_eq!(evaluate(None, None), PolicyState::default());
    }

    #[test]
    fn test_evaluate_short_password() {
        let state = evaluate(Some("Pass1!"), None);
        assert_eq!(
            state,
            PolicyState {
                is_length_valid: false,
                has_uppercase: true,
                has_lowercase: true,
                has_number: true,
                has_special_char: true,
            }
        );
        assert!(!state.is_satisfied(&PasswordPolicyConfig::default()));
    }

    #[test]
    fn test_evaluate_missing_upper_and_special() {
        let state = evaluate(Some("password123"), None);
        assert!(state.is_length_valid);
        assert!(state.has_lowercase);
        assert!(state.has_number);
        assert!(!state.has_uppercase);
        assert!(!state.has_special_char);
        assert_eq!(state.met_count(), 3);
    }

    #[test]
    fn test_evaluate_all_facts() {
        let state = evaluate(Some("P@ssword123"), None);
        assert_eq!(state.met_count(), 5);
        assert!(state.is_satisfied(&PasswordPolicyConfig::default()));
    }

    #[test]
    fn test_satisfied_ignores_disabled_classes() {
        let config = PasswordPolicyConfig::default()
            .with_class(CharClass::Uppercase, false)
            .with_class(CharClass::Special, false);
        let state = evaluate(Some("password123"), Some(&config));
        assert!(!state.has_uppercase);
        assert!(state.is_satisfied(&config));
    }

    #[test]
    fn test_tracker_recomputes_and_resets() {
        let mut tracker = PolicyTracker::new(None);
        assert_eq!(tracker.state(), PolicyState::default());

        assert!(tracker.observe(Some(&secret("P@ssword123"))));
        assert_eq!(tracker.state().met_count(), 5);
        assert!(tracker.is_satisfied());

        // same facts, no change reported
        assert!(!tracker.observe(Some(&secret("P@ssword124"))));

        assert!(tracker.observe(Some(&secret("abc"))));
        assert_eq!(
            tracker.state(),
            PolicyState {
                has_lowercase: true,
                ..PolicyState::default()
            }
        );

        assert!(tracker.observe(Some(&secret(""))));
        assert_eq!(tracker.state(), PolicyState::default());

        tracker.observe(Some(&secret("A")));
        tracker.observe(None);
        assert_eq!(tracker.state(), PolicyState::default());
    }

    #[test]
    fn test_tracker_uses_supplied_config() {
        let config = PasswordPolicyConfig::checked(2, 4).unwrap();
        let mut tracker = PolicyTracker::new(Some(config.clone()));
        assert_eq!(tracker.config(), &config);
        tracker.observe(Some(&secret("Ab1!")));
        assert!(tracker.is_satisfied());
        tracker.observe(Some(&secret("Ab1!x")));
        assert!(!tracker.state().is_length_valid);
    }

    #[test]
    fn test_state_serializes_camel_case() {
        let json = serde_json::to_value(evaluate(Some("P@ssword123"), None)).unwrap();
        assert_eq!(json["isLengthValid"], true);
        assert_eq!(json["hasSpecialChar"], true);
    }
}
