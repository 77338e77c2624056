//! Form state machine
//!
//! `reduce` is the pure transition function. `FormMachine` owns a config and
//! the current state and is what the UI talks to.

use super::field::FieldConfig;
use super::validation::{validate, Violation};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Where the form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Pristine,
    Tainted,
    Submitting,
    Accepted,
    Rejected,
}

/// Result of the last completed submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    None,
    Success,
    Failure,
}

/// What a submission gateway answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayReply {
    Success { echoed_value: String },
    Failure { reason: String },
}

/// Inputs to the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Input(String),
    SubmitRequested,
    Settled { attempt: u64, reply: GatewayReply },
    Reset,
}

/// Snapshot of a single-field form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub value: String,
    pub tainted: bool,
    pub valid: bool,
    pub submitted: bool,
    pub last_outcome: Outcome,
    pub phase: FormPhase,
    /// Success or error message from the last settlement
    pub message: Option<String>,
    pub violations: BTreeSet<Violation>,
    /// Bumped on every submit; settlements carrying another number are
    /// dropped. Reset keeps it, so a reset can never collide with a reply
    /// still in flight.
    pub attempt: u64,
}

impl FormState {
    pub fn new(config: &FieldConfig) -> Self {
        Self::initial(config, 0)
    }

    fn initial(config: &FieldConfig, attempt: u64) -> Self {
        let validation = validate(&config.initial_value, config);
        Self {
            value: config.initial_value.clone(),
            tainted: false,
            valid: validation.is_valid(),
            submitted: false,
            last_outcome: Outcome::None,
            phase: FormPhase::Pristine,
            message: None,
            violations: validation.violations,
            attempt,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        self.tainted && self.valid && !self.is_submitting()
    }
}

/// Pure transition function
pub fn reduce(config: &FieldConfig, state: FormState, event: FormEvent) -> FormState {
    match event {
        FormEvent::Input(value) => {
            let validation = validate(&value, config);
            let phase = if state.is_submitting() {
                FormPhase::Submitting
            } else {
                FormPhase::Tainted
            };
            FormState {
                value,
                tainted: true,
                valid: validation.is_valid(),
                violations: validation.violations,
                phase,
                ..state
            }
        }
        FormEvent::SubmitRequested => {
            if !state.can_submit() {
                return state;
            }
            FormState {
                phase: FormPhase::Submitting,
                attempt: state.attempt + 1,
                message: None,
                ..state
            }
        }
        FormEvent::Settled { attempt, reply } => {
            if !state.is_submitting() || attempt != state.attempt {
                return state;
            }
            match reply {
                GatewayReply::Success { .. } => FormState {
                    phase: FormPhase::Accepted,
                    submitted: true,
                    last_outcome: Outcome::Success,
                    message: Some(config.success_message.clone()),
                    ..state
                },
                GatewayReply::Failure { .. } => FormState {
                    phase: FormPhase::Rejected,
                    last_outcome: Outcome::Failure,
                    message: Some(config.error_message.clone()),
                    ..state
                },
            }
        }
        FormEvent::Reset => FormState::initial(config, state.attempt),
    }
}

/// A submission that has been started and is waiting for the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub attempt: u64,
    pub value: String,
}

/// A form instance: its config plus current state
#[derive(Debug, Clone)]
pub struct FormMachine {
    config: FieldConfig,
    state: FormState,
}

impl FormMachine {
    pub fn new(config: FieldConfig) -> Self {
        let state = FormState::new(&config);
        Self { config, state }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn submit_enabled(&self) -> bool {
        self.state.can_submit()
    }

    /// Replace the value, as an input event would
    pub fn on_input(&mut self, value: impl Into<String>) {
        self.apply(FormEvent::Input(value.into()));
    }

    /// Append a character to the current value
    pub fn push_char(&mut self, c: char) {
        let mut value = self.state.value.clone();
        value.push(c);
        self.on_input(value);
    }

    /// Remove the last character from the current value
    pub fn pop_char(&mut self) {
        let mut value = self.state.value.clone();
        value.pop();
        self.on_input(value);
    }

    pub fn on_reset(&mut self) {
        self.apply(FormEvent::Reset);
    }

    /// Move into `Submitting` and hand back what to send.
    ///
    /// Returns `None` when submitting is not allowed right now; nothing
    /// should be sent in that case.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if !self.state.can_submit() {
            debug!(form = %self.config.name, phase = ?self.state.phase, "Submit ignored");
            return None;
        }
        self.apply(FormEvent::SubmitRequested);
        info!(form = %self.config.name, attempt = self.state.attempt, "Submitting");
        Some(Submission {
            attempt: self.state.attempt,
            value: self.state.value.clone(),
        })
    }

    /// Apply a gateway reply. Returns false if the reply was stale.
    pub fn settle(&mut self, attempt: u64, reply: GatewayReply) -> bool {
        if !self.state.is_submitting() || attempt != self.state.attempt {
            warn!(
                form = %self.config.name,
                attempt,
                current = self.state.attempt,
                "Dropping stale submission reply"
            );
            return false;
        }
        match &reply {
            GatewayReply::Failure { reason } => {
                warn!(form = %self.config.name, attempt, %reason, "Submission failed")
            }
            GatewayReply::Success { echoed_value } => {
                info!(form = %self.config.name, attempt, echoed = %echoed_value, "Submission accepted")
            }
        }
        self.apply(FormEvent::Settled { attempt, reply });
        true
    }

    fn apply(&mut self, event: FormEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(&self.config, state, event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FieldConfig {
        FieldConfig::new(2, 50)
            .unwrap()
            .with_messages("saved", "failed")
    }

    fn with_initial(value: &str) -> FieldConfig {
        let mut cfg = config();
        cfg.initial_value = value.to_string();
        cfg
    }

    fn success(value: &str) -> GatewayReply {
        GatewayReply::Success {
            echoed_value: value.to_string(),
        }
    }

    fn failure() -> GatewayReply {
        GatewayReply::Failure {
            reason: "nope".to_string(),
        }
    }

    mod reducer {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_initial_state() {
            let state = FormState::new(&config());
            assert_eq!(state.value, "");
            assert!(!state.tainted);
            assert!(!state.valid);
            assert!(!state.submitted);
            assert_eq!(state.last_outcome, Outcome::None);
            assert_eq!(state.phase, FormPhase::Pristine);
            assert!(!state.can_submit());
        }

        #[test]
        fn test_initial_value_is_validated() {
            let cfg = with_initial("preset");
            let state = FormState::new(&cfg);
            assert_eq!(state.value, "preset");
            assert!(state.valid);
            assert!(!state.tainted);
            assert!(!state.can_submit());
        }

        #[test]
        fn test_input_taints_even_when_unchanged() {
            let cfg = config();
            let state = reduce(&cfg, FormState::new(&cfg), FormEvent::Input(String::new()));
            assert!(state.tainted);
            assert_eq!(state.phase, FormPhase::Tainted);
        }

        #[test]
        fn test_input_recomputes_validity() {
            let cfg = config();
            let state = reduce(&cfg, FormState::new(&cfg), FormEvent::Input("a".into()));
            assert!(!state.valid);
            assert!(state.violations.contains(&Violation::TooShort));

            let state = reduce(&cfg, state, FormEvent::Input("ab".into()));
            assert!(state.valid);
            assert!(state.violations.is_empty());
        }

        #[test]
        fn test_submit_when_pristine_is_noop() {
            let cfg = with_initial("valid value");
            let before = FormState::new(&cfg);
            let after = reduce(&cfg, before.clone(), FormEvent::SubmitRequested);
            assert_eq!(before, after);
        }

        #[test]
        fn test_submit_when_invalid_is_noop() {
            let cfg = config();
            let before = reduce(&cfg, FormState::new(&cfg), FormEvent::Input("a".into()));
            let after = reduce(&cfg, before.clone(), FormEvent::SubmitRequested);
            assert_eq!(before, after);
        }

        #[test]
        fn test_submit_while_submitting_is_noop() {
            let cfg = config();
            let state = reduce(&cfg, FormState::new(&cfg), FormEvent::Input("ok".into()));
            let submitting = reduce(&cfg, state, FormEvent::SubmitRequested);
            let again = reduce(&cfg, submitting.clone(), FormEvent::SubmitRequested);
            assert_eq!(submitting, again);
        }

        #[test]
        fn test_success_settlement() {
            let cfg = config();
            let state = reduce(&cfg, FormState::new(&cfg), FormEvent::Input("ok".into()));
            let state = reduce(&cfg, state, FormEvent::SubmitRequested);
            let attempt = state.attempt;
            let state = reduce(
                &cfg,
                state,
                FormEvent::Settled {
                    attempt,
                    reply: success("ok"),
                },
            );
            assert_eq!(state.phase, FormPhase::Accepted);
            assert!(state.submitted);
            assert_eq!(state.last_outcome, Outcome::Success);
            assert_eq!(state.message.as_deref(), Some("saved"));
        }

        #[test]
        fn test_failure_settlement_allows_resubmit() {
            let cfg = config();
            let state = reduce(&cfg, FormState::new(&cfg), FormEvent::Input("ok".into()));
            let state = reduce(&cfg, state, FormEvent::SubmitRequested);
            let attempt = state.attempt;
            let state = reduce(
                &cfg,
                state,
                FormEvent::Settled {
                    attempt,
                    reply: failure(),
                },
            );
            assert_eq!(state.phase, FormPhase::Rejected);
            assert!(!state.submitted);
            assert_eq!(state.last_outcome, Outcome::Failure);
            assert_eq!(state.message.as_deref(), Some("failed"));
            assert!(state.can_submit());
        }

        #[test]
        fn test_stale_settlement_is_ignored() {
            let cfg = config();
            let state = reduce(&cfg, FormState::new(&cfg), FormEvent::Input("ok".into()));
            let state = reduce(&cfg, state, FormEvent::SubmitRequested);
            let stale = state.attempt;
            let state = reduce(&cfg, state, FormEvent::Reset);
            let after = reduce(
                &cfg,
                state.clone(),
                FormEvent::Settled {
                    attempt: stale,
                    reply: success("ok"),
                },
            );
            assert_eq!(state, after);
            assert_eq!(after.phase, FormPhase::Pristine);
        }

        #[test]
        fn test_settlement_outside_submitting_is_ignored() {
            let cfg = config();
            let state = reduce(&cfg, FormState::new(&cfg), FormEvent::Input("ok".into()));
            let after = reduce(
                &cfg,
                state.clone(),
                FormEvent::Settled {
                    attempt: state.attempt,
                    reply: success("ok"),
                },
            );
            assert_eq!(state, after);
        }

        #[test]
        fn test_input_during_submitting_keeps_phase() {
            let cfg = config();
            let state = reduce(&cfg, FormState::new(&cfg), FormEvent::Input("ok".into()));
            let state = reduce(&cfg, state, FormEvent::SubmitRequested);
            let state = reduce(&cfg, state, FormEvent::Input("x".into()));
            assert_eq!(state.phase, FormPhase::Submitting);
            assert_eq!(state.value, "x");
            assert!(!state.valid);
        }

        #[test]
        fn test_input_after_outcome_returns_to_tainted() {
            let cfg = config();
            let state = reduce(&cfg, FormState::new(&cfg), FormEvent::Input("ok".into()));
            let state = reduce(&cfg, state, FormEvent::SubmitRequested);
            let attempt = state.attempt;
            let state = reduce(
                &cfg,
                state,
                FormEvent::Settled {
                    attempt,
                    reply: success("ok"),
                },
            );
            let state = reduce(&cfg, state, FormEvent::Input("okay".into()));
            assert_eq!(state.phase, FormPhase::Tainted);
            assert!(state.submitted);
            assert_eq!(state.last_outcome, Outcome::Success);
        }

        #[test]
        fn test_reset_from_any_phase() {
            let cfg = config();
            let tainted = reduce(&cfg, FormState::new(&cfg), FormEvent::Input("ok".into()));
            let submitting = reduce(&cfg, tainted.clone(), FormEvent::SubmitRequested);

            for state in [tainted, submitting] {
                let reset = reduce(&cfg, state, FormEvent::Reset);
                assert_eq!(reset.value, "");
                assert!(!reset.tainted);
                assert!(!reset.submitted);
                assert_eq!(reset.last_outcome, Outcome::None);
                assert_eq!(reset.phase, FormPhase::Pristine);
                assert_eq!(reset.message, None);
            }
        }

        #[test]
        fn test_reset_restores_initial_value() {
            let cfg = with_initial("start");
            let state = reduce(&cfg, FormState::new(&cfg), FormEvent::Input("changed".into()));
            let state = reduce(&cfg, state, FormEvent::Reset);
            assert_eq!(state.value, "start");
            assert!(state.valid);
        }

        #[test]
        fn test_reset_is_idempotent() {
            let cfg = config();
            let state = reduce(&cfg, FormState::new(&cfg), FormEvent::Input("ok".into()));
            let once = reduce(&cfg, state, FormEvent::Reset);
            let twice = reduce(&cfg, once.clone(), FormEvent::Reset);
            assert_eq!(once, twice);
        }

        #[test]
        fn test_reset_while_submitting_is_idempotent() {
            let cfg = config();
            let state = reduce(&cfg, FormState::new(&cfg), FormEvent::Input("ok".into()));
            let state = reduce(&cfg, state, FormEvent::SubmitRequested);
            let once = reduce(&cfg, state, FormEvent::Reset);
            let twice = reduce(&cfg, once.clone(), FormEvent::Reset);
            assert_eq!(once, twice);
        }

        #[test]
        fn test_reply_from_before_reset_ignored_by_next_attempt() {
            let cfg = config();
            let state = reduce(&cfg, FormState::new(&cfg), FormEvent::Input("ok".into()));
            let state = reduce(&cfg, state, FormEvent::SubmitRequested);
            let stale = state.attempt;
            let state = reduce(&cfg, state, FormEvent::Reset);
            let state = reduce(&cfg, state, FormEvent::Input("again".into()));
            let state = reduce(&cfg, state, FormEvent::SubmitRequested);
            assert_ne!(state.attempt, stale);

            let after = reduce(
                &cfg,
                state.clone(),
                FormEvent::Settled {
                    attempt: stale,
                    reply: success("ok"),
                },
            );
            assert_eq!(state, after);
            assert_eq!(after.phase, FormPhase::Submitting);
        }
    }

    mod machine {
        use super::*;
        use crate::error::GatewayError;
        use crate::gateway::{self, MockSubmissionGateway};
        use pretty_assertions::assert_eq;
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        /// Run one submission through the gateway the way the app does
        async fn submit_through(form: &mut FormMachine, backend: &MockSubmissionGateway) -> Outcome {
            if let Some(submission) = form.begin_submit() {
                let reply = gateway::dispatch(backend, &submission.value, None).await;
                form.settle(submission.attempt, reply);
            }
            form.state().last_outcome
        }

        #[test]
        fn test_scenario_a_submit_enablement() {
            let mut form = FormMachine::new(config());
            assert!(!form.submit_enabled());

            form.on_input("a");
            assert!(!form.submit_enabled());

            form.on_input("ab");
            assert!(form.submit_enabled());
        }

        #[test]
        fn test_too_long_disables_submit() {
            let mut form = FormMachine::new(config());
            form.on_input("a".repeat(51));
            assert!(!form.submit_enabled());
            form.on_input("a".repeat(50));
            assert!(form.submit_enabled());
        }

        #[test]
        fn test_push_and_pop_char() {
            let mut form = FormMachine::new(config());
            form.push_char('a');
            form.push_char('é');
            assert_eq!(form.state().value, "aé");
            assert!(form.submit_enabled());
            form.pop_char();
            assert_eq!(form.state().value, "a");
            assert!(!form.submit_enabled());
        }

        #[test]
        fn test_pop_char_on_empty_still_taints() {
            let mut form = FormMachine::new(config());
            form.pop_char();
            assert!(form.state().tainted);
            assert_eq!(form.state().value, "");
        }

        #[test]
        fn test_begin_submit_returns_payload_once() {
            let mut form = FormMachine::new(config());
            form.on_input("test-string");
            let submission = form.begin_submit().unwrap();
            assert_eq!(submission.value, "test-string");
            assert!(form.begin_submit().is_none());
        }

        #[test]
        fn test_begin_submit_invalid_returns_none() {
            let mut form = FormMachine::new(config());
            form.on_input("a");
            assert!(form.begin_submit().is_none());
            assert_eq!(form.state().phase, FormPhase::Tainted);
        }

        #[test]
        fn test_settle_rejects_stale_attempt() {
            let mut form = FormMachine::new(config());
            form.on_input("ok");
            let submission = form.begin_submit().unwrap();
            form.on_reset();
            assert!(!form.settle(submission.attempt, success("ok")));
            assert_eq!(form.state().last_outcome, Outcome::None);
        }

        #[test]
        fn test_scenario_c_reset_clears_taint() {
            let mut form = FormMachine::new(config());
            form.on_input("test-string");
            form.on_input("");
            form.on_reset();
            assert!(!form.state().tainted);
            assert_eq!(form.state().value, "");
        }

        #[tokio::test]
        async fn test_scenario_b_submit_succeeds() {
            let mut gateway = MockSubmissionGateway::new();
            gateway
                .expect_submit()
                .withf(|value| value.to_string() == "test-string")
                .times(1)
                .returning(|value| {
                    Ok(GatewayReply::Success {
                        echoed_value: value.to_string(),
                    })
                });

            let mut form = FormMachine::new(config());
            form.on_input("test-string");
            let outcome = submit_through(&mut form, &gateway).await;

            assert_eq!(outcome, Outcome::Success);
            assert!(form.state().submitted);
            assert_eq!(form.state().message.as_deref(), Some("saved"));
        }

        #[tokio::test]
        async fn test_scenario_d_gateway_error_is_failure() {
            let mut gateway = MockSubmissionGateway::new();
            gateway.expect_submit().times(1).returning(|_| {
                Err(GatewayError::Status {
                    status: 500,
                    body: "down".to_string(),
                })
            });

            let mut form = FormMachine::new(config());
            form.on_input("test-string");
            let outcome = submit_through(&mut form, &gateway).await;

            assert_eq!(outcome, Outcome::Failure);
            assert!(!form.state().submitted);
            assert_eq!(form.state().message.as_deref(), Some("failed"));
            assert!(form.submit_enabled());
        }

        #[tokio::test]
        async fn test_explicit_failure_reply_is_failure() {
            let mut gateway = MockSubmissionGateway::new();
            gateway
                .expect_submit()
                .times(1)
                .returning(|_| Ok(failure()));

            let mut form = FormMachine::new(config());
            form.on_input("ok");
            assert_eq!(submit_through(&mut form, &gateway).await, Outcome::Failure);
        }

        #[tokio::test]
        async fn test_untainted_submit_never_calls_gateway() {
            let mut gateway = MockSubmissionGateway::new();
            gateway.expect_submit().times(0);

            let mut form = FormMachine::new(with_initial("valid"));
            assert_eq!(submit_through(&mut form, &gateway).await, Outcome::None);
        }

        #[tokio::test]
        async fn test_invalid_submit_never_calls_gateway() {
            let mut gateway = MockSubmissionGateway::new();
            gateway.expect_submit().times(0);

            let mut form = FormMachine::new(config());
            form.on_input("a");
            assert_eq!(submit_through(&mut form, &gateway).await, Outcome::None);
        }

        #[tokio::test]
        async fn test_scenario_e_double_submit_calls_gateway_once() {
            let calls = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&calls);
            let mut gateway = MockSubmissionGateway::new();
            gateway.expect_submit().returning(move |value| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(GatewayReply::Success {
                    echoed_value: value.to_string(),
                })
            });

            let mut form = FormMachine::new(config());
            form.on_input("ok");
            let first = form.begin_submit();
            let second = form.begin_submit();
            assert!(first.is_some());
            assert!(second.is_none());

            let submission = first.unwrap();
            let reply = gateway::dispatch(&gateway, &submission.value, None).await;
            form.settle(submission.attempt, reply);

            assert_eq!(calls.load(Ordering::SeqCst), 1);
            assert_eq!(form.state().last_outcome, Outcome::Success);
        }
    }
}
