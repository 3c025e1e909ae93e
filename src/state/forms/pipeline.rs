//! Submission pipeline state machine
//!
//! `transition` is a pure function from (state, event) to the next state and
//! the directives the host must carry out. Nothing here touches the terminal
//! or the network.

use super::config::FormConfig;
use super::notification::NotificationKind;
use super::record::{FieldRecord, FieldValues};
use super::validation::validate;

/// Outcome of the external send operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success,
    Failure(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineState {
    #[default]
    Idle,
    Sending {
        attempt: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    Submit(FieldValues),
    Resolved(SubmissionResult),
}

/// Directive produced by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Mark exactly these fields invalid, clearing the rest
    MarkInvalid(Vec<String>),
    Notify {
        kind: NotificationKind,
        message: String,
    },
    DisableSubmit,
    RestoreSubmit,
    ClearFields,
    Send {
        attempt: u64,
        service_id: String,
        template_id: String,
        record: FieldRecord,
    },
}

/// Compute the next state and its effects
pub fn transition(
    state: PipelineState,
    event: PipelineEvent,
    config: &FormConfig,
    next_attempt: u64,
) -> (PipelineState, Vec<Effect>) {
    match event {
        PipelineEvent::Submit(values) => {
            if let PipelineState::Sending { attempt } = state {
                // Only the disabled submit control guards against this
                tracing::warn!(form = config.name(), attempt, "submit while a send is in flight");
            }
            submit(values, config, next_attempt, state)
        }
        PipelineEvent::Resolved(result) => {
            if state == PipelineState::Idle {
                tracing::warn!(form = config.name(), "send resolved with nothing in flight");
            }
            resolve(result, config)
        }
    }
}

fn submit(
    values: FieldValues,
    config: &FormConfig,
    attempt: u64,
    state: PipelineState,
) -> (PipelineState, Vec<Effect>) {
    let messages = config.messages();

    if config.validates() {
        let errors = validate(config.fields(), &values);
        if !errors.is_empty() {
            tracing::info!(form = config.name(), invalid = errors.len(), "validation failed");
            let invalid = errors.into_iter().map(|e| e.field).collect();
            return (
                state,
                vec![
                    Effect::MarkInvalid(invalid),
                    Effect::Notify {
                        kind: NotificationKind::Error,
                        message: messages.invalid.clone(),
                    },
                ],
            );
        }
    }

    let Some(delivery) = config.delivery() else {
        return (
            state,
            vec![
                Effect::MarkInvalid(Vec::new()),
                Effect::Notify {
                    kind: NotificationKind::Success,
                    message: messages.success.clone(),
                },
                Effect::ClearFields,
            ],
        );
    };

    let record = config.extract(&values);
    (
        PipelineState::Sending { attempt },
        vec![
            Effect::MarkInvalid(Vec::new()),
            Effect::DisableSubmit,
            Effect::Send {
                attempt,
                service_id: delivery.service_id.clone(),
                template_id: delivery.template_id.clone(),
                record,
            },
        ],
    )
}

fn resolve(result: SubmissionResult, config: &FormConfig) -> (PipelineState, Vec<Effect>) {
    let messages = config.messages();
    let effects = match result {
        SubmissionResult::Success => vec![
            Effect::Notify {
                kind: NotificationKind::Success,
                message: messages.success.clone(),
            },
            Effect::ClearFields,
            Effect::RestoreSubmit,
        ],
        SubmissionResult::Failure(_) => vec![
            Effect::Notify {
                kind: NotificationKind::Error,
                message: messages.failure.clone(),
            },
            Effect::RestoreSubmit,
        ],
    };
    (PipelineState::Idle, effects)
}

/// Pipeline instance owned by one form
#[derive(Debug, Default)]
pub struct SubmissionPipeline {
    state: PipelineState,
    attempts: u64,
}

impl SubmissionPipeline {
    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn handle(&mut self, event: PipelineEvent, config: &FormConfig) -> Vec<Effect> {
        let (next, effects) = transition(self.state, event, config, self.attempts + 1);
        if matches!(next, PipelineState::Sending { .. }) && next != self.state {
            self.attempts += 1;
        }
        self.state = next;
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::config::{Delivery, Messages, RecordEntry};
    use crate::state::forms::field::{FieldKind, FieldSpec};
    use pretty_assertions::assert_eq;

    fn messages() -> Messages {
        Messages {
            success: "Message sent".to_string(),
            failure: "Failed, call +977-1".to_string(),
            invalid: "Please fix the form".to_string(),
        }
    }

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::required("name", "Name", FieldKind::Text),
            FieldSpec::required("email", "Email", FieldKind::Email),
        ]
    }

    fn sending_config() -> FormConfig {
        FormConfig::new(
            "contact",
            fields(),
            vec![
                RecordEntry::field("from_name", "name"),
                RecordEntry::field("user_email", "email"),
            ],
            Some(Delivery {
                service_id: "svc".to_string(),
                template_id: "tpl".to_string(),
            }),
            true,
            messages(),
        )
        .unwrap()
    }

    fn validating_config() -> FormConfig {
        FormConfig::new("enquiry", fields(), vec![], None, true, messages()).unwrap()
    }

    fn values(name: &str, email: &str) -> FieldValues {
        [("name", name), ("email", email)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn count_sends(effects: &[Effect]) -> usize {
        effects
            .iter()
            .filter(|e| matches!(e, Effect::Send { .. }))
            .count()
    }

    mod validating {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_blank_required_never_sends() {
            let config = sending_config();
            let (state, effects) = transition(
                PipelineState::Idle,
                PipelineEvent::Submit(values("", "a@b.co")),
                &config,
                1,
            );
            assert_eq!(state, PipelineState::Idle);
            assert_eq!(count_sends(&effects), 0);
            assert_eq!(
                effects,
                vec![
                    Effect::MarkInvalid(vec!["name".to_string()]),
                    Effect::Notify {
                        kind: NotificationKind::Error,
                        message: "Please fix the form".to_string(),
                    },
                ]
            );
        }

        #[test]
        fn test_malformed_email_marked() {
            let config = validating_config();
            let (_, effects) = transition(
                PipelineState::Idle,
                PipelineEvent::Submit(values("Asha", "not-an-email")),
                &config,
                1,
            );
            assert_eq!(effects[0], Effect::MarkInvalid(vec!["email".to_string()]));
        }

        #[test]
        fn test_validation_only_form_succeeds_locally() {
            let config = validating_config();
            let (state, effects) = transition(
                PipelineState::Idle,
                PipelineEvent::Submit(values("Asha", "a@b.co")),
                &config,
                1,
            );
            assert_eq!(state, PipelineState::Idle);
            assert_eq!(
                effects,
                vec![
                    Effect::MarkInvalid(vec![]),
                    Effect::Notify {
                        kind: NotificationKind::Success,
                        message: "Message sent".to_string(),
                    },
                    Effect::ClearFields,
                ]
            );
        }
    }

    mod sending {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_submit_disables_and_sends() {
            let config = sending_config();
            let (state, effects) = transition(
                PipelineState::Idle,
                PipelineEvent::Submit(values("Asha", "a@b.co")),
                &config,
                7,
            );
            assert_eq!(state, PipelineState::Sending { attempt: 7 });
            let mut record = FieldRecord::new();
            record.insert("from_name", "Asha");
            record.insert("user_email", "a@b.co");
            assert_eq!(
                effects,
                vec![
                    Effect::MarkInvalid(vec![]),
                    Effect::DisableSubmit,
                    Effect::Send {
                        attempt: 7,
                        service_id: "svc".to_string(),
                        template_id: "tpl".to_string(),
                        record,
                    },
                ]
            );
        }

        #[test]
        fn test_success_clears_and_restores() {
            let config = sending_config();
            let (state, effects) = transition(
                PipelineState::Sending { attempt: 1 },
                PipelineEvent::Resolved(SubmissionResult::Success),
                &config,
                2,
            );
            assert_eq!(state, PipelineState::Idle);
            assert!(effects.contains(&Effect::ClearFields));
            assert!(effects.contains(&Effect::RestoreSubmit));
        }

        #[test]
        fn test_failure_keeps_fields_and_names_fallback() {
            let config = sending_config();
            let (state, effects) = transition(
                PipelineState::Sending { attempt: 1 },
                PipelineEvent::Resolved(SubmissionResult::Failure("timeout".to_string())),
                &config,
                2,
            );
            assert_eq!(state, PipelineState::Idle);
            assert!(!effects.contains(&Effect::ClearFields));
            assert_eq!(
                effects,
                vec![
                    Effect::Notify {
                        kind: NotificationKind::Error,
                        message: "Failed, call +977-1".to_string(),
                    },
                    Effect::RestoreSubmit,
                ]
            );
        }

        #[test]
        fn test_submit_while_sending_is_not_rejected() {
            let config = sending_config();
            let (state, effects) = transition(
                PipelineState::Sending { attempt: 1 },
                PipelineEvent::Submit(values("Asha", "a@b.co")),
                &config,
                2,
            );
            assert_eq!(state, PipelineState::Sending { attempt: 2 });
            assert_eq!(count_sends(&effects), 1);
        }
    }

    mod instance {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_attempts_increment_per_send() {
            let config = sending_config();
            let mut pipeline = SubmissionPipeline::default();
            pipeline.handle(PipelineEvent::Submit(values("A", "a@b.co")), &config);
            assert_eq!(pipeline.state(), PipelineState::Sending { attempt: 1 });
            pipeline.handle(PipelineEvent::Resolved(SubmissionResult::Success), &config);
            assert_eq!(pipeline.state(), PipelineState::Idle);
            pipeline.handle(PipelineEvent::Submit(values("A", "a@b.co")), &config);
            assert_eq!(pipeline.state(), PipelineState::Sending { attempt: 2 });
        }

        #[test]
        fn test_invalid_submit_does_not_consume_attempt() {
            let config = sending_config();
            let mut pipeline = SubmissionPipeline::default();
            pipeline.handle(PipelineEvent::Submit(values("", "")), &config);
            assert_eq!(pipeline.state(), PipelineState::Idle);
            pipeline.handle(PipelineEvent::Submit(values("A", "a@b.co")), &config);
            assert_eq!(pipeline.state(), PipelineState::Sending { attempt: 1 });
        }
    }
}
