//! Form state management

use super::button::SubmitButton;
use super::config::FormConfig;
use super::field::FormField;
use super::notification::NotificationSlot;
use super::pipeline::{Effect, PipelineEvent, PipelineState, SubmissionPipeline, SubmissionResult};
use super::record::{FieldRecord, FieldValues};
use std::time::Instant;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// The kiosk's forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Admission,
    Contact,
    Enquiry,
}

impl FormKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Admission => "Admission Application",
            Self::Contact => "Contact Us",
            Self::Enquiry => "Quick Enquiry",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Admission => "Submit Application",
            Self::Contact => "Send Message",
            Self::Enquiry => "Ask",
        }
    }
}

/// A send the host has to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    pub form: FormKind,
    pub attempt: u64,
    pub service_id: String,
    pub template_id: String,
    pub record: FieldRecord,
}

/// One mounted form: fields, submit control, notification and pipeline
#[derive(Debug)]
pub struct FormState {
    kind: FormKind,
    config: FormConfig,
    pub fields: Vec<FormField>,
    /// Field index, or `fields.len()` for the submit button row
    pub active_field_index: usize,
    pub button: SubmitButton,
    pub notification: NotificationSlot,
    pipeline: SubmissionPipeline,
}

impl FormState {
    pub fn new(kind: FormKind, config: FormConfig) -> Self {
        let fields = config.fields().iter().cloned().map(FormField::new).collect();
        Self {
            kind,
            config,
            fields,
            active_field_index: 0,
            button: SubmitButton::new(kind.submit_label()),
            notification: NotificationSlot::default(),
            pipeline: SubmissionPipeline::default(),
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn pipeline_state(&self) -> PipelineState {
        self.pipeline.state()
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    #[cfg(test)]
    pub fn field(&self, id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id() == id)
    }

    #[cfg(test)]
    pub fn field_mut(&mut self, id: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.id() == id)
    }

    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.fields
            .get(self.active_field_index)
            .is_some_and(|f| f.spec.is_multiline())
    }

    /// Snapshot the current input, selects yielding their labels
    pub fn values(&self) -> FieldValues {
        self.fields
            .iter()
            .map(|f| (f.id().to_string(), f.submitted_value()))
            .collect()
    }

    /// Handle the submit trigger.
    ///
    /// A disabled submit control swallows the trigger; this is the only guard
    /// against a second submit while a send is in flight.
    pub fn submit(&mut self, now: Instant) -> Option<SendRequest> {
        if !self.button.is_enabled() {
            tracing::debug!(form = self.config.name(), "submit ignored, control disabled");
            return None;
        }
        let effects = self
            .pipeline
            .handle(PipelineEvent::Submit(self.values()), &self.config);
        self.apply(effects, now)
    }

    /// Feed the outcome of a send back into the pipeline
    pub fn resolve(&mut self, result: SubmissionResult, now: Instant) {
        let effects = self
            .pipeline
            .handle(PipelineEvent::Resolved(result), &self.config);
        if self.apply(effects, now).is_some() {
            tracing::warn!(form = self.config.name(), "resolution produced a send");
        }
    }

    /// Carry out pipeline directives; returns the send to perform, if any
    fn apply(&mut self, effects: Vec<Effect>, now: Instant) -> Option<SendRequest> {
        let mut request = None;
        for effect in effects {
            match effect {
                Effect::MarkInvalid(ids) => {
                    for field in &mut self.fields {
                        field.invalid = ids.iter().any(|id| id == field.id());
                    }
                }
                Effect::Notify { kind, message } => self.notification.show(kind, message, now),
                Effect::DisableSubmit => self.button.set_loading(true),
                Effect::RestoreSubmit => self.button.set_loading(false),
                Effect::ClearFields => {
                    for field in &mut self.fields {
                        field.clear();
                    }
                    self.active_field_index = 0;
                }
                Effect::Send {
                    attempt,
                    service_id,
                    template_id,
                    record,
                } => {
                    request = Some(SendRequest {
                        form: self.kind,
                        attempt,
                        service_id,
                        template_id,
                        record,
                    });
                }
            }
        }
        request
    }

    pub fn tick(&mut self, now: Instant) {
        self.notification.tick(now);
    }
}

impl Form for FormState {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // fields + submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KioskConfig;
    use crate::state::forms::notification::NotificationKind;
    use crate::state::forms::presets;
    use std::time::Duration;

    fn contact_form() -> FormState {
        FormState::new(
            FormKind::Contact,
            presets::contact(&KioskConfig::default()).unwrap(),
        )
    }

    fn fill_contact(form: &mut FormState) {
        form.field_mut("name").unwrap().set_text("Asha Rai");
        form.field_mut("contactEmail").unwrap().set_text("asha@example.com");
        form.field_mut("subject").unwrap().select_value("fees");
        form.field_mut("contactMessage")
            .unwrap()
            .set_text("What are the fees?");
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_field_count_includes_submit_row() {
            let form = contact_form();
            assert_eq!(form.field_count(), 6);
        }

        #[test]
        fn test_prev_field_wraps_to_submit_row() {
            let mut form = contact_form();
            form.prev_field();
            assert!(form.is_submit_row_active());
            form.next_field();
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = contact_form();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 5);
        }

        #[test]
        fn test_multiline_detection() {
            let mut form = contact_form();
            assert!(!form.is_active_field_multiline());
            form.set_active_field(4);
            assert!(form.is_active_field_multiline());
        }
    }

    mod submission {
        use super::*;

        #[test]
        fn test_values_use_option_labels() {
            let mut form = contact_form();
            fill_contact(&mut form);
            assert_eq!(form.values()["subject"], "Fee Structure");
        }

        #[test]
        fn test_invalid_submit_marks_fields_without_sending() {
            let now = Instant::now();
            let mut form = contact_form();
            form.field_mut("contactEmail").unwrap().set_text("not-an-email");
            assert!(form.submit(now).is_none());

            let invalid: Vec<_> = form
                .fields
                .iter()
                .filter(|f| f.invalid)
                .map(|f| f.id())
                .collect();
            assert_eq!(
                invalid,
                vec!["name", "contactEmail", "subject", "contactMessage"]
            );
            assert!(form.button.is_enabled());
            let notification = form.notification.current().unwrap();
            assert_eq!(notification.kind, NotificationKind::Error);
        }

        #[test]
        fn test_valid_submit_disables_button_and_requests_send() {
            let now = Instant::now();
            let mut form = contact_form();
            fill_contact(&mut form);
            let request = form.submit(now).unwrap();
            assert_eq!(request.form, FormKind::Contact);
            assert_eq!(request.template_id, "template_l7ss6ml");
            assert_eq!(request.record.get("subject"), Some("Fee Structure"));
            assert!(!form.button.is_enabled());
            assert!(form.notification.current().is_none());
        }

        #[test]
        fn test_disabled_button_blocks_second_submit() {
            let now = Instant::now();
            let mut form = contact_form();
            fill_contact(&mut form);
            assert!(form.submit(now).is_some());
            assert!(form.submit(now).is_none());
            assert_eq!(form.pipeline_state(), PipelineState::Sending { attempt: 1 });
        }

        #[test]
        fn test_success_clears_and_restores() {
            let now = Instant::now();
            let mut form = contact_form();
            fill_contact(&mut form);
            form.submit(now).unwrap();
            form.resolve(SubmissionResult::Success, now);

            assert!(form.button.is_enabled());
            assert_eq!(form.button.label(), "Send Message");
            assert!(form.values().values().all(String::is_empty));
            let notification = form.notification.current().unwrap();
            assert_eq!(notification.kind, NotificationKind::Success);
        }

        #[test]
        fn test_failure_keeps_input_and_names_phone() {
            let now = Instant::now();
            let mut form = contact_form();
            fill_contact(&mut form);
            form.submit(now).unwrap();
            form.resolve(SubmissionResult::Failure("HTTP 500".to_string()), now);

            assert!(form.button.is_enabled());
            assert_eq!(form.values()["name"], "Asha Rai");
            let notification = form.notification.current().unwrap();
            assert_eq!(notification.kind, NotificationKind::Error);
            assert!(notification.message.contains("+977-9867825654"));
        }

        #[test]
        fn test_fixing_fields_clears_markers() {
            let now = Instant::now();
            let mut form = contact_form();
            assert!(form.submit(now).is_none());
            fill_contact(&mut form);
            assert!(form.submit(now).is_some());
            assert!(form.fields.iter().all(|f| !f.invalid));
        }

        #[test]
        fn test_notification_expires_through_tick() {
            let now = Instant::now();
            let mut form = contact_form();
            form.submit(now);
            assert!(form.notification.current().is_some());
            form.tick(now + Duration::from_millis(5300));
            assert!(form.notification.current().is_none());
        }
    }
}
