//! The kiosk's three forms

use super::config::{Delivery, FormConfig, FormConfigError, Messages, RecordEntry};
use super::field::{FieldKind, FieldSpec, SelectOption};
use crate::config::KioskConfig;

const INVALID_MESSAGE: &str = "Please fill in all required fields correctly.";

fn course_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("ballb", "BA LLB (5 Years)"),
        SelectOption::new("llb", "LLB (3 Years)"),
        SelectOption::new("llm", "LLM (2 Years)"),
    ]
}

fn batch_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("morning", "Morning Batch"),
        SelectOption::new("day", "Day Batch"),
        SelectOption::new("evening", "Evening Batch"),
    ]
}

fn subject_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("admission", "Admission Enquiry"),
        SelectOption::new("courses", "Course Information"),
        SelectOption::new("fees", "Fee Structure"),
        SelectOption::new("general", "General Enquiry"),
        SelectOption::new("other", "Other"),
    ]
}

/// Application form delivered with the admission template
pub fn admission(config: &KioskConfig) -> Result<FormConfig, FormConfigError> {
    let fields = vec![
        FieldSpec::required("firstName", "First Name", FieldKind::Text),
        FieldSpec::required("lastName", "Last Name", FieldKind::Text),
        FieldSpec::required("email", "Email", FieldKind::Email),
        FieldSpec::required("phone", "Phone", FieldKind::Phone),
        FieldSpec::required("address", "Address", FieldKind::Text),
        FieldSpec::required("qualification", "Highest Qualification", FieldKind::Text),
        FieldSpec::required("percentage", "Percentage / GPA", FieldKind::Number),
        FieldSpec::required("institution", "Previous Institution", FieldKind::Text),
        FieldSpec::required("course", "Course", FieldKind::Select(course_options())),
        FieldSpec::required("batch", "Preferred Batch", FieldKind::Select(batch_options())),
        FieldSpec::optional("message", "Additional Information", FieldKind::Multiline),
    ];
    let record = vec![
        RecordEntry::joined("from_name", &["firstName", "lastName"], " "),
        RecordEntry::field("user_email", "email"),
        RecordEntry::field("phone", "phone"),
        RecordEntry::field("address", "address"),
        RecordEntry::field("qualification", "qualification"),
        RecordEntry::field("percentage", "percentage"),
        RecordEntry::field("institution", "institution"),
        RecordEntry::field("course", "course"),
        RecordEntry::field("batch", "batch"),
        RecordEntry::field_or("message", "message", "No additional information provided"),
    ];
    FormConfig::new(
        "admission",
        fields,
        record,
        Some(Delivery {
            service_id: config.emailjs.service_id.clone(),
            template_id: config.emailjs.admission_template_id.clone(),
        }),
        true,
        Messages {
            success: "Application submitted successfully! We will contact you soon.".to_string(),
            failure: format!(
                "Failed to send application. Please try again or contact us directly at {}",
                config.contact.email
            ),
            invalid: INVALID_MESSAGE.to_string(),
        },
    )
}

/// General contact form delivered with the contact template
pub fn contact(config: &KioskConfig) -> Result<FormConfig, FormConfigError> {
    let fields = vec![
        FieldSpec::required("name", "Full Name", FieldKind::Text),
        FieldSpec::required("contactEmail", "Email", FieldKind::Email),
        FieldSpec::optional("contactPhone", "Phone", FieldKind::Phone),
        FieldSpec::required("subject", "Subject", FieldKind::Select(subject_options())),
        FieldSpec::required("contactMessage", "Message", FieldKind::Multiline),
    ];
    let record = vec![
        RecordEntry::field("from_name", "name"),
        RecordEntry::field("user_email", "contactEmail"),
        RecordEntry::field("phone", "contactPhone"),
        RecordEntry::field("subject", "subject"),
        RecordEntry::field("message", "contactMessage"),
    ];
    FormConfig::new(
        "contact",
        fields,
        record,
        Some(Delivery {
            service_id: config.emailjs.service_id.clone(),
            template_id: config.emailjs.contact_template_id.clone(),
        }),
        true,
        Messages {
            success: "Message sent successfully! We will respond within 24 hours.".to_string(),
            failure: format!(
                "Failed to send message. Please try again or call us at {}",
                config.contact.phone
            ),
            invalid: INVALID_MESSAGE.to_string(),
        },
    )
}

/// Quick enquiry form, validated locally and never sent.
///
/// With no delivery there is no send to fail, so its failure text is never
/// shown; it is kept so every form carries a complete message set.
pub fn enquiry() -> Result<FormConfig, FormConfigError> {
    let fields = vec![
        FieldSpec::required("name", "Name", FieldKind::Text),
        FieldSpec::required("email", "Email", FieldKind::Email),
        FieldSpec::optional("phone", "Phone", FieldKind::Phone),
        FieldSpec::required("message", "Question", FieldKind::Multiline),
    ];
    FormConfig::new(
        "enquiry",
        fields,
        Vec::new(),
        None,
        true,
        Messages {
            success: "Thank you! Your message has been sent successfully.".to_string(),
            failure: "Something went wrong. Please try again.".to_string(),
            invalid: INVALID_MESSAGE.to_string(),
        },
    )
}
