//! Per-form configuration record

use super::field::{FieldKind, FieldSpec};
use super::record::{FieldRecord, FieldValues};
use std::collections::HashSet;
use thiserror::Error;

/// Where the send operation delivers a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub service_id: String,
    pub template_id: String,
}

/// How one record key is computed from field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    Field(String),
    /// Several fields joined with a separator
    Joined {
        fields: Vec<String>,
        separator: String,
    },
    /// A field, or the fallback when it is blank
    FieldOr { field: String, fallback: String },
}

impl RecordSource {
    fn field_ids(&self) -> Vec<&str> {
        match self {
            RecordSource::Field(id) => vec![id.as_str()],
            RecordSource::Joined { fields, .. } => fields.iter().map(String::as_str).collect(),
            RecordSource::FieldOr { field, .. } => vec![field.as_str()],
        }
    }

    fn resolve(&self, values: &FieldValues) -> String {
        let value_of = |id: &str| values.get(id).cloned().unwrap_or_default();
        match self {
            RecordSource::Field(id) => value_of(id),
            RecordSource::Joined { fields, separator } => fields
                .iter()
                .map(|id| value_of(id))
                .collect::<Vec<_>>()
                .join(separator),
            RecordSource::FieldOr { field, fallback } => {
                let value = value_of(field);
                if value.is_empty() {
                    fallback.clone()
                } else {
                    value
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEntry {
    pub key: String,
    pub source: RecordSource,
}

impl RecordEntry {
    pub fn field(key: &str, id: &str) -> Self {
        Self {
            key: key.to_string(),
            source: RecordSource::Field(id.to_string()),
        }
    }

    pub fn joined(key: &str, ids: &[&str], separator: &str) -> Self {
        Self {
            key: key.to_string(),
            source: RecordSource::Joined {
                fields: ids.iter().map(|id| id.to_string()).collect(),
                separator: separator.to_string(),
            },
        }
    }

    pub fn field_or(key: &str, id: &str, fallback: &str) -> Self {
        Self {
            key: key.to_string(),
            source: RecordSource::FieldOr {
                field: id.to_string(),
                fallback: fallback.to_string(),
            },
        }
    }
}

/// Notification texts for a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub success: String,
    /// Shown after a failed send; unused by forms without a delivery
    pub failure: String,
    pub invalid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormConfigError {
    #[error("form `{0}` has no fields")]
    NoFields(String),
    #[error("form `{form}` declares field `{field}` more than once")]
    DuplicateField { form: String, field: String },
    #[error("form `{form}` maps record key `{key}` from unknown field `{field}`")]
    UnknownField {
        form: String,
        key: String,
        field: String,
    },
    #[error("form `{form}` maps record key `{key}` more than once")]
    DuplicateKey { form: String, key: String },
    #[error("select field `{field}` of form `{form}` has no options")]
    EmptySelect { form: String, field: String },
    #[error("form `{0}` neither validates nor sends")]
    NoSteps(String),
}

/// Validated configuration of one form pipeline
#[derive(Debug, Clone)]
pub struct FormConfig {
    name: String,
    fields: Vec<FieldSpec>,
    record: Vec<RecordEntry>,
    delivery: Option<Delivery>,
    validate: bool,
    messages: Messages,
}

impl FormConfig {
    pub fn new(
        name: &str,
        fields: Vec<FieldSpec>,
        record: Vec<RecordEntry>,
        delivery: Option<Delivery>,
        validate: bool,
        messages: Messages,
    ) -> Result<Self, FormConfigError> {
        let form = name.to_string();
        if fields.is_empty() {
            return Err(FormConfigError::NoFields(form));
        }
        if !validate && delivery.is_none() {
            return Err(FormConfigError::NoSteps(form));
        }

        let mut ids = HashSet::new();
        for spec in &fields {
            if !ids.insert(spec.id.as_str()) {
                return Err(FormConfigError::DuplicateField {
                    form,
                    field: spec.id.clone(),
                });
            }
            if matches!(&spec.kind, FieldKind::Select(options) if options.is_empty()) {
                return Err(FormConfigError::EmptySelect {
                    form,
                    field: spec.id.clone(),
                });
            }
        }

        let mut keys = HashSet::new();
        for entry in &record {
            if !keys.insert(entry.key.as_str()) {
                return Err(FormConfigError::DuplicateKey {
                    form,
                    key: entry.key.clone(),
                });
            }
            if let Some(field) = entry
                .source
                .field_ids()
                .into_iter()
                .find(|id| !ids.contains(id))
            {
                return Err(FormConfigError::UnknownField {
                    form,
                    key: entry.key.clone(),
                    field: field.to_string(),
                });
            }
        }

        Ok(Self {
            name: form,
            fields,
            record,
            delivery,
            validate,
            messages,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn delivery(&self) -> Option<&Delivery> {
        self.delivery.as_ref()
    }

    pub fn validates(&self) -> bool {
        self.validate
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Build the payload for the send operation
    pub fn extract(&self, values: &FieldValues) -> FieldRecord {
        if self.record.is_empty() {
            return self
                .fields
                .iter()
                .map(|spec| {
                    let value = values.get(&spec.id).cloned().unwrap_or_default();
                    (spec.id.clone(), value)
                })
                .collect();
        }
        self.record
            .iter()
            .map(|entry| (entry.key.clone(), entry.source.resolve(values)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::field::SelectOption;
    use pretty_assertions::assert_eq;

    fn messages() -> Messages {
        Messages {
            success: "ok".to_string(),
            failure: "failed".to_string(),
            invalid: "invalid".to_string(),
        }
    }

    fn delivery() -> Option<Delivery> {
        Some(Delivery {
            service_id: "service".to_string(),
            template_id: "template".to_string(),
        })
    }

    fn name_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::required("first", "First", FieldKind::Text),
            FieldSpec::required("last", "Last", FieldKind::Text),
            FieldSpec::optional("note", "Note", FieldKind::Multiline),
        ]
    }

    mod construction {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_rejects_no_fields() {
            let err = FormConfig::new("f", vec![], vec![], delivery(), true, messages());
            assert_eq!(err.unwrap_err(), FormConfigError::NoFields("f".to_string()));
        }

        #[test]
        fn test_rejects_duplicate_field() {
            let fields = vec![
                FieldSpec::required("a", "A", FieldKind::Text),
                FieldSpec::optional("a", "A again", FieldKind::Text),
            ];
            let err = FormConfig::new("f", fields, vec![], delivery(), true, messages());
            assert!(matches!(
                err.unwrap_err(),
                FormConfigError::DuplicateField { field, .. } if field == "a"
            ));
        }

        #[test]
        fn test_rejects_unknown_record_field() {
            let record = vec![RecordEntry::joined("from_name", &["first", "middle"], " ")];
            let err = FormConfig::new("f", name_fields(), record, delivery(), false, messages());
            assert!(matches!(
                err.unwrap_err(),
                FormConfigError::UnknownField { field, .. } if field == "middle"
            ));
        }

        #[test]
        fn test_rejects_duplicate_key() {
            let record = vec![
                RecordEntry::field("name", "first"),
                RecordEntry::field("name", "last"),
            ];
            let err = FormConfig::new("f", name_fields(), record, delivery(), false, messages());
            assert!(matches!(
                err.unwrap_err(),
                FormConfigError::DuplicateKey { key, .. } if key == "name"
            ));
        }

        #[test]
        fn test_rejects_empty_select() {
            let fields = vec![FieldSpec::required("s", "S", FieldKind::Select(vec![]))];
            let err = FormConfig::new("f", fields, vec![], delivery(), true, messages());
            assert!(matches!(
                err.unwrap_err(),
                FormConfigError::EmptySelect { .. }
            ));
        }

        #[test]
        fn test_rejects_form_without_steps() {
            let err = FormConfig::new("f", name_fields(), vec![], None, false, messages());
            assert_eq!(err.unwrap_err(), FormConfigError::NoSteps("f".to_string()));
        }

        #[test]
        fn test_accepts_validation_only_form() {
            let config = FormConfig::new("f", name_fields(), vec![], None, true, messages());
            let config = config.unwrap();
            assert!(config.delivery().is_none());
            assert!(config.validates());
        }
    }

    mod extraction {
        use super::*;
        use pretty_assertions::assert_eq;

        fn values() -> FieldValues {
            [("first", "Asha"), ("last", "Rai"), ("note", "")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        }

        #[test]
        fn test_mapped_record() {
            let record = vec![
                RecordEntry::joined("from_name", &["first", "last"], " "),
                RecordEntry::field_or("message", "note", "No additional information provided"),
            ];
            let config =
                FormConfig::new("f", name_fields(), record, delivery(), false, messages()).unwrap();
            let extracted = config.extract(&values());
            assert_eq!(extracted.len(), 2);
            assert_eq!(extracted.get("from_name"), Some("Asha Rai"));
            assert_eq!(
                extracted.get("message"),
                Some("No additional information provided")
            );
        }

        #[test]
        fn test_identity_record_when_unmapped() {
            let config =
                FormConfig::new("f", name_fields(), vec![], None, true, messages()).unwrap();
            let extracted = config.extract(&values());
            assert_eq!(extracted.len(), 3);
            assert_eq!(extracted.get("first"), Some("Asha"));
            assert_eq!(extracted.get("note"), Some(""));
        }

        #[test]
        fn test_select_field_accepted_with_options() {
            let fields = vec![FieldSpec::required(
                "subject",
                "Subject",
                FieldKind::Select(vec![SelectOption::new("general", "General Enquiry")]),
            )];
            assert!(FormConfig::new("f", fields, vec![], delivery(), true, messages()).is_ok());
        }
    }
}
