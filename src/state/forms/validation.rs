//! Required and email field checks

use super::field::{FieldKind, FieldSpec};
use super::record::FieldValues;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

pub fn is_valid_email(value: &str) -> bool {
    RE_EMAIL.is_match(value)
}

/// Why a field failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldProblem {
    Missing,
    MalformedEmail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub problem: FieldProblem,
}

/// Check every field and return the failures in field order
pub fn validate(fields: &[FieldSpec], values: &FieldValues) -> Vec<FieldError> {
    fields
        .iter()
        .filter_map(|spec| {
            let value = values.get(&spec.id).map(|v| v.trim()).unwrap_or("");
            let problem = if spec.is_required() && value.is_empty() {
                FieldProblem::Missing
            } else if spec.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value)
            {
                FieldProblem::MalformedEmail
            } else {
                return None;
            };
            Some(FieldError {
                field: spec.id.clone(),
                problem,
            })
        })
        .collect()
}
