//! Values extracted from a form on submit

use serde::Serialize;
use std::collections::BTreeMap;

/// Raw per-field values keyed by field id
pub type FieldValues = BTreeMap<String, String>;

/// Flat key/value payload handed to the send operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldRecord(BTreeMap<String, String>);

impl FieldRecord {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, String)> for FieldRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_flat_object() {
        let mut record = FieldRecord::new();
        record.insert("from_name", "Asha Rai");
        record.insert("user_email", "asha@example.com");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"from_name": "Asha Rai", "user_email": "asha@example.com"})
        );
    }

    #[test]
    fn test_insert_overwrites() {
        let mut record = FieldRecord::new();
        record.insert("k", "a");
        record.insert("k", "b");
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("k"), Some("b"));
        assert!(record.get("missing").is_none());
    }
}
