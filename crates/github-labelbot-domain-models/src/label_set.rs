//! Label set.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Label;

/// Label set error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum LabelSetError {
    /// Duplicate label name.
    #[error("Duplicate label name: {}", name)]
    DuplicateName { name: String },

    /// Label declared and marked for deletion at the same time.
    #[error("Label {} is both declared and marked for deletion", name)]
    DeclaredAndDeleted { name: String },
}

/// A declared label set, with stock label names to delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet {
    /// Declared labels.
    pub labels: Vec<Label>,
    /// Stock label names to delete from the repository.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub delete: Vec<String>,
}

impl LabelSet {
    /// Validate the set: names must be unique (GitHub label names are
    /// case-insensitive) and deletion targets must not be declared.
    pub fn validate(&self) -> Result<(), LabelSetError> {
        let mut seen = HashSet::new();
        for label in &self.labels {
            if !seen.insert(label.name.to_lowercase()) {
                return Err(LabelSetError::DuplicateName {
                    name: label.name.clone(),
                });
            }
        }

        for name in &self.delete {
            if seen.contains(&name.to_lowercase()) {
                return Err(LabelSetError::DeclaredAndDeleted { name: name.clone() });
            }
        }

        Ok(())
    }

    /// Get a declared label by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&Label> {
        self.labels
            .iter()
            .find(|l| l.name.eq_ignore_ascii_case(name))
    }

    /// Check if a label name is declared, case-insensitively.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LabelColor;

    fn label(name: &str) -> Label {
        Label {
            name: name.into(),
            color: LabelColor::new("ededed").unwrap(),
            description: None,
        }
    }

    #[test]
    fn validate_accepts_distinct_names() {
        let set = LabelSet {
            labels: vec![label("type:bug"), label("type:feature")],
            delete: vec!["bug".into()],
        };
        assert!(set.validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_names() {
        let set = LabelSet {
            labels: vec![label("type:bug"), label("Type:Bug")],
            delete: vec![],
        };
        assert!(matches!(
            set.validate(),
            Err(LabelSetError::DuplicateName { name }) if name == "Type:Bug"
        ));
    }

    #[test]
    fn validate_rejects_declared_deletion_target() {
        let set = LabelSet {
            labels: vec![label("type:bug")],
            delete: vec!["TYPE:BUG".into()],
        };
        assert!(matches!(
            set.validate(),
            Err(LabelSetError::DeclaredAndDeleted { .. })
        ));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let set = LabelSet {
            labels: vec![label("status:triage")],
            delete: vec![],
        };
        assert!(set.contains("Status:Triage"));
        assert!(!set.contains("status:blocked"));
    }

    #[test]
    fn json_round_trip() {
        let set = LabelSet {
            labels: vec![Label {
                name: "type:bug".into(),
                color: LabelColor::new("d73a4a").unwrap(),
                description: Some("Something is broken".into()),
            }],
            delete: vec!["bug".into()],
        };

        let serialized = serde_json::to_string(&set).unwrap();
        let deserialized: LabelSet = serde_json::from_str(&serialized).unwrap();
        assert_eq!(set, deserialized);
    }
}
