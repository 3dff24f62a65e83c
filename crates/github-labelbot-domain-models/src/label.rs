//! Label types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Label color error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum LabelColorError {
    /// Invalid label color.
    #[error("Invalid label color: {} (expected 6 hexadecimal digits)", value)]
    InvalidLabelColor { value: String },
}

/// A label color: 6 hexadecimal digits, stored lowercase without a leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LabelColor(String);

impl LabelColor {
    /// Creates a new label color, accepting an optional leading `#`.
    pub fn new(value: &str) -> Result<Self, LabelColorError> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(digits.to_ascii_lowercase()))
        } else {
            Err(LabelColorError::InvalidLabelColor {
                value: value.to_string(),
            })
        }
    }

    /// Get the hexadecimal digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for LabelColor {
    type Err = LabelColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for LabelColor {
    type Error = LabelColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for LabelColor {
    type Error = LabelColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<LabelColor> for String {
    fn from(color: LabelColor) -> Self {
        color.0
    }
}

impl std::fmt::Display for LabelColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A declared label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Name.
    pub name: String,
    /// Color.
    pub color: LabelColor,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Label {
    /// Get the label group, for names following the `group:rest` convention.
    pub fn group(&self) -> Option<&str> {
        self.name.split_once(':').map(|(group, _)| group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_parsing() {
        assert_eq!(LabelColor::new("b60205").unwrap().as_str(), "b60205");
        assert_eq!(LabelColor::new("#B60205").unwrap().as_str(), "b60205");
        assert!(LabelColor::new("b602").is_err());
        assert!(LabelColor::new("b60205ff").is_err());
        assert!(LabelColor::new("b6020g").is_err());
        assert!(LabelColor::new("").is_err());
    }

    #[test]
    fn color_serde_round_trip() {
        let color: LabelColor = serde_json::from_str(r#""0e8a16""#).unwrap();
        assert_eq!(color.as_str(), "0e8a16");
        assert_eq!(serde_json::to_string(&color).unwrap(), r#""0e8a16""#);

        assert!(serde_json::from_str::<LabelColor>(r#""nothex""#).is_err());
    }

    #[test]
    fn label_group() {
        let label = Label {
            name: "priority:high".into(),
            color: LabelColor::new("d93f0b").unwrap(),
            description: None,
        };
        assert_eq!(label.group(), Some("priority"));

        let label = Label {
            name: "standalone".into(),
            color: LabelColor::new("ededed").unwrap(),
            description: None,
        };
        assert_eq!(label.group(), None);
    }
}
