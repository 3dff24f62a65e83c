//! Issue template types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Template error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Missing front matter fence.
    #[error("Missing front matter fence in issue template")]
    MissingFrontMatter,

    /// Unterminated front matter fence.
    #[error("Unterminated front matter fence in issue template")]
    UnterminatedFrontMatter,

    /// Invalid front matter.
    #[error("Could not parse front matter,\n  caused by: {}", source)]
    InvalidFrontMatter { source: serde_yaml::Error },

    /// Missing front matter field.
    #[error("Missing front matter field: {}", field)]
    MissingField { field: &'static str },

    /// Unknown template kind.
    #[error("Unknown issue template kind: {}", name)]
    UnknownTemplateKind { name: String },
}

/// Built-in issue template kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TemplateKind {
    /// Bug report.
    BugReport,
    /// Feature request.
    FeatureRequest,
}

impl TemplateKind {
    /// All built-in kinds.
    pub const ALL: [TemplateKind; 2] = [Self::BugReport, Self::FeatureRequest];

    /// Convert template kind to static str.
    pub fn to_str(self) -> &'static str {
        self.into()
    }

    /// File name of the template in `.github/ISSUE_TEMPLATE/`.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::BugReport => "bug_report.md",
            Self::FeatureRequest => "feature_request.md",
        }
    }

    /// Section headings that the template body must contain.
    pub fn required_headings(self) -> &'static [&'static str] {
        match self {
            Self::BugReport => &[
                "## Describe the bug",
                "## To reproduce",
                "## Expected behavior",
                "## Environment",
                "## Additional context",
            ],
            Self::FeatureRequest => &[
                "## Problem",
                "## Proposed solution",
                "## Alternatives considered",
                "## Additional context",
            ],
        }
    }
}

impl From<TemplateKind> for &'static str {
    fn from(kind: TemplateKind) -> Self {
        match kind {
            TemplateKind::BugReport => "bug_report",
            TemplateKind::FeatureRequest => "feature_request",
        }
    }
}

impl TryFrom<&str> for TemplateKind {
    type Error = TemplateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "bug_report" => Ok(Self::BugReport),
            "feature_request" => Ok(Self::FeatureRequest),
            name => Err(TemplateError::UnknownTemplateKind {
                name: name.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Issue template front matter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateFrontMatter {
    /// Template name.
    #[serde(default)]
    pub name: String,
    /// Template description.
    #[serde(default)]
    pub about: String,
    /// Default issue title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Default labels.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    /// Default assignees.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<String>,
}

/// A parsed issue template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueTemplate {
    /// Front matter.
    pub front_matter: TemplateFrontMatter,
    /// Markdown body.
    pub body: String,
}

impl IssueTemplate {
    /// Parse a front-mattered Markdown document.
    pub fn parse(content: &str) -> Result<Self, TemplateError> {
        let mut lines = content.lines();
        match lines.next() {
            Some(line) if line.trim_end() == "---" => (),
            _ => return Err(TemplateError::MissingFrontMatter),
        }

        let mut front = String::new();
        let mut body = String::new();
        let mut in_front_matter = true;
        for line in lines {
            if in_front_matter && line.trim_end() == "---" {
                in_front_matter = false;
                continue;
            }

            let target = if in_front_matter { &mut front } else { &mut body };
            target.push_str(line);
            target.push('\n');
        }

        if in_front_matter {
            return Err(TemplateError::UnterminatedFrontMatter);
        }

        let front_matter = serde_yaml::from_str(&front)
            .map_err(|e| TemplateError::InvalidFrontMatter { source: e })?;

        Ok(Self { front_matter, body })
    }

    /// Validate required front matter fields.
    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.front_matter.name.trim().is_empty() {
            return Err(TemplateError::MissingField { field: "name" });
        }
        if self.front_matter.about.trim().is_empty() {
            return Err(TemplateError::MissingField { field: "about" });
        }

        Ok(())
    }

    /// Check if the body contains a heading, on its own line.
    pub fn has_heading(&self, heading: &str) -> bool {
        self.body.lines().any(|line| line.trim_end() == heading)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE: &str = "---\nname: Bug report\nabout: Report a defect\ntitle: \"[BUG] \"\nlabels:\n  - type:bug\n---\n\n## Describe the bug\n\nA description.\n";

    #[test]
    fn parse_sample_template() {
        let template = IssueTemplate::parse(SAMPLE).unwrap();
        assert_eq!(template.front_matter.name, "Bug report");
        assert_eq!(template.front_matter.about, "Report a defect");
        assert_eq!(template.front_matter.title.as_deref(), Some("[BUG] "));
        assert_eq!(template.front_matter.labels, vec!["type:bug".to_string()]);
        assert!(template.front_matter.assignees.is_empty());
        assert!(template.has_heading("## Describe the bug"));
        assert!(!template.has_heading("## Environment"));
        template.validate().unwrap();
    }

    #[test]
    fn parse_rejects_missing_fence() {
        assert!(matches!(
            IssueTemplate::parse("# No front matter\n"),
            Err(TemplateError::MissingFrontMatter)
        ));
    }

    #[test]
    fn parse_rejects_unterminated_fence() {
        assert!(matches!(
            IssueTemplate::parse("---\nname: x\nabout: y\n"),
            Err(TemplateError::UnterminatedFrontMatter)
        ));
    }

    #[test]
    fn parse_rejects_invalid_yaml() {
        assert!(matches!(
            IssueTemplate::parse("---\nname: [unclosed\n---\nbody\n"),
            Err(TemplateError::InvalidFrontMatter { .. })
        ));
    }

    #[test]
    fn validate_requires_name_and_about() {
        let template = IssueTemplate::parse("---\nabout: y\n---\nbody\n").unwrap();
        assert!(matches!(
            template.validate(),
            Err(TemplateError::MissingField { field: "name" })
        ));

        let template = IssueTemplate::parse("---\nname: x\n---\nbody\n").unwrap();
        assert!(matches!(
            template.validate(),
            Err(TemplateError::MissingField { field: "about" })
        ));
    }

    #[test]
    fn template_kind_round_trip() {
        for kind in TemplateKind::ALL {
            assert_eq!(TemplateKind::try_from(kind.to_str()).unwrap(), kind);
        }
        assert!(TemplateKind::try_from("unknown").is_err());
    }
}
