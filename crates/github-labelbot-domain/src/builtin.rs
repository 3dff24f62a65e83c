//! Built-in issue templates.

use github_labelbot_domain_models::{IssueTemplate, TemplateError, TemplateKind};

const BUG_REPORT: &str = include_str!("../templates/bug_report.md");
const FEATURE_REQUEST: &str = include_str!("../templates/feature_request.md");

/// Raw content of a built-in issue template.
pub fn builtin_template_content(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::BugReport => BUG_REPORT,
        TemplateKind::FeatureRequest => FEATURE_REQUEST,
    }
}

/// Parsed built-in issue template.
pub fn builtin_template(kind: TemplateKind) -> Result<IssueTemplate, TemplateError> {
    IssueTemplate::parse(builtin_template_content(kind))
}
