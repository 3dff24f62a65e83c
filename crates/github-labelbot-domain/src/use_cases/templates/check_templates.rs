use std::{fs, path::Path};

use github_labelbot_domain_models::{IssueTemplate, LabelSet, TemplateKind};

use crate::{DomainError, Result};

/// Check outcome for a single template file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCheck {
    /// File name within the checked directory.
    pub file_name: String,
    /// Problems found, empty when the template is valid.
    pub problems: Vec<String>,
}

impl TemplateCheck {
    /// Check if the template is valid.
    pub fn is_valid(&self) -> bool {
        self.problems.is_empty()
    }
}

pub struct CheckTemplatesUseCase<'a> {
    /// Declared label set, used to cross-check template default labels.
    pub label_set: &'a LabelSet,
}

impl<'a> CheckTemplatesUseCase<'a> {
    /// Check every Markdown template in a directory.
    #[tracing::instrument(skip(self), fields(dir = %dir.display()))]
    pub fn run(&self, dir: &Path) -> Result<Vec<TemplateCheck>> {
        let mut entries = fs::read_dir(dir)
            .map_err(|e| DomainError::TemplateDirError {
                path: dir.display().to_string(),
                source: e,
            })?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
            .collect::<Vec<_>>();
        entries.sort();

        let mut checks = Vec::new();
        for path in entries {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            let content =
                fs::read_to_string(&path).map_err(|e| DomainError::TemplateReadError {
                    path: path.display().to_string(),
                    source: e,
                })?;

            checks.push(TemplateCheck {
                problems: self.check_content(&file_name, &content),
                file_name,
            });
        }

        Ok(checks)
    }

    /// Check a single template document.
    pub fn check_content(&self, file_name: &str, content: &str) -> Vec<String> {
        let template = match IssueTemplate::parse(content) {
            Ok(template) => template,
            Err(e) => return vec![e.to_string()],
        };

        let mut problems = Vec::new();
        if let Err(e) = template.validate() {
            problems.push(e.to_string());
        }

        // Built-in template slugs also pin their section headings.
        let stem = file_name.trim_end_matches(".md");
        if let Ok(kind) = TemplateKind::try_from(stem) {
            for heading in kind.required_headings() {
                if !template.has_heading(heading) {
                    problems.push(format!("Missing section heading: {heading}"));
                }
            }
        }

        for label in &template.front_matter.labels {
            if !self.label_set.contains(label) {
                problems.push(format!("Unknown default label: {label}"));
            }
        }

        problems
    }
}
