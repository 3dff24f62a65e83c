use std::{
    fs,
    path::{Path, PathBuf},
};

use github_labelbot_domain_models::TemplateKind;

use crate::{builtin_template_content, DomainError, Result};

/// Where issue templates live inside a working copy.
pub const TEMPLATE_SUBDIR: &str = ".github/ISSUE_TEMPLATE";

/// Outcome of a template installation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Files written.
    pub written: Vec<PathBuf>,
    /// Files left alone because they already exist.
    pub skipped: Vec<PathBuf>,
}

pub struct InstallTemplatesUseCase;

impl InstallTemplatesUseCase {
    /// Install the built-in templates under `<root>/.github/ISSUE_TEMPLATE/`.
    ///
    /// Existing files are preserved unless `force` is set.
    #[tracing::instrument(skip(self), fields(root = %root.display(), force))]
    pub fn run(&self, root: &Path, force: bool) -> Result<InstallReport> {
        let dir = root.join(TEMPLATE_SUBDIR);
        fs::create_dir_all(&dir).map_err(|e| DomainError::TemplateWriteError {
            path: dir.display().to_string(),
            source: e,
        })?;

        let mut report = InstallReport::default();
        for kind in TemplateKind::ALL {
            let target = dir.join(kind.file_name());
            if target.exists() && !force {
                report.skipped.push(target);
                continue;
            }

            fs::write(&target, builtin_template_content(kind)).map_err(|e| {
                DomainError::TemplateWriteError {
                    path: target.display().to_string(),
                    source: e,
                }
            })?;
            report.written.push(target);
        }

        Ok(report)
    }
}
