use std::path::Path;

use anyhow::Context;
use github_labelbot_config::Config;
use github_labelbot_domain_models::{default_label_set, LabelSet, RepositoryPath};

use crate::Result;

/// Load a label set from a JSON file, or the default catalog.
pub(crate) fn load_label_set(file: Option<&Path>) -> Result<LabelSet> {
    let set: LabelSet = match file {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Could not read label set file {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Could not parse label set file {}", path.display()))?
        }
        None => default_label_set(),
    };

    set.validate()?;
    Ok(set)
}

/// Resolve the target repository from arguments or configuration.
pub(crate) fn resolve_repository(
    config: &Config,
    repository: Option<RepositoryPath>,
) -> Result<RepositoryPath> {
    match repository {
        Some(path) => Ok(path),
        None if !config.default_repository.is_empty() => {
            Ok(config.default_repository.as_str().try_into()?)
        }
        None => anyhow::bail!(
            "No repository given: pass --repository or set LABELBOT_DEFAULT_REPOSITORY"
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_label_set_defaults_to_catalog() {
        let set = load_label_set(None).unwrap();
        assert_eq!(set, default_label_set());
    }

    #[test]
    fn load_label_set_reads_json_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"labels": [{"name": "type:bug", "color": "d73a4a"}], "delete": ["bug"]}"#,
        )
        .unwrap();

        let set = load_label_set(Some(file.path())).unwrap();
        assert_eq!(set.labels.len(), 1);
        assert_eq!(set.delete, vec!["bug".to_string()]);
    }

    #[test]
    fn load_label_set_rejects_invalid_sets() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"labels": [{"name": "a", "color": "ededed"}, {"name": "a", "color": "ededed"}]}"#,
        )
        .unwrap();

        assert!(load_label_set(Some(file.path())).is_err());
    }

    #[test]
    fn resolve_repository_prefers_the_argument() {
        let mut config = Config::from_env();
        config.default_repository = "conf/repo".into();

        let path =
            resolve_repository(&config, Some(RepositoryPath::new("arg/repo").unwrap())).unwrap();
        assert_eq!(path.full_name(), "arg/repo");
    }

    #[test]
    fn resolve_repository_falls_back_to_configuration() {
        let mut config = Config::from_env();
        config.default_repository = "conf/repo".into();

        let path = resolve_repository(&config, None).unwrap();
        assert_eq!(path.full_name(), "conf/repo");
    }

    #[test]
    fn resolve_repository_fails_without_any_source() {
        let mut config = Config::from_env();
        config.default_repository = String::new();

        assert!(resolve_repository(&config, None).is_err());
    }
}
