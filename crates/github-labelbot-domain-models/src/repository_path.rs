//! Repository path.

use std::str::FromStr;

use thiserror::Error;

/// Repository path error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum RepositoryPathError {
    /// Invalid repository path.
    #[error("Invalid repository path: {} (expected 'owner/name')", path)]
    InvalidRepositoryPath { path: String },
}

/// Repository path, in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryPath {
    owner: String,
    name: String,
}

impl RepositoryPath {
    /// Creates a new repository path from a `owner/name` string.
    pub fn new(path: &str) -> Result<Self, RepositoryPathError> {
        match path.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self {
                    owner: owner.into(),
                    name: name.into(),
                })
            }
            _ => Err(RepositoryPathError::InvalidRepositoryPath {
                path: path.to_string(),
            }),
        }
    }

    /// Creates a new repository path from components.
    pub fn new_from_components(owner: &str, name: &str) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Get owner and name.
    pub fn components(&self) -> (&str, &str) {
        (&self.owner, &self.name)
    }

    /// Get owner.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Get name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepositoryPath {
    type Err = RepositoryPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for RepositoryPath {
    type Error = RepositoryPathError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for RepositoryPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_path() {
        let path = RepositoryPath::new("owner/name").unwrap();
        assert_eq!(path.components(), ("owner", "name"));
        assert_eq!(path.full_name(), "owner/name");
    }

    #[test]
    fn parse_invalid_paths() {
        assert!(RepositoryPath::new("owner").is_err());
        assert!(RepositoryPath::new("owner/").is_err());
        assert!(RepositoryPath::new("/name").is_err());
        assert!(RepositoryPath::new("owner/name/extra").is_err());
    }
}
