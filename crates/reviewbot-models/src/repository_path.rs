//! Repository types.

use std::str::FromStr;

use thiserror::Error;

/// Type error.
#[allow(missing_docs)]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryPathError {
    /// Invalid repository path.
    #[error("Invalid repository path: {}", path)]
    InvalidRepositoryPath { path: String },
}

/// Repository path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryPath {
    owner: String,
    name: String,
}

impl RepositoryPath {
    /// Creates a new repository path.
    pub fn new(path: &str) -> Result<Self, RepositoryPathError> {
        let (owner, name) = Self::split_repo_path(path)?;

        Ok(Self {
            owner: owner.into(),
            name: name.into(),
        })
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

    fn split_repo_path(repo_path: &str) -> Result<(&str, &str), RepositoryPathError> {
        match repo_path.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok((owner, name))
            }
            _ => Err(RepositoryPathError::InvalidRepositoryPath {
                path: repo_path.to_string(),
            }),
        }
    }
}

impl From<(&str, &str)> for RepositoryPath {
    fn from((owner, name): (&str, &str)) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl FromStr for RepositoryPath {
    type Err = RepositoryPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.try_into()
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
        f.write_str(&self.full_name())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse() {
        let path = RepositoryPath::new("some-owner/some-repo").unwrap();
        assert_eq!(path.owner(), "some-owner");
        assert_eq!(path.name(), "some-repo");
        assert_eq!(path.to_string(), "some-owner/some-repo");
    }

    #[test]
    fn parse_invalid() {
        for value in ["", "owner", "owner/", "/repo", "a/b/c"] {
            assert_eq!(
                RepositoryPath::from_str(value),
                Err(RepositoryPathError::InvalidRepositoryPath { path: value.into() })
            );
        }
    }
}
