use super::DomainError;
use serde::Serialize;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path guaranteed to stay inside the project root.
///
/// Invariant: never absolute, never empty, no `..` components. Enforced at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        check(&path)?;
        Ok(Self(path))
    }

    /// Join a segment, maintaining the relative invariant.
    pub fn join(&self, segment: impl AsRef<Path>) -> Result<Self, DomainError> {
        let segment = segment.as_ref();
        check(segment)?;
        Ok(Self(self.0.join(segment)))
    }

    /// Every proper ancestor, outermost first (`a`, `a/b` for `a/b/c`).
    pub fn ancestors(&self) -> Vec<RelativePath> {
        let mut out: Vec<_> = self
            .0
            .ancestors()
            .skip(1)
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| Self(p.to_path_buf()))
            .collect();
        out.reverse();
        out
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.to_str().unwrap_or("")
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

fn check(path: &Path) -> Result<(), DomainError> {
    let display = || path.display().to_string();

    if path.as_os_str().is_empty() {
        return Err(DomainError::PathEscapesRoot { path: display() });
    }
    if path.is_absolute() || path.has_root() {
        return Err(DomainError::AbsolutePathNotAllowed { path: display() });
    }
    if path
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
    {
        return Err(DomainError::PathEscapesRoot { path: display() });
    }
    Ok(())
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
