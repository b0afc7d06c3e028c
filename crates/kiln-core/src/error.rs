//! The error every core service returns, wrapping domain and application
//! failures with their suggestions and category.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Kiln Core operations.
#[derive(Debug, Error, Clone)]
pub enum KilnError {
    /// The descriptor or render plan violates a domain rule.
    #[error("Validation error: {0}")]
    Domain(#[from] DomainError),

    /// Export, archive or source-control failure.
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl KilnError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec!["This appears to be a bug in Kiln".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Coarse grouping the CLI maps onto exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Raised before anything is written.
    Validation,
    Io,
    /// A rejected git remote.
    Configuration,
    Internal,
}

pub type KilnResult<T> = Result<T, KilnError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn categories_follow_the_layer() {
        assert_eq!(
            KilnError::from(DomainError::NoLanguages).category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            KilnError::from(ApplicationError::FilesystemError {
                path: PathBuf::from("/x"),
                reason: "denied".into()
            })
            .category(),
            ErrorCategory::Io
        );
        assert_eq!(
            KilnError::from(ApplicationError::InvalidRemoteUrl {
                url: "nope".into(),
                reason: "no scheme".into()
            })
            .category(),
            ErrorCategory::Configuration
        );
        assert_eq!(
            KilnError::from(DomainError::MissingCatalogEntry {
                option: "license",
                value: "x".into()
            })
            .category(),
            ErrorCategory::Internal
        );
    }

    #[test]
    fn io_errors_name_the_path() {
        let err = KilnError::from(ApplicationError::FilesystemError {
            path: PathBuf::from("/tmp/out/build.gradle"),
            reason: "No space left on device".into(),
        });
        assert!(err.to_string().contains("/tmp/out/build.gradle"));
    }
}
