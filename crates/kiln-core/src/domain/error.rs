// ============================================================================
// domain/error.rs - DESCRIPTOR AND PLAN VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass across layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Descriptor Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid group '{group}': {reason}")]
    InvalidGroup { group: String, reason: String },

    #[error("Invalid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error("At least one language must be selected")]
    NoLanguages,

    #[error("Invalid dependency '{coordinates}': {reason}")]
    InvalidDependency { coordinates: String, reason: String },

    #[error("Invalid plugin id '{id}': {reason}")]
    InvalidPluginId { id: String, reason: String },

    #[error("Gradle plugin '{coordinates}' must use the classpath scope, found '{scope}'")]
    MisscopedGradlePlugin { coordinates: String, scope: String },

    #[error("Unknown {option}: '{value}'")]
    UnknownOption { option: &'static str, value: String },

    // ========================================================================
    // Render Plan Errors
    // ========================================================================
    #[error("Duplicate path in render plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the project root: {path}")]
    PathEscapesRoot { path: String },

    // ========================================================================
    // Catalog Integrity
    // ========================================================================
    #[error("Option catalog has no entry for {option} '{value}'")]
    MissingCatalogEntry { option: &'static str, value: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { .. } => vec![
                "Use 1-64 letters, digits, '.', '-' or '_'".into(),
                "Start the name with a letter or digit".into(),
                "Examples: my-service, billing_api, app2".into(),
            ],
            Self::InvalidGroup { .. } => vec![
                "Use a dotted Java package prefix".into(),
                "Examples: com.example, io.acme.billing".into(),
            ],
            Self::InvalidVersion { .. } => vec![
                "Use a version such as 0.1.0 or 1.0.0-SNAPSHOT".into(),
            ],
            Self::NoLanguages => vec![
                "Select at least one of: java, kotlin, groovy, scala".into(),
                "Example: kiln new my-app --lang java".into(),
            ],
            Self::InvalidDependency { .. } => vec![
                "Dependencies are written group:artifact:version[:scope]".into(),
                "Example: com.google.guava:guava:33.2.0-jre:compile".into(),
            ],
            Self::MisscopedGradlePlugin { .. } => vec![
                "Gradle plugins are resolved from the build-script classpath".into(),
                "Pass them with --gradle-plugin group:artifact:version".into(),
            ],
            Self::UnknownOption { option, .. } => vec![
                format!("'{option}' is not recognised by the option catalog"),
                "List every supported value with: kiln options".into(),
            ],
            Self::MissingCatalogEntry { .. } => vec![
                "The built-in option catalog is incomplete".into(),
                "This is a bug in Kiln, please report it".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingCatalogEntry { .. }
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. } => ErrorCategory::Internal,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
