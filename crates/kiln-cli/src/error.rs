//! CLI errors: what went wrong, what to try next, and the exit code.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use kiln_core::domain::DomainError;
use kiln_core::error::KilnError;

pub use kiln_core::error::ErrorCategory as CoreCategory;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Input clap accepted but the command cannot use.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// The config file or environment could not be read, parsed or written.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// Raised by `kiln-core` or an adapter. Displayed unchanged, since the
    /// core message already names the path or value.
    #[error("{0}")]
    Core(#[from] KilnError),

    /// A filesystem or terminal operation owned by the CLI failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The user declined the confirmation prompt.
    #[error("Generation cancelled")]
    Cancelled,

    /// The prompt is needed but this build has no `interactive` feature.
    #[error("This build cannot prompt for confirmation ('{feature}' feature disabled)")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            context: "writing output".into(),
            source,
        }
    }
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        Self::Core(err.into())
    }
}

impl CliError {
    /// What the user can try next.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { .. } => vec!["See 'kiln new --help' for the expected arguments".into()],
            Self::Config { .. } => vec![
                "Show the active file with 'kiln config path'".into(),
                "Check KILN_* environment variables for typos".into(),
                "Regenerate defaults with 'kiln init --force'".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::Io { .. } => vec!["Check permissions on the target directory".into()],
            Self::Cancelled => vec!["Nothing was written".into()],
            Self::FeatureNotAvailable { feature } => vec![
                "Pass --yes to skip the confirmation prompt".into(),
                format!("Or rebuild with: cargo install kiln-cli --features {feature}"),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::Cancelled => ErrorCategory::UserError,
            Self::Config { .. } | Self::FeatureNotAvailable { .. } => ErrorCategory::Configuration,
            Self::Io { .. } => ErrorCategory::Internal,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Io | CoreCategory::Internal => ErrorCategory::Internal,
            },
        }
    }

    /// `2` for user mistakes, `4` for configuration, `1` otherwise.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Stderr report: headline, causes when `verbose`, then suggestions.
    /// `styled` adds ANSI colours for a terminal.
    pub fn render(&self, verbose: bool, styled: bool) -> String {
        let mut out = String::from("\n");
        if styled {
            out.push_str(&format!("{} {}\n", "✗ Error:".red().bold(), self.red()));
        } else {
            out.push_str(&format!("Error: {self}\n"));
        }

        if verbose {
            for cause in self.causes() {
                if styled {
                    out.push_str(&format!("  {}\n", format!("→ {cause}").dimmed()));
                } else {
                    out.push_str(&format!("  Caused by: {cause}\n"));
                }
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            if styled {
                out.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            } else {
                out.push_str("\nSuggestions:\n");
            }
            for suggestion in &suggestions {
                out.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            let hint = "Run again with -v / --verbose for the underlying cause.";
            if styled {
                out.push_str(&format!("\n{}\n", hint.dimmed()));
            } else {
                out.push_str(&format!("\n{hint}\n"));
            }
        }

        out
    }

    fn causes(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        std::iter::successors(self.source(), |&err| err.source())
    }

    pub fn log(&self) {
        let category = self.category();
        match category {
            ErrorCategory::UserError => tracing::warn!(?category, error = %self, "command rejected"),
            _ => tracing::error!(?category, error = %self, "command failed"),
        }
        for cause in self.causes() {
            tracing::debug!(%cause, "caused by");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad arguments or a descriptor that fails validation.
    UserError,
    /// Config file, environment, build features or a rejected git remote.
    Configuration,
    /// Filesystem, git or archive failure.
    Internal,
}

/// Attach a context message to an I/O failure outside the core.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| CliError::Io {
            context: f().into(),
            source,
        })
    }
}
