//! Error handling for the chainforge CLI.
//!
//! Provides structured errors with:
//! - User-facing messages (core messages pass through unprefixed)
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use chainforge_core::error::CoreError;

pub use chainforge_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `chainforge-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    // ── Config errors ──────────────────────────────────────────────────────
    /// The tool configuration could not be loaded.
    #[error("Configuration error: {message}")]
    ConfigLoad {
        message: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },

    /// `chainforge config` could not serialize the loaded configuration.
    #[error("Failed to read config")]
    ConfigSerialization {
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },

    // ── System errors ──────────────────────────────────────────────────────
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Wrap an `anyhow` error raised while loading configuration.
    pub fn config_load(err: anyhow::Error) -> Self {
        Self::ConfigLoad {
            message: err.to_string(),
            source: err.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core_err) => core_err.suggestions(),

            Self::ConfigLoad { .. } => vec![
                format!(
                    "Check your config file at {}",
                    crate::config::ToolConfig::config_path().display()
                ),
                "Environment overrides use the CHAINFORGE_ prefix, e.g. CHAINFORGE_UPDATE_PROMPT=false"
                    .into(),
            ],

            Self::ConfigSerialization { .. } => vec![
                "Try the other output format: --format json or --format toml".into(),
            ],

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Cancelled => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Generation | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::ConfigLoad { .. } | Self::ConfigSerialization { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    ///
    /// Anything the user can fix is logged at `info` so the rendered
    /// message is the only copy on stderr at the default level.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::info!("User error: {}", self),
            ErrorCategory::NotFound => tracing::info!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::info!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, conflicting flags, cancellation).
    UserError,
    /// Wallet or Solidity sources not found.
    NotFound,
    /// Configuration could not be loaded or rendered.
    Configuration,
    /// Generation or system failure.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    use chainforge_core::application::ApplicationError;
    use chainforge_core::domain::DomainError;

    fn core(err: impl Into<CoreError>) -> CliError {
        CliError::Core(err.into())
    }

    // ── messages ──────────────────────────────────────────────────────────

    #[test]
    fn core_messages_are_not_prefixed() {
        assert_eq!(
            core(DomainError::ConflictingLanguages).to_string(),
            "Must only use one of --java or --kotlin"
        );
        assert_eq!(
            core(ApplicationError::Cancelled {
                path: PathBuf::from("/tmp/Test")
            })
            .to_string(),
            "Project creation was canceled."
        );
    }

    #[test]
    fn serialization_failure_message() {
        let err = CliError::ConfigSerialization {
            source: "unsupported value".into(),
        };
        assert_eq!(err.to_string(), "Failed to read config");
    }

    #[test]
    fn message_appears_once_in_plain_output() {
        let s = core(DomainError::EmptyRequiredArgs).format_plain(false);
        assert_eq!(
            s.matches("Please make sure the required parameters are not empty.")
                .count(),
            1
        );
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        assert_eq!(core(DomainError::EmptyRequiredArgs).exit_code(), 2);
        assert_eq!(
            core(ApplicationError::Cancelled {
                path: PathBuf::from("x")
            })
            .exit_code(),
            2
        );
    }

    #[test]
    fn exit_code_not_found() {
        let err = core(ApplicationError::WalletNotFound {
            path: PathBuf::from("/keys"),
        });
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_configuration() {
        let err = CliError::config_load(anyhow::anyhow!("bad file"));
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("bad file"));
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            core(ApplicationError::GenerationFailed { reason: "x".into() }).exit_code(),
            1
        );
        assert_eq!(CliError::from(io::Error::other("e")).exit_code(), 1);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let s = core(DomainError::ConflictingLanguages).format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err = CliError::ConfigSerialization {
            source: "unsupported value".into(),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: unsupported value"));
        assert!(!s.contains("--verbose"));
    }
}
