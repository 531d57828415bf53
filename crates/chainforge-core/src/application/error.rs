//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while resolving and generating a project.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The user declined to overwrite an existing project directory.
    #[error("Project creation was canceled.")]
    Cancelled { path: PathBuf },

    /// The binding generator could not produce a project.
    #[error("Project generation failed: {reason}")]
    GenerationFailed { reason: String },

    /// Solidity sources were requested but could not be found.
    #[error("No solidity sources found at {path}")]
    SourcesNotFound { path: PathBuf },

    /// No keystore at the given location.
    #[error("No wallet file found at {path}")]
    WalletNotFound { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Reading from or writing to the prompt channel failed.
    #[error("Prompt I/O failed: {reason}")]
    Prompt { reason: String },

    /// Shared adapter state was poisoned.
    #[error("Adapter lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Cancelled { path } => vec![
                format!("Nothing was changed at {}", path.display()),
                "Choose a different project name or output directory".into(),
            ],
            Self::GenerationFailed { .. } => vec![
                "Check that your Solidity sources declare at least one contract".into(),
                "Files written before the failure are left on disk".into(),
            ],
            Self::SourcesNotFound { path } => vec![
                format!("Check the path: {}", path.display()),
                "Pass a .sol file or a folder containing .sol files with --solidity-path".into(),
            ],
            Self::WalletNotFound { path } => vec![
                format!("Check the wallet path: {}", path.display()),
                "Point to a keystore .json file or a folder containing one".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::Prompt { .. } => vec!["Standard input was closed or unreadable".into()],
            Self::LockPoisoned => vec!["This is a bug, please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Cancelled { .. } => ErrorCategory::Cancelled,
            Self::SourcesNotFound { .. } | Self::WalletNotFound { .. } => ErrorCategory::NotFound,
            Self::GenerationFailed { .. } => ErrorCategory::Generation,
            Self::FilesystemError { .. } | Self::Prompt { .. } | Self::LockPoisoned => {
                ErrorCategory::Internal
            }
        }
    }
}

impl From<std::io::Error> for ApplicationError {
    fn from(err: std::io::Error) -> Self {
        Self::Prompt {
            reason: err.to_string(),
        }
    }
}
