// ============================================================================
// domain/error.rs - PROJECT CONFIGURATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to carry through the resolution phases)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// The `Display` strings of the first three variants are read by scripted
/// callers and must stay byte-for-byte stable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Usage Errors
    // ========================================================================
    #[error("Must only use one of --java or --kotlin")]
    ConflictingLanguages,

    #[error("Please make sure the required parameters are not empty.")]
    EmptyRequiredArgs,

    #[error("{name} is not a valid project name: {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("{name} is not a valid package name: {reason}")]
    InvalidPackageName { name: String, reason: String },

    #[error("unknown target language: {0}")]
    UnknownLanguage(String),

    // ========================================================================
    // Structure Errors
    // ========================================================================
    #[error("Generated project structure is empty")]
    EmptyStructure,

    #[error("Duplicate path in generated project: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConflictingLanguages => vec![
                "Pass --java for a Java project or --kotlin for a Kotlin project".into(),
                "Kotlin is used when neither flag is given".into(),
            ],
            Self::EmptyRequiredArgs => vec![
                "Provide both --project-name and --package".into(),
                "Or omit both to be prompted interactively".into(),
            ],
            Self::InvalidProjectName { .. } => vec![
                "The project name becomes a class name, so it must be a valid identifier".into(),
                "Start with a letter, `_` or `$`; use letters, digits, `_` or `$` after".into(),
                "Examples: Test, MyDapp, Web3App".into(),
            ],
            Self::InvalidPackageName { .. } => vec![
                "Use dot-separated identifiers, e.g. org.example.dapp".into(),
                "Segments cannot be empty or reserved words such as `class`".into(),
            ],
            Self::UnknownLanguage(_) => vec!["Supported languages: java, kotlin".into()],
            Self::EmptyStructure | Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                vec!["The project generator produced an invalid layout".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConflictingLanguages
            | Self::EmptyRequiredArgs
            | Self::InvalidProjectName { .. }
            | Self::InvalidPackageName { .. }
            | Self::UnknownLanguage(_) => ErrorCategory::Validation,
            Self::EmptyStructure | Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
