//! Domain value objects: TargetLanguage, LanguageFlags, ProjectIntent.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Everything that differs between a Java and a Kotlin project at the
//! *domain* level (source directory, file extension, wallet usage) is a
//! method on [`TargetLanguage`]. Template text lives in the generator adapter.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── TargetLanguage ───────────────────────────────────────────────────────────

/// JVM language the generated project is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    Java,
    #[default]
    Kotlin,
}

impl TargetLanguage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Kotlin => "kotlin",
        }
    }

    /// Directory name under `src/main` and `src/test`.
    pub const fn source_dir(&self) -> &'static str {
        self.as_str()
    }

    pub const fn file_extension(&self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Kotlin => "kt",
        }
    }

    /// Whether generated projects embed wallet credentials.
    ///
    /// Only the Kotlin runner wires a wallet into the generated entry point.
    pub const fn uses_wallet(&self) -> bool {
        matches!(self, Self::Kotlin)
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetLanguage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "java" => Ok(Self::Java),
            "kotlin" | "kt" => Ok(Self::Kotlin),
            other => Err(DomainError::UnknownLanguage(other.to_string())),
        }
    }
}

// ── LanguageFlags ────────────────────────────────────────────────────────────

/// The raw `--java` / `--kotlin` switches as given on the command line.
///
/// Invariant: at most one may be set. [`LanguageFlags::resolve`] is the only
/// way to turn flags into a [`TargetLanguage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageFlags {
    pub java: bool,
    pub kotlin: bool,
}

impl LanguageFlags {
    pub const fn new(java: bool, kotlin: bool) -> Self {
        Self { java, kotlin }
    }

    /// Kotlin unless `--java` was given; both at once is a usage error.
    pub fn resolve(self) -> Result<TargetLanguage, DomainError> {
        match (self.java, self.kotlin) {
            (true, true) => Err(DomainError::ConflictingLanguages),
            (true, false) => Ok(TargetLanguage::Java),
            (false, _) => Ok(TargetLanguage::Kotlin),
        }
    }
}

// ── ProjectIntent ────────────────────────────────────────────────────────────

/// Which command is creating the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectIntent {
    /// Fresh project around the bundled sample contract.
    New,
    /// Project around existing Solidity sources.
    Import,
}

impl ProjectIntent {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Import => "import",
        }
    }
}

impl fmt::Display for ProjectIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
