//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `chainforge-adapters` crate provides implementations.

use std::io;
use std::path::Path;

use crate::domain::{ProjectConfig, ProjectStructure, WalletCredentials};
use crate::error::CoreResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `chainforge_adapters::filesystem::LocalFilesystem` (production)
/// - `chainforge_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CoreResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> CoreResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> CoreResult<()>;
}

/// Port for the contract-binding backend.
///
/// Turns a resolved configuration into the full set of files for the
/// project skeleton: build files, entry point, bindings and optional tests.
/// The structure's root must be `config.project_root()`.
#[cfg_attr(test, mockall::automock)]
pub trait BindingGenerator: Send + Sync {
    fn generate(
        &self,
        config: &ProjectConfig,
        wallet: Option<WalletCredentials>,
    ) -> CoreResult<ProjectStructure>;
}

/// Port for the wallet utility.
///
/// Resolves a user-supplied location to a concrete keystore file.
#[cfg_attr(test, mockall::automock)]
pub trait WalletLocator: Send + Sync {
    fn locate(&self, path: &Path, password: &str) -> CoreResult<WalletCredentials>;
}

/// A line-oriented prompt/response channel.
///
/// Real terminals and scripted test input both implement this, so the
/// interactive flow never touches process-global stdin/stdout directly.
pub trait LineChannel {
    /// Write one line of text to the user.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Block until one line is available. `None` means end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write a question, then read the answer.
    fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        self.write_line(question)?;
        self.read_line()
    }
}

impl<C: LineChannel + ?Sized> LineChannel for &mut C {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }

    fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        (**self).prompt(question)
    }
}
