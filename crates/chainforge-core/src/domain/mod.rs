//! Core domain layer for Chainforge.
//!
//! Pure logic with no I/O: the values a project configuration is made of,
//! the rules that decide whether it is acceptable, and the description of
//! the files a generator wants written.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, terminal, or process calls
//! - **Immutable entities**: `ProjectConfig` has no setters
//!
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    common::Permissions,
    project_config::ProjectConfig,
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
    render_context::RenderContext,
    wallet::WalletCredentials,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{LanguageFlags, ProjectIntent, TargetLanguage};

pub use validation::InputVerifier;
