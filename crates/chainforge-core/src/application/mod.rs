//! Application layer for Chainforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProjectImporter, ProjectRunner, InteractiveOptions)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    GenerationReport, ImportOutcome, InteractiveOptions, ProjectImporter, ProjectRequest,
    ProjectRunner,
};

// Re-export port traits (for adapter implementation)
pub use ports::{BindingGenerator, Filesystem, LineChannel, WalletLocator};

pub use error::ApplicationError;
