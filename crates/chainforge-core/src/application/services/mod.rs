//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "import a Solidity project".

pub mod importer;
pub mod interactive;
pub mod runner;

pub use importer::{ImportOutcome, ProjectImporter, ProjectRequest};
pub use interactive::{DEFAULT_PACKAGE_NAME, DEFAULT_PROJECT_NAME, InteractiveOptions};
pub use runner::{GenerationReport, ProjectRunner};
