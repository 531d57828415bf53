//! Infrastructure adapters for Chainforge.
//!
//! This crate implements the ports defined in `chainforge-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod generator;
pub mod prompt;
pub mod wallet;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use generator::GradleProjectGenerator;
pub use prompt::StreamChannel;
pub use wallet::KeystoreLocator;
