//! Contract-binding backend.
//!
//! [`GradleProjectGenerator`] implements the core `BindingGenerator` port:
//! it scans Solidity sources and renders a Gradle project around them.

mod gradle;
pub mod solidity;
mod templates;

pub use gradle::GradleProjectGenerator;
pub use solidity::{ContractDecl, DeclarationKind, HELLO_WORLD_SOL, ScanError, SoliditySource};
