//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `chainforge-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `BindingGenerator`: Project skeleton and contract bindings
//!   - `WalletLocator`: Keystore lookup
//!   - `LineChannel`: Prompt/response I/O
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{BindingGenerator, Filesystem, LineChannel, WalletLocator};

#[cfg(test)]
pub use output::{MockBindingGenerator, MockFilesystem, MockWalletLocator};
