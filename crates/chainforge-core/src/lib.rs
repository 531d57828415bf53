//! Chainforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Chainforge
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          chainforge-cli (CLI)           │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ProjectImporter, ProjectRunner)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, BindingGenerator, Wallet)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   chainforge-adapters (Infrastructure)  │
//! │ (LocalFilesystem, GradleProjectGenerator)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (ProjectConfig, InputVerifier, ...)    │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chainforge_core::prelude::*;
//!
//! let runner = ProjectRunner::new(generator, Arc::clone(&filesystem));
//! let importer = ProjectImporter::new(filesystem, runner, wallets);
//! let outcome = importer.run(request, &mut InteractiveOptions::new(channel))?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, GenerationReport, ImportOutcome, InteractiveOptions, ProjectImporter,
        ProjectRequest, ProjectRunner,
        ports::{BindingGenerator, Filesystem, LineChannel, WalletLocator},
    };
    pub use crate::domain::{
        DomainError, InputVerifier, LanguageFlags, Permissions, ProjectConfig, ProjectIntent,
        ProjectStructure, RenderContext, TargetLanguage, WalletCredentials,
    };
    pub use crate::error::{CoreError, CoreResult, ErrorCategory};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
