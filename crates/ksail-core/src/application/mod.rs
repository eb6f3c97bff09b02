//! Application layer for KSail.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, FileEmitter)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Events**: What the scaffolder reports back to its caller
//! - **Errors**: Application-specific error types, including per-artifact sentinels
//!
//! The application layer coordinates the domain layer but contains no
//! spec logic itself. Defaults, models and mirror parsing live in `crate::domain`.

pub mod error;
pub mod events;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{FileEmitter, GenerationRequest, Generators, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{FileStat, Filesystem, GenerateOptions, Generator};

pub use error::ApplicationError;
pub use events::{EventSink, ScaffoldEvent};
