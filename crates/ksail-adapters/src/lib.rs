//! Infrastructure adapters for KSail.
//!
//! This crate implements the ports defined in `ksail-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod error;
pub mod filesystem;
pub mod generator;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use generator::YamlGenerator;
