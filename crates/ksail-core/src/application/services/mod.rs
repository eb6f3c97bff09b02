//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a cluster project".

pub mod file_emitter;
pub mod scaffold_service;

pub use file_emitter::{FileEmitter, GenerationRequest};
pub use scaffold_service::{Generators, ScaffoldService};
