//! Core domain layer for KSail.
//!
//! This module contains pure logic with no I/O. Writing files and marshalling
//! models are handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library, thiserror and serde derives
//! - **Immutable inputs**: defaults are applied to copies, never in place
//!
// Public API - what the world sees
pub mod capabilities;
pub mod defaults;
pub mod entities;
pub mod error;
pub mod mirror;
pub mod value_objects;

// Re-exports for convenience
pub use capabilities::{Artifact, DISTRIBUTION_REGISTRY, DistributionDef, find_distribution};
pub use defaults::{apply_defaults, expected_context_name, expected_distribution_config_name};
pub use entities::{
    Cluster, ClusterSpec, DistributionConfig, EksConfig, K3dConfig, KindConfig, Kustomization,
};
pub use error::{DomainError, ErrorCategory};
pub use mirror::MirrorSpec;
pub use value_objects::{Cni, Distribution, MetricsServer};
