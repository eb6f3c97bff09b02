//! KSail Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for scaffolding a
//! KSail Kubernetes cluster project, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             ksail-cli (CLI)             │
//! │       (Implements Driving Ports)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │      (ScaffoldService, FileEmitter)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │      (Driven: Filesystem, Generator)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     ksail-adapters (Infrastructure)     │
//! │ (LocalFilesystem, YamlGenerator, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ClusterSpec, defaults, mirror specs)  │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ksail_core::prelude::*;
//!
//! // 1. Describe the cluster
//! let spec = ClusterSpec {
//!     distribution: Distribution::K3d,
//!     ..ClusterSpec::default()
//! };
//!
//! // 2. Use application service (with injected adapters)
//! let service = ScaffoldService::new(spec, filesystem, Generators::uniform(generator));
//! let mut events: Vec<ScaffoldEvent> = Vec::new();
//! service.scaffold("./my-cluster", false, &mut events).unwrap();
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        EventSink, Generators, ScaffoldEvent, ScaffoldService,
        ports::{FileStat, Filesystem, GenerateOptions, Generator},
    };
    pub use crate::domain::{
        Cluster, ClusterSpec, Cni, Distribution, DistributionConfig, Kustomization,
        MetricsServer, MirrorSpec, apply_defaults,
    };
    pub use crate::error::{KsailError, KsailResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
