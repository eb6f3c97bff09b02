//! Distribution capability registry.
//!
//! Each distribution the scaffolder supports is described exactly once by a
//! [`DistributionDef`]: which artifact its config file is, and how to build its
//! config model from a [`ClusterSpec`]. Dispatch is a table lookup, never a
//! `match` spread across the application layer.
//!
//! # Adding a New Distribution
//!
//! 1. Add a variant to `Distribution` in `value_objects.rs`
//! 2. Add its model to `entities/distribution.rs` and a `DistributionConfig` arm
//! 3. Add one [`Artifact`] variant and one [`DistributionDef`] entry here

use std::fmt;

use crate::domain::{
    entities::{
        cluster::ClusterSpec,
        distribution::{DistributionConfig, EksConfig, K3dConfig, KindConfig},
    },
    value_objects::Distribution,
};

// ── Artifacts ────────────────────────────────────────────────────────────────

/// Every file the scaffolder can emit.
///
/// Used for event display names and to select the failure sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    KSailConfig,
    KindConfig,
    K3dConfig,
    EksConfig,
    Kustomization,
}

impl Artifact {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::KSailConfig => "ksail.yaml",
            Self::KindConfig => "kind.yaml",
            Self::K3dConfig => "k3d.yaml",
            Self::EksConfig => "eks.yaml",
            Self::Kustomization => "kustomization.yaml",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Distribution definitions ─────────────────────────────────────────────────

/// Everything the scaffolder needs to know about one distribution.
#[derive(Debug, Clone, Copy)]
pub struct DistributionDef {
    /// The distribution this entry describes.
    pub distribution: Distribution,

    /// The artifact its config file counts as.
    pub artifact: Artifact,

    /// Builds the distribution config from an already-defaulted spec.
    pub build: fn(&ClusterSpec) -> DistributionConfig,
}

/// Single source of truth for supported distributions.
///
/// `Distribution::Unknown` deliberately has no entry.
pub static DISTRIBUTION_REGISTRY: &[DistributionDef] = &[
    DistributionDef {
        distribution: Distribution::Kind,
        artifact: Artifact::KindConfig,
        build: |spec| DistributionConfig::Kind(KindConfig::from_spec(spec)),
    },
    DistributionDef {
        distribution: Distribution::K3d,
        artifact: Artifact::K3dConfig,
        build: |spec| DistributionConfig::K3d(K3dConfig::from_spec(spec)),
    },
    DistributionDef {
        distribution: Distribution::Eks,
        artifact: Artifact::EksConfig,
        build: |spec| DistributionConfig::Eks(EksConfig::from_spec(spec)),
    },
];

/// Look up the registry entry for a distribution.
pub fn find_distribution(distribution: Distribution) -> Option<&'static DistributionDef> {
    DISTRIBUTION_REGISTRY
        .iter()
        .find(|def| def.distribution == distribution)
}
