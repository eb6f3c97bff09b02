//! Domain value objects: Distribution, Cni, MetricsServer.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Canonical names per distribution live in `defaults.rs`, and everything the
//! scaffolder needs to know to emit a distribution config lives in
//! `capabilities.rs`. This file only defines the types, their string
//! representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add a registry entry in `capabilities.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Distribution ─────────────────────────────────────────────────────────────

/// The Kubernetes cluster flavor a project targets.
///
/// `Unknown` exists so that a spec loaded from an older or hand-edited file can
/// still be represented; scaffolding rejects it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Distribution {
    #[default]
    Kind,
    K3d,
    #[serde(rename = "EKS")]
    Eks,
    Unknown,
}

impl Distribution {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kind => "Kind",
            Self::K3d => "K3d",
            Self::Eks => "EKS",
            Self::Unknown => "Unknown",
        }
    }

    /// Every distribution the scaffolder can emit a config for.
    pub const fn supported() -> &'static [Distribution] {
        &[Self::Kind, Self::K3d, Self::Eks]
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Distribution {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kind" => Ok(Self::Kind),
            "k3d" | "k3s" => Ok(Self::K3d),
            "eks" => Ok(Self::Eks),
            "unknown" => Ok(Self::Unknown),
            other => Err(DomainError::InvalidSpec(format!(
                "unknown distribution: {other}"
            ))),
        }
    }
}

// ── Cni ──────────────────────────────────────────────────────────────────────

/// Container network interface installed into the cluster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cni {
    #[default]
    Default,
    Cilium,
    Calico,
    Flannel,
}

impl Cni {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Cilium => "Cilium",
            Self::Calico => "Calico",
            Self::Flannel => "Flannel",
        }
    }

    /// Whether `distribution`'s bundled CNI has to be switched off so this
    /// one can be installed later.
    ///
    /// K3d already ships Flannel. Kind ships kindnet, so any explicit choice
    /// there needs `disableDefaultCNI`.
    pub const fn replaces_bundled(self, distribution: Distribution) -> bool {
        match distribution {
            Distribution::K3d => matches!(self, Self::Cilium | Self::Calico),
            _ => !matches!(self, Self::Default),
        }
    }
}

impl fmt::Display for Cni {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cni {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" | "" => Ok(Self::Default),
            "cilium" => Ok(Self::Cilium),
            "calico" => Ok(Self::Calico),
            "flannel" => Ok(Self::Flannel),
            other => Err(DomainError::InvalidSpec(format!("unknown cni: {other}"))),
        }
    }
}

// ── MetricsServer ────────────────────────────────────────────────────────────

/// Whether the metrics server should run in the cluster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricsServer {
    #[default]
    Enabled,
    Disabled,
}

impl MetricsServer {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Enabled => "Enabled",
            Self::Disabled => "Disabled",
        }
    }

    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl fmt::Display for MetricsServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricsServer {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "enabled" | "true" | "on" => Ok(Self::Enabled),
            "disabled" | "false" | "off" => Ok(Self::Disabled),
            other => Err(DomainError::InvalidSpec(format!(
                "unknown metrics-server setting: {other}"
            ))),
        }
    }
}
