//! Canonical names per distribution and the defaulting pass over a
//! [`ClusterSpec`].
//!
//! The defaults are advisory: a caller may set `context` or
//! `distribution_config` to anything and it is preserved, with one documented
//! exception. `distribution_config` equal to [`FALLBACK_DISTRIBUTION_CONFIG`]
//! is treated as "never set", so an explicit `kind.yaml` for a non-Kind
//! distribution is replaced by that distribution's canonical name.

use crate::domain::{entities::cluster::ClusterSpec, value_objects::Distribution};

/// Kind names its default cluster `kind` and prefixes contexts with `kind-`.
pub const KIND_DEFAULT_CLUSTER_NAME: &str = "kind";
pub const KIND_CONTEXT_NAME: &str = "kind-kind";

/// K3d's own default cluster name. Contexts are prefixed with `k3d-`.
pub const K3D_DEFAULT_CLUSTER_NAME: &str = "k3s-default";
pub const K3D_CONTEXT_NAME: &str = "k3d-k3s-default";

pub const EKS_DEFAULT_CLUSTER_NAME: &str = "ksail-default";

pub const KIND_CONFIG_FILE: &str = "kind.yaml";
pub const K3D_CONFIG_FILE: &str = "k3d.yaml";
pub const EKS_CONFIG_FILE: &str = "eks.yaml";

/// Value `distribution_config` carries when nobody chose one.
pub const FALLBACK_DISTRIBUTION_CONFIG: &str = KIND_CONFIG_FILE;

pub const KSAIL_CONFIG_FILE: &str = "ksail.yaml";
pub const KUSTOMIZATION_FILE: &str = "kustomization.yaml";
pub const DEFAULT_SOURCE_DIRECTORY: &str = "k8s";

/// Context name the distribution's tooling writes into kubeconfig.
///
/// Empty for EKS and `Unknown`: their context depends on account and region,
/// so context defaulting is skipped.
pub const fn expected_context_name(distribution: Distribution) -> &'static str {
    match distribution {
        Distribution::Kind => KIND_CONTEXT_NAME,
        Distribution::K3d => K3D_CONTEXT_NAME,
        Distribution::Eks | Distribution::Unknown => "",
    }
}

/// File name of the distribution-specific config, relative to the output dir.
pub const fn expected_distribution_config_name(distribution: Distribution) -> &'static str {
    match distribution {
        Distribution::Kind | Distribution::Unknown => KIND_CONFIG_FILE,
        Distribution::K3d => K3D_CONFIG_FILE,
        Distribution::Eks => EKS_CONFIG_FILE,
    }
}

/// Return a copy of `spec` with empty or fallback fields filled in.
pub fn apply_defaults(spec: &ClusterSpec) -> ClusterSpec {
    let mut resolved = spec.clone();

    if resolved.context.is_empty() {
        resolved.context = expected_context_name(resolved.distribution).to_string();
    }

    if resolved.distribution_config.is_empty()
        || resolved.distribution_config == FALLBACK_DISTRIBUTION_CONFIG
    {
        resolved.distribution_config =
            expected_distribution_config_name(resolved.distribution).to_string();
    }

    resolved
}
