//! The [`ClusterSpec`] input and the [`Cluster`] document written to
//! `ksail.yaml`.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use serde::{Deserialize, Serialize};

use crate::domain::{
    defaults::{DEFAULT_SOURCE_DIRECTORY, FALLBACK_DISTRIBUTION_CONFIG},
    value_objects::{Cni, Distribution, MetricsServer},
};

/// Logical description of the cluster a project targets.
///
/// Read-only input to the scaffolder. Defaults are applied to a copy, see
/// [`crate::domain::defaults::apply_defaults`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    pub distribution: Distribution,
    /// Distribution config file name, relative to the output directory.
    pub distribution_config: String,
    /// kubeconfig context used to reach the cluster.
    pub context: String,
    /// Directory holding the project's manifests, relative to the output directory.
    pub source_directory: String,
    pub cni: Cni,
    pub metrics_server: MetricsServer,
    /// Raw `host=upstream` entries, kept verbatim.
    pub mirror_registries: Vec<String>,
}

impl Default for ClusterSpec {
    fn default() -> Self {
        Self {
            distribution: Distribution::Kind,
            distribution_config: FALLBACK_DISTRIBUTION_CONFIG.to_string(),
            context: String::new(),
            source_directory: DEFAULT_SOURCE_DIRECTORY.to_string(),
            cni: Cni::Default,
            metrics_server: MetricsServer::Enabled,
            mirror_registries: Vec::new(),
        }
    }
}

/// The `ksail.yaml` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub api_version: String,
    pub kind: String,
    pub spec: ClusterDocumentSpec,
}

pub const CLUSTER_API_VERSION: &str = "ksail.io/v1alpha1";

/// `spec:` section of `ksail.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterDocumentSpec {
    pub distribution: Distribution,
    pub distribution_config: String,
    pub source_directory: String,
    pub connection: Connection,
    pub cni: Cni,
    pub metrics_server: MetricsServer,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mirror_registries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub context: String,
}

impl Cluster {
    pub fn from_spec(spec: &ClusterSpec) -> Self {
        Self {
            api_version: CLUSTER_API_VERSION.to_string(),
            kind: "Cluster".to_string(),
            spec: ClusterDocumentSpec {
                distribution: spec.distribution,
                distribution_config: spec.distribution_config.clone(),
                source_directory: spec.source_directory.clone(),
                connection: Connection {
                    context: spec.context.clone(),
                },
                cni: spec.cni,
                metrics_server: spec.metrics_server,
                mirror_registries: spec.mirror_registries.clone(),
            },
        }
    }
}

impl From<&ClusterSpec> for Cluster {
    fn from(spec: &ClusterSpec) -> Self {
        Self::from_spec(spec)
    }
}
