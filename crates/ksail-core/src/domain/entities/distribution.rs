//! Distribution-specific config models.
//!
//! Each model mirrors the upstream tool's own schema closely enough for the
//! tool to load it: Kind's `Cluster`, K3d's `Simple` config and eksctl's
//! `ClusterConfig`. Only the fields the scaffolder sets are modelled.

use serde::{Deserialize, Serialize};

use crate::domain::{
    defaults::{EKS_DEFAULT_CLUSTER_NAME, K3D_DEFAULT_CLUSTER_NAME, KIND_DEFAULT_CLUSTER_NAME},
    entities::cluster::ClusterSpec,
    mirror,
    value_objects::Distribution,
};

/// Any distribution config. Serializes as the inner document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DistributionConfig {
    Kind(KindConfig),
    K3d(K3dConfig),
    Eks(EksConfig),
}

impl DistributionConfig {
    pub const fn distribution(&self) -> Distribution {
        match self {
            Self::Kind(_) => Distribution::Kind,
            Self::K3d(_) => Distribution::K3d,
            Self::Eks(_) => Distribution::Eks,
        }
    }
}

// ── Kind ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KindConfig {
    pub api_version: String,
    pub kind: String,
    pub name: String,
    pub nodes: Vec<KindNode>,
    #[serde(default, skip_serializing_if = "KindNetworking::is_default")]
    pub networking: KindNetworking,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub containerd_config_patches: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindNode {
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KindNetworking {
    #[serde(default, skip_serializing_if = "std::ops::Not::not", rename = "disableDefaultCNI")]
    pub disable_default_cni: bool,
}

impl KindNetworking {
    fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl KindConfig {
    /// Kind config for `spec`: one control-plane node, default CNI disabled
    /// when another CNI will be installed, one containerd patch per mirror.
    pub fn from_spec(spec: &ClusterSpec) -> Self {
        Self {
            api_version: "kind.x-k8s.io/v1alpha4".to_string(),
            kind: "Cluster".to_string(),
            name: KIND_DEFAULT_CLUSTER_NAME.to_string(),
            nodes: vec![KindNode {
                role: "control-plane".to_string(),
            }],
            networking: KindNetworking {
                disable_default_cni: spec.cni.replaces_bundled(Distribution::Kind),
            },
            containerd_config_patches: mirror::containerd_patches(&spec.mirror_registries),
        }
    }
}

// ── K3d ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct K3dConfig {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub servers: u32,
    pub agents: u32,
    #[serde(default, skip_serializing_if = "K3dOptions::is_empty")]
    pub options: K3dOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registries: Option<K3dRegistries>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct K3dOptions {
    pub k3s: K3sOptions,
}

impl K3dOptions {
    fn is_empty(&self) -> bool {
        self.k3s.extra_args.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct K3sOptions {
    pub extra_args: Vec<K3sArg>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct K3sArg {
    pub arg: String,
    pub node_filters: Vec<String>,
}

impl K3sArg {
    fn on_servers(arg: &str) -> Self {
        Self {
            arg: arg.to_string(),
            node_filters: vec!["server:*".to_string()],
        }
    }
}

/// `registries.config` holds the mirror block as an embedded YAML string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct K3dRegistries {
    pub config: String,
}

impl K3dConfig {
    /// K3d config for `spec`.
    ///
    /// Mirrors are listed as plain endpoints; no registry container is created.
    pub fn from_spec(spec: &ClusterSpec) -> Self {
        let mut extra_args = Vec::new();
        if spec.cni.replaces_bundled(Distribution::K3d) {
            extra_args.push(K3sArg::on_servers("--flannel-backend=none"));
            extra_args.push(K3sArg::on_servers("--disable-network-policy"));
        }
        if !spec.metrics_server.is_enabled() {
            extra_args.push(K3sArg::on_servers("--disable=metrics-server"));
        }

        let registries_config = mirror::k3d_registries_config(&spec.mirror_registries);

        Self {
            api_version: "k3d.io/v1alpha5".to_string(),
            kind: "Simple".to_string(),
            metadata: ObjectMeta {
                name: K3D_DEFAULT_CLUSTER_NAME.to_string(),
                region: None,
            },
            servers: 1,
            agents: 0,
            options: K3dOptions {
                k3s: K3sOptions { extra_args },
            },
            registries: (!registries_config.is_empty()).then_some(K3dRegistries {
                config: registries_config,
            }),
        }
    }
}

// ── EKS ──────────────────────────────────────────────────────────────────────

pub const EKS_DEFAULT_REGION: &str = "eu-north-1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EksConfig {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub managed_node_groups: Vec<EksNodeGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EksNodeGroup {
    pub name: String,
    pub instance_type: String,
    pub desired_capacity: u32,
}

impl EksConfig {
    /// eksctl config for `spec`. Mirrors and CNI choice do not apply.
    pub fn from_spec(_spec: &ClusterSpec) -> Self {
        Self {
            api_version: "eksctl.io/v1alpha5".to_string(),
            kind: "ClusterConfig".to_string(),
            metadata: ObjectMeta {
                name: EKS_DEFAULT_CLUSTER_NAME.to_string(),
                region: Some(EKS_DEFAULT_REGION.to_string()),
            },
            managed_node_groups: vec![EksNodeGroup {
                name: format!("{EKS_DEFAULT_CLUSTER_NAME}-ng"),
                instance_type: "m5.large".to_string(),
                desired_capacity: 1,
            }],
        }
    }
}
