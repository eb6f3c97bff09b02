pub mod cluster;
pub mod distribution;
pub mod kustomization;

pub use cluster::{Cluster, ClusterSpec};
pub use distribution::{DistributionConfig, EksConfig, K3dConfig, KindConfig};
pub use kustomization::Kustomization;
