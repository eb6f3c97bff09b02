//! Integration tests for ksail-core's public domain API.

use ksail_core::domain::{
    DISTRIBUTION_REGISTRY, DistributionConfig, apply_defaults, find_distribution,
    mirror::{self, MirrorSpec},
};
use ksail_core::prelude::*;

#[test]
fn mirror_translation_keeps_valid_entries_in_order() {
    let raw = [
        "docker.io=https://registry-1.docker.io",
        "bad-spec",
        "ghcr.io=https://ghcr.io",
    ];

    let specs = mirror::parse_mirror_specs(&raw);
    let hosts: Vec<_> = specs.iter().map(|s| s.host.as_str()).collect();
    assert_eq!(hosts, ["docker.io", "ghcr.io"]);

    assert_eq!(mirror::containerd_patches(&raw).len(), 2);

    let config = mirror::k3d_registries_config(&raw);
    let docker = config.find("docker.io").unwrap();
    let ghcr = config.find("ghcr.io").unwrap();
    assert!(docker < ghcr);
}

#[test]
fn mirror_ports() {
    assert_eq!(mirror::extract_port("http://localhost:5001"), "5001");
    assert_eq!(mirror::extract_port("https://registry-1.docker.io"), "5000");

    let spec = MirrorSpec::parse("docker.io=http://localhost:5001/v2").unwrap();
    assert_eq!(spec.port(), "5001");
    assert_eq!(spec.container_name(), "kind-docker-io");
}

#[test]
fn defaults_fill_context_and_config_per_distribution() {
    let cases = [
        (Distribution::Kind, "kind-kind", "kind.yaml"),
        (Distribution::K3d, "k3d-k3s-default", "k3d.yaml"),
    ];

    for (distribution, context, config) in cases {
        let resolved = apply_defaults(&ClusterSpec {
            distribution,
            ..ClusterSpec::default()
        });
        assert_eq!(resolved.context, context);
        assert_eq!(resolved.distribution_config, config);
    }
}

#[test]
fn custom_values_survive_defaults() {
    let spec = ClusterSpec {
        context: "custom".into(),
        distribution_config: "my-kind.yaml".into(),
        ..ClusterSpec::default()
    };

    let resolved = apply_defaults(&spec);

    assert_eq!(resolved.context, "custom");
    assert_eq!(resolved.distribution_config, "my-kind.yaml");
    // The input is never modified.
    assert!(ClusterSpec::default().context.is_empty());
}

#[test]
fn registry_builds_matching_models() {
    let spec = apply_defaults(&ClusterSpec::default());
    for def in DISTRIBUTION_REGISTRY {
        let model = (def.build)(&spec);
        assert_eq!(model.distribution(), def.distribution);
    }

    assert!(find_distribution(Distribution::Unknown).is_none());
    assert!(matches!(
        (find_distribution(Distribution::Eks).unwrap().build)(&spec),
        DistributionConfig::Eks(_)
    ));
}
