//! Mirror-registry translation.
//!
//! Users describe registry mirrors as flat `host=upstream` strings, e.g.
//! `docker.io=https://registry-1.docker.io`. This module turns that list into
//! the two shapes the distributions understand:
//!
//! - **containerd patches** (Kind): one TOML fragment per mirror, pointing the
//!   runtime at a local proxy container reachable by name on the cluster
//!   network.
//! - **registries config** (K3d): one aggregated `mirrors:` YAML block listing
//!   each distinct host with its upstream endpoint.
//!
//! Malformed entries are dropped without an error so one bad flag never blocks
//! scaffolding. Everything here is pure.

use std::collections::HashSet;
use std::fmt::Write as _;

/// Port assumed when an upstream URL does not name one.
pub const DEFAULT_MIRROR_PORT: &str = "5000";

/// One parsed `host=upstream` mirror entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorSpec {
    pub host: String,
    pub upstream: String,
}

impl MirrorSpec {
    /// Parse a raw entry, splitting on the first `=` only.
    ///
    /// Returns `None` when there is no `=` or either side is empty.
    pub fn parse(raw: &str) -> Option<Self> {
        let (host, upstream) = raw.split_once('=')?;
        if host.is_empty() || upstream.is_empty() {
            return None;
        }

        Some(Self {
            host: host.to_string(),
            upstream: upstream.to_string(),
        })
    }

    /// Name of the proxy container serving this mirror.
    pub fn container_name(&self) -> String {
        container_name(&self.host)
    }

    /// Port of the upstream, see [`extract_port`].
    pub fn port(&self) -> &str {
        extract_port(&self.upstream)
    }

    /// containerd `registry.mirrors` entry redirecting pulls for this host.
    pub fn containerd_patch(&self) -> String {
        format!(
            "[plugins.\"io.containerd.grpc.v1.cri\".registry.mirrors.\"{}\"]\n  endpoint = [\"http://{}:{}\"]",
            self.host,
            self.container_name(),
            self.port()
        )
    }
}

/// Parse every valid entry, preserving input order.
pub fn parse_mirror_specs<S: AsRef<str>>(raw: &[S]) -> Vec<MirrorSpec> {
    raw.iter()
        .filter_map(|entry| MirrorSpec::parse(entry.as_ref()))
        .collect()
}

/// `kind-` followed by the host with dots replaced, e.g. `kind-docker-io`.
pub fn container_name(host: &str) -> String {
    format!("kind-{}", host.replace('.', "-"))
}

/// Port named in an upstream URL, or [`DEFAULT_MIRROR_PORT`].
///
/// The scheme is stripped first so `https://` does not count as a port
/// separator; then everything after the last `:` up to the first `/` is taken.
pub fn extract_port(upstream: &str) -> &str {
    let without_scheme = upstream
        .strip_prefix("http://")
        .or_else(|| upstream.strip_prefix("https://"))
        .unwrap_or(upstream);

    match without_scheme.rfind(':') {
        Some(idx) => {
            let after = &without_scheme[idx + 1..];
            after.split('/').next().unwrap_or(after)
        }
        None => DEFAULT_MIRROR_PORT,
    }
}

/// One containerd patch per valid entry, in input order.
pub fn containerd_patches<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    parse_mirror_specs(raw)
        .iter()
        .map(MirrorSpec::containerd_patch)
        .collect()
}

/// Aggregated K3d `registries.config` block.
///
/// Each distinct host appears once, first occurrence wins. Empty when no entry
/// is valid.
pub fn k3d_registries_config<S: AsRef<str>>(raw: &[S]) -> String {
    let specs = parse_mirror_specs(raw);
    if specs.is_empty() {
        return String::new();
    }

    let mut seen = HashSet::new();
    let mut out = String::from("mirrors:\n");
    for spec in specs.iter().filter(|s| seen.insert(s.host.clone())) {
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            "  \"{}\":\n    endpoint:\n      - {}\n",
            spec.host, spec.upstream
        );
    }

    out
}
