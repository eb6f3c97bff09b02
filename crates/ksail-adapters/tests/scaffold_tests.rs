//! End-to-end scaffolding against real and in-memory filesystems.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use ksail_adapters::{LocalFilesystem, MemoryFilesystem, YamlGenerator};
use ksail_core::application::ApplicationError;
use ksail_core::prelude::*;

fn service(spec: ClusterSpec, fs: Arc<dyn Filesystem>) -> ScaffoldService {
    let generator = YamlGenerator::new(Arc::clone(&fs));
    ScaffoldService::new(spec, fs, Generators::uniform(generator))
}

fn spec(distribution: Distribution) -> ClusterSpec {
    ClusterSpec {
        distribution,
        ..ClusterSpec::default()
    }
}

fn run(service: &ScaffoldService, output: &Path, force: bool) -> Vec<ScaffoldEvent> {
    let mut events: Vec<ScaffoldEvent> = Vec::new();
    service.scaffold(output, force, &mut events).unwrap();
    events
}

fn yaml(path: &Path) -> serde_yaml::Value {
    let content = std::fs::read_to_string(path).unwrap();
    serde_yaml::from_str(&content).unwrap()
}

fn mtime(path: &Path) -> SystemTime {
    std::fs::metadata(path).unwrap().modified().unwrap()
}

// ── Fresh scaffold ──────────────────────────────────────────────────────────

#[test]
fn kind_scaffold_into_empty_dir() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(spec(Distribution::Kind), Arc::new(LocalFilesystem::new()));

    let events = run(&service, dir.path(), false);

    assert_eq!(
        events,
        vec![
            ScaffoldEvent::Created("ksail.yaml".into()),
            ScaffoldEvent::Created("kind.yaml".into()),
            ScaffoldEvent::Created("k8s/kustomization.yaml".into()),
        ]
    );
    assert!(dir.path().join("k8s/kustomization.yaml").is_file());

    let ksail = yaml(&dir.path().join("ksail.yaml"));
    assert_eq!(ksail["spec"]["connection"]["context"], "kind-kind");
    assert_eq!(ksail["spec"]["distributionConfig"], "kind.yaml");
}

#[test]
fn k3d_scaffold_into_empty_dir() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(spec(Distribution::K3d), Arc::new(LocalFilesystem::new()));

    let events = run(&service, dir.path(), false);

    assert_eq!(events.len(), 3);
    assert!(events.iter().all(ScaffoldEvent::is_write));
    assert!(dir.path().join("k3d.yaml").is_file());
    assert!(!dir.path().join("kind.yaml").exists());

    let ksail = yaml(&dir.path().join("ksail.yaml"));
    assert_eq!(ksail["spec"]["connection"]["context"], "k3d-k3s-default");
    assert_eq!(ksail["spec"]["distributionConfig"], "k3d.yaml");
}

#[test]
fn eks_scaffold_writes_eksctl_config() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(spec(Distribution::Eks), Arc::new(LocalFilesystem::new()));

    run(&service, dir.path(), false);

    let eks = yaml(&dir.path().join("eks.yaml"));
    assert_eq!(eks["apiVersion"], "eksctl.io/v1alpha5");
    assert_eq!(eks["kind"], "ClusterConfig");
}

#[test]
fn custom_context_and_source_directory_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    let spec = ClusterSpec {
        context: "custom".into(),
        source_directory: "manifests".into(),
        ..ClusterSpec::default()
    };
    let service = service(spec, Arc::new(LocalFilesystem::new()));

    let events = run(&service, dir.path(), false);

    assert_eq!(events[2], ScaffoldEvent::Created("manifests/kustomization.yaml".into()));
    let ksail = yaml(&dir.path().join("ksail.yaml"));
    assert_eq!(ksail["spec"]["connection"]["context"], "custom");
    assert_eq!(ksail["spec"]["sourceDirectory"], "manifests");
}

// ── Re-runs ─────────────────────────────────────────────────────────────────

#[test]
fn rerun_without_force_skips_everything() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(spec(Distribution::Kind), Arc::new(LocalFilesystem::new()));
    run(&service, dir.path(), false);

    let files = ["ksail.yaml", "kind.yaml", "k8s/kustomization.yaml"];
    let before: Vec<_> = files
        .iter()
        .map(|f| std::fs::read(dir.path().join(f)).unwrap())
        .collect();

    let events = run(&service, dir.path(), false);

    assert_eq!(events.len(), 3);
    assert!(events.iter().all(|e| !e.is_write()));
    assert_eq!(
        events[0].to_string(),
        "skipped 'ksail.yaml', file exists use --force to overwrite"
    );
    for (file, bytes) in files.iter().zip(before) {
        assert_eq!(std::fs::read(dir.path().join(file)).unwrap(), bytes);
    }
}

#[test]
fn forced_rerun_advances_every_mtime_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let service = service(spec(Distribution::K3d), Arc::new(LocalFilesystem::new()));
    run(&service, dir.path(), false);

    let files = ["ksail.yaml", "k3d.yaml", "k8s/kustomization.yaml"];
    let before: Vec<_> = files.iter().map(|f| mtime(&dir.path().join(f))).collect();

    // Immediately, so both writes may share a filesystem timestamp.
    let events = run(&service, dir.path(), true);

    assert_eq!(
        events,
        vec![
            ScaffoldEvent::Overwrote("ksail.yaml".into()),
            ScaffoldEvent::Overwrote("k3d.yaml".into()),
            ScaffoldEvent::Overwrote("k8s/kustomization.yaml".into()),
        ]
    );
    for (file, previous) in files.iter().zip(before) {
        assert!(mtime(&dir.path().join(file)) > previous, "{file} mtime did not advance");
    }
}

#[test]
fn forced_rerun_advances_mtime_with_frozen_clock() {
    let at = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let fs = MemoryFilesystem::frozen(at);
    let service = service(spec(Distribution::Kind), Arc::new(fs.clone()));
    let output = PathBuf::from("/project");

    run(&service, &output, false);
    run(&service, &output, true);

    for file in ["ksail.yaml", "kind.yaml", "k8s/kustomization.yaml"] {
        let stat = fs.stat(&output.join(file)).unwrap();
        assert!(stat.modified > at, "{file} mtime did not advance");
    }
}

#[test]
fn forced_rerun_replaces_hand_edits() {
    let fs = MemoryFilesystem::new();
    let service = service(spec(Distribution::Kind), Arc::new(fs.clone()));
    let output = Path::new("/project");
    run(&service, output, false);

    fs.write_file(&output.join("ksail.yaml"), "edited: true\n").unwrap();
    run(&service, output, true);

    let content = fs.read_file(&output.join("ksail.yaml")).unwrap();
    assert!(content.contains("apiVersion: ksail.io/v1alpha1"));
}

// ── Failures ────────────────────────────────────────────────────────────────

#[test]
fn unknown_distribution_stops_after_ksail_config() {
    let fs = MemoryFilesystem::new();
    let service = service(spec(Distribution::Unknown), Arc::new(fs.clone()));
    let mut events: Vec<ScaffoldEvent> = Vec::new();

    let err = service
        .scaffold("/project", false, &mut events)
        .unwrap_err();

    assert!(matches!(
        err.as_application(),
        Some(ApplicationError::UnknownDistribution { .. })
    ));
    assert_eq!(events, vec![ScaffoldEvent::Created("ksail.yaml".into())]);
    assert_eq!(fs.list_files(), vec![PathBuf::from("/project/ksail.yaml")]);
}

// ── Mirrors ─────────────────────────────────────────────────────────────────

#[test]
fn k3d_mirrors_land_in_registries_config() {
    let dir = tempfile::tempdir().unwrap();
    let spec = ClusterSpec {
        distribution: Distribution::K3d,
        mirror_registries: vec![
            "docker.io=http://localhost:5000".into(),
            "ghcr.io=http://localhost:5001".into(),
            "invalid".into(),
        ],
        ..ClusterSpec::default()
    };
    let service = service(spec, Arc::new(LocalFilesystem::new()));

    run(&service, dir.path(), false);

    let k3d = yaml(&dir.path().join("k3d.yaml"));
    let config = k3d["registries"]["config"].as_str().unwrap();
    let mirrors: serde_yaml::Value = serde_yaml::from_str(config).unwrap();
    assert_eq!(mirrors["mirrors"]["docker.io"]["endpoint"][0], "http://localhost:5000");
    assert_eq!(mirrors["mirrors"]["ghcr.io"]["endpoint"][0], "http://localhost:5001");

    let ksail = yaml(&dir.path().join("ksail.yaml"));
    assert_eq!(ksail["spec"]["mirrorRegistries"].as_sequence().unwrap().len(), 3);
}

#[test]
fn kind_mirrors_become_containerd_patches() {
    let dir = tempfile::tempdir().unwrap();
    let spec = ClusterSpec {
        mirror_registries: vec!["docker.io=http://localhost:5000".into()],
        ..ClusterSpec::default()
    };
    let service = service(spec, Arc::new(LocalFilesystem::new()));

    run(&service, dir.path(), false);

    let kind = yaml(&dir.path().join("kind.yaml"));
    let patch = kind["containerdConfigPatches"][0].as_str().unwrap();
    assert!(patch.contains("registry.mirrors.\"docker.io\""));
    assert!(patch.contains("http://kind-docker-io:5000"));
}

// ── Path containment ────────────────────────────────────────────────────────

#[test]
fn absolute_source_directory_stays_under_output() {
    let out = tempfile::tempdir().unwrap();
    let elsewhere = tempfile::tempdir().unwrap();
    let spec = ClusterSpec {
        source_directory: elsewhere.path().display().to_string(),
        ..ClusterSpec::default()
    };

    run(&service(spec, Arc::new(LocalFilesystem::new())), out.path(), false);

    let nested: PathBuf = elsewhere
        .path()
        .components()
        .filter(|c| matches!(c, std::path::Component::Normal(_)))
        .collect();
    assert!(!elsewhere.path().join("kustomization.yaml").exists());
    assert!(out.path().join(nested).join("kustomization.yaml").is_file());
}

#[test]
fn absolute_distribution_config_stays_under_output() {
    let out = tempfile::tempdir().unwrap();
    let elsewhere = tempfile::tempdir().unwrap();
    let target = elsewhere.path().join("kind.yaml");
    std::fs::write(&target, "keep: me\n").unwrap();
    let spec = ClusterSpec {
        distribution_config: target.display().to_string(),
        ..ClusterSpec::default()
    };

    run(&service(spec, Arc::new(LocalFilesystem::new())), out.path(), true);

    assert_eq!(std::fs::read_to_string(&target).unwrap(), "keep: me\n");
    let nested: PathBuf = target
        .components()
        .filter(|c| matches!(c, std::path::Component::Normal(_)))
        .collect();
    assert_eq!(yaml(&out.path().join(nested))["kind"], "Cluster");
}
