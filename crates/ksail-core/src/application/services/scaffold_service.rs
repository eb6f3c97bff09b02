//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Resolve defaults for the cluster spec
//! 2. Emit `ksail.yaml`
//! 3. When forced, remove a stale distribution config occupying the canonical path
//! 4. Emit the distribution config through the generator table
//! 5. Emit `<source_directory>/kustomization.yaml`
//!
//! Steps run strictly in order and the first failure aborts the rest. Files
//! written by earlier steps are kept; re-running is the recovery path since
//! every step is idempotent under its skip/force semantics.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        events::EventSink,
        ports::{Filesystem, Generator},
        services::file_emitter::{FileEmitter, GenerationRequest},
    },
    domain::{
        Artifact, Cluster, ClusterSpec, Distribution, DistributionConfig, DistributionDef,
        Kustomization,
        apply_defaults,
        capabilities::{DISTRIBUTION_REGISTRY, find_distribution},
        defaults::{KSAIL_CONFIG_FILE, KUSTOMIZATION_FILE},
        expected_distribution_config_name,
    },
    error::KsailResult,
};

/// Generator capability per artifact.
///
/// Distribution configs are looked up by the cluster spec's distribution; adding a
/// distribution means adding one entry.
pub struct Generators {
    cluster: Box<dyn Generator<Cluster>>,
    distributions: HashMap<Distribution, Box<dyn Generator<DistributionConfig>>>,
    kustomization: Box<dyn Generator<Kustomization>>,
}

impl Generators {
    /// Table with the given ksail and kustomization generators and no
    /// distribution generators.
    pub fn new(
        cluster: Box<dyn Generator<Cluster>>,
        kustomization: Box<dyn Generator<Kustomization>>,
    ) -> Self {
        Self {
            cluster,
            distributions: HashMap::new(),
            kustomization,
        }
    }

    /// Use one generator for every artifact and every registered distribution.
    pub fn uniform<G>(generator: G) -> Self
    where
        G: Generator<Cluster>
            + Generator<DistributionConfig>
            + Generator<Kustomization>
            + Clone
            + 'static,
    {
        let mut generators = Self::new(Box::new(generator.clone()), Box::new(generator.clone()));
        for def in DISTRIBUTION_REGISTRY {
            generators
                .distributions
                .insert(def.distribution, Box::new(generator.clone()));
        }
        generators
    }

    /// Register or replace the generator for one distribution.
    pub fn with_distribution(
        mut self,
        distribution: Distribution,
        generator: Box<dyn Generator<DistributionConfig>>,
    ) -> Self {
        self.distributions.insert(distribution, generator);
        self
    }
}

/// Main scaffolding service.
///
/// One instance per cluster spec. Not safe to run concurrently against the
/// same output directory: every file is stat-then-write without locking.
pub struct ScaffoldService {
    spec: ClusterSpec,
    filesystem: Arc<dyn Filesystem>,
    generators: Generators,
}

impl ScaffoldService {
    /// Create a new scaffold service for `spec`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use ksail_core::application::{Generators, ScaffoldService};
    ///
    /// let service = ScaffoldService::new(
    ///     spec,                                // ClusterSpec
    ///     filesystem,                          // Arc<dyn Filesystem>
    ///     Generators::uniform(yaml_generator), // marshal + write
    /// );
    /// ```
    pub fn new(spec: ClusterSpec, filesystem: Arc<dyn Filesystem>, generators: Generators) -> Self {
        Self {
            spec,
            filesystem,
            generators,
        }
    }

    /// The spec as given, before defaults.
    pub fn spec(&self) -> &ClusterSpec {
        &self.spec
    }

    /// Scaffold the project's config files into `output`.
    ///
    /// Existing files are skipped unless `force` is set. One event per
    /// artifact is sent to `sink` as it is processed.
    #[instrument(
        skip_all,
        fields(
            distribution = %self.spec.distribution,
            output = %output.as_ref().display(),
            force = force
        )
    )]
    pub fn scaffold(
        &self,
        output: impl AsRef<Path>,
        force: bool,
        sink: &mut dyn EventSink,
    ) -> KsailResult<()> {
        let output = output.as_ref();
        info!("Scaffolding {} project", self.spec.distribution);

        // 1. Resolve defaults
        let resolved = apply_defaults(&self.spec);
        debug!(
            context = %resolved.context,
            distribution_config = %resolved.distribution_config,
            "Defaults resolved"
        );

        let emitter = FileEmitter::new(self.filesystem.as_ref());

        // 2. ksail.yaml
        self.emit_ksail_config(&emitter, &resolved, output, force, sink)?;

        // 3 + 4. Distribution config
        self.emit_distribution_config(&emitter, &resolved, output, force, sink)?;

        // 5. Kustomization
        self.emit_kustomization(&emitter, &resolved, output, force, sink)?;

        info!("Scaffold completed successfully");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn emit_ksail_config(
        &self,
        emitter: &FileEmitter<'_>,
        resolved: &ClusterSpec,
        output: &Path,
        force: bool,
        sink: &mut dyn EventSink,
    ) -> KsailResult<()> {
        let cluster = Cluster::from_spec(resolved);
        emitter.emit(
            self.generators.cluster.as_ref(),
            GenerationRequest {
                model: &cluster,
                output_path: output.join(KSAIL_CONFIG_FILE),
                display_name: KSAIL_CONFIG_FILE.to_string(),
                artifact: Artifact::KSailConfig,
                force,
            },
            sink,
        )
    }

    fn emit_distribution_config(
        &self,
        emitter: &FileEmitter<'_>,
        resolved: &ClusterSpec,
        output: &Path,
        force: bool,
        sink: &mut dyn EventSink,
    ) -> KsailResult<()> {
        let unknown = || ApplicationError::UnknownDistribution {
            distribution: resolved.distribution.to_string(),
        };

        // Resolve before touching the filesystem so an unknown distribution
        // never deletes anything.
        let def = find_distribution(resolved.distribution).ok_or_else(unknown)?;
        let generator = self
            .generators
            .distributions
            .get(&def.distribution)
            .ok_or_else(unknown)?;

        let replaced = if force {
            self.remove_stale_distribution_config(def, output)?
        } else {
            None
        };

        let model = (def.build)(resolved);
        emitter.emit_replacing(
            generator.as_ref(),
            GenerationRequest {
                model: &model,
                output_path: join_under(output, &resolved.distribution_config),
                display_name: resolved.distribution_config.clone(),
                artifact: def.artifact,
                force,
            },
            replaced,
            sink,
        )
    }

    /// Delete the file at the distribution's canonical path if the cluster spec's
    /// original `distribution_config` pointed at exactly that path.
    ///
    /// Returns the removed file's mtime. A differently named config from an
    /// earlier distribution choice is left alone.
    fn remove_stale_distribution_config(
        &self,
        def: &DistributionDef,
        output: &Path,
    ) -> KsailResult<Option<SystemTime>> {
        let previous = join_under(output, &self.spec.distribution_config);
        let canonical = output.join(expected_distribution_config_name(def.distribution));

        if previous != canonical {
            return Ok(None);
        }

        let stat = match self.filesystem.stat(&canonical) {
            Ok(stat) if !stat.is_dir => stat,
            _ => return Ok(None),
        };

        warn!(path = %canonical.display(), "Removing stale distribution config");
        self.filesystem
            .remove_file(&canonical)
            .map_err(|e| ApplicationError::generation_failed(def.artifact, e))?;

        Ok(Some(stat.modified))
    }

    fn emit_kustomization(
        &self,
        emitter: &FileEmitter<'_>,
        resolved: &ClusterSpec,
        output: &Path,
        force: bool,
        sink: &mut dyn EventSink,
    ) -> KsailResult<()> {
        let relative =
            join_under(Path::new(""), &resolved.source_directory).join(KUSTOMIZATION_FILE);
        emitter.emit(
            self.generators.kustomization.as_ref(),
            GenerationRequest {
                model: &Kustomization::default(),
                output_path: output.join(&relative),
                display_name: relative.display().to_string(),
                artifact: Artifact::Kustomization,
                force,
            },
            sink,
        )
    }
}

/// Join `relative` onto `base`, dropping any root or drive prefix so the
/// result always stays under `base`.
fn join_under(base: &Path, relative: impl AsRef<Path>) -> PathBuf {
    let mut joined = base.to_path_buf();
    joined.extend(
        relative
            .as_ref()
            .components()
            .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_))),
    );
    joined
}
