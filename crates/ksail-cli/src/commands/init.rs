//! `ksail init` - scaffold a cluster project.
//!
//! Flags win over configuration, configuration wins over built-in defaults.
//! Files are written through [`LocalFilesystem`] and [`YamlGenerator`]; events
//! are printed as the scaffold reports them.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, instrument};

use ksail_adapters::{LocalFilesystem, YamlGenerator};
use ksail_core::{
    application::{Generators, ScaffoldService, ports::Filesystem},
    domain::{ClusterSpec, Cni, Distribution, MetricsServer, MirrorSpec},
};

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::{EventPrinter, OutputManager},
};

/// Scaffold `ksail.yaml`, the distribution config and the kustomization.
#[instrument(skip_all, fields(force = args.force))]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| config.defaults.output_dir.clone());
    if output_dir.is_file() {
        return Err(CliError::InvalidInput {
            message: format!("output '{}' is a file, not a directory", output_dir.display()),
            source: None,
        });
    }
    let force = args.force;
    let spec = build_spec(args, &config)?;
    debug!(?spec, output = %output_dir.display(), "Cluster spec built");

    for raw in &spec.mirror_registries {
        if MirrorSpec::parse(raw).is_none() {
            output.warning(&format!(
                "ignoring mirror registry '{raw}', expected HOST=UPSTREAM"
            ))?;
        }
    }

    let filesystem: Arc<dyn Filesystem> = Arc::new(LocalFilesystem::new());
    let generators = Generators::uniform(YamlGenerator::new(Arc::clone(&filesystem)));
    let service = ScaffoldService::new(spec, filesystem, generators);

    let mut printer = EventPrinter::new(&output);
    let result = service.scaffold(&output_dir, force, &mut printer);
    let (written, skipped) = printer.finish()?;
    result?;

    output.success(&format!(
        "{} project ready in {} ({written} written, {skipped} skipped)",
        service.spec().distribution,
        display_dir(&output_dir),
    ))?;
    Ok(())
}

/// Merge flags over configuration into a [`ClusterSpec`].
///
/// Context and distribution config stay empty when not given so the
/// distribution's canonical values are filled in at scaffold time.
fn build_spec(args: InitArgs, config: &AppConfig) -> CliResult<ClusterSpec> {
    let defaults = &config.defaults;

    let distribution = match args.distribution {
        Some(arg) => arg.into(),
        None => parse_config_value::<Distribution>("defaults.distribution", &defaults.distribution)?,
    };
    let cni = match args.cni {
        Some(arg) => arg.into(),
        None => parse_config_value::<Cni>("defaults.cni", &defaults.cni)?,
    };
    let metrics_server = match args.metrics_server {
        Some(arg) => arg.into(),
        None => parse_config_value::<MetricsServer>(
            "defaults.metrics_server",
            &defaults.metrics_server,
        )?,
    };

    Ok(ClusterSpec {
        distribution,
        distribution_config: args.distribution_config.unwrap_or_default(),
        context: args.context.unwrap_or_default(),
        source_directory: args
            .source_directory
            .unwrap_or_else(|| defaults.source_directory.clone()),
        cni,
        metrics_server,
        mirror_registries: args.mirror_registries,
    })
}

fn parse_config_value<T>(key: &str, value: &str) -> CliResult<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.parse().map_err(|e: T::Err| CliError::ConfigError {
        message: format!("invalid value '{value}' for {key}"),
        source: Some(Box::new(e)),
    })
}

fn display_dir(dir: &Path) -> String {
    if dir.as_os_str().is_empty() || dir == Path::new(".") {
        "the current directory".to_string()
    } else {
        format!("'{}'", dir.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{CniArg, DistributionArg};

    fn args() -> InitArgs {
        InitArgs {
            output: None,
            distribution: None,
            distribution_config: None,
            context: None,
            source_directory: None,
            cni: None,
            metrics_server: None,
            mirror_registries: Vec::new(),
            force: false,
        }
    }

    #[test]
    fn defaults_come_from_config() {
        let mut config = AppConfig::default();
        config.defaults.distribution = "k3d".into();
        config.defaults.source_directory = "manifests".into();

        let spec = build_spec(args(), &config).unwrap();

        assert_eq!(spec.distribution, Distribution::K3d);
        assert_eq!(spec.source_directory, "manifests");
        assert!(spec.context.is_empty());
        assert!(spec.distribution_config.is_empty());
    }

    #[test]
    fn flags_win_over_config() {
        let mut config = AppConfig::default();
        config.defaults.cni = "calico".into();

        let spec = build_spec(
            InitArgs {
                distribution: Some(DistributionArg::Eks),
                cni: Some(CniArg::Cilium),
                context: Some("custom".into()),
                ..args()
            },
            &config,
        )
        .unwrap();

        assert_eq!(spec.distribution, Distribution::Eks);
        assert_eq!(spec.cni, Cni::Cilium);
        assert_eq!(spec.context, "custom");
    }

    #[test]
    fn bad_config_value_is_config_error() {
        let mut config = AppConfig::default();
        config.defaults.cni = "weave".into();

        let err = build_spec(args(), &config).unwrap_err();

        assert!(matches!(err, CliError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 4);
    }
}
