//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "ksail",
    bin_name = "ksail",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold Kubernetes cluster projects",
    long_about = "KSail writes a mutually consistent set of configuration files \
                  for a local or cloud Kubernetes cluster: ksail.yaml, the \
                  distribution config and a kustomization entry point.",
    after_help = "EXAMPLES:\n\
        \x20 ksail init\n\
        \x20 ksail init --distribution k3d --cni cilium --output ./my-cluster\n\
        \x20 ksail init --mirror-registry docker.io=http://localhost:5000 --force\n\
        \x20 ksail completions bash > /usr/share/bash-completion/completions/ksail",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a new cluster project.
    #[command(
        about = "Scaffold cluster configuration files",
        after_help = "EXAMPLES:\n\
            \x20 ksail init                                  # kind, current directory\n\
            \x20 ksail init -d k3d -o ./dev                  # k3d into ./dev\n\
            \x20 ksail init --context my-ctx --force         # regenerate everything"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 ksail completions bash > ~/.local/share/bash-completion/completions/ksail\n\
            \x20 ksail completions zsh  > ~/.zfunc/_ksail\n\
            \x20 ksail completions fish > ~/.config/fish/completions/ksail.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the KSail configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 ksail config get defaults.distribution\n\
            \x20 ksail config list\n\
            \x20 ksail config path"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `ksail init`.
///
/// Unset options fall back to the loaded configuration, then to built-in
/// defaults.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory the files are written into.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        short = 'd',
        long = "distribution",
        value_enum,
        help = "Kubernetes distribution"
    )]
    pub distribution: Option<DistributionArg>,

    /// Name of the distribution config file.
    #[arg(
        long = "distribution-config",
        value_name = "FILE",
        help = "Distribution config file name (default: per distribution)"
    )]
    pub distribution_config: Option<String>,

    #[arg(
        long = "context",
        value_name = "NAME",
        help = "kubeconfig context (default: per distribution)"
    )]
    pub context: Option<String>,

    #[arg(
        long = "source-directory",
        value_name = "DIR",
        help = "Directory for Kubernetes manifests"
    )]
    pub source_directory: Option<String>,

    #[arg(long = "cni", value_enum, help = "Container network interface")]
    pub cni: Option<CniArg>,

    #[arg(long = "metrics-server", value_enum, help = "Install metrics-server")]
    pub metrics_server: Option<MetricsServerArg>,

    /// Registry mirror, repeatable.
    #[arg(
        long = "mirror-registry",
        value_name = "HOST=UPSTREAM",
        action = clap::ArgAction::Append,
        help = "Registry mirror, e.g. docker.io=http://localhost:5000 (repeatable)"
    )]
    pub mirror_registries: Vec<String>,

    /// Overwrite existing files.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `ksail completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `ksail config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.distribution`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Distributions selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum DistributionArg {
    Kind,
    /// Also accepted as `k3s`.
    #[value(alias = "k3s")]
    K3d,
    Eks,
}

impl From<DistributionArg> for ksail_core::domain::Distribution {
    fn from(arg: DistributionArg) -> Self {
        match arg {
            DistributionArg::Kind => Self::Kind,
            DistributionArg::K3d => Self::K3d,
            DistributionArg::Eks => Self::Eks,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CniArg {
    Default,
    Cilium,
    Calico,
    Flannel,
}

impl From<CniArg> for ksail_core::domain::Cni {
    fn from(arg: CniArg) -> Self {
        match arg {
            CniArg::Default => Self::Default,
            CniArg::Cilium => Self::Cilium,
            CniArg::Calico => Self::Calico,
            CniArg::Flannel => Self::Flannel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum MetricsServerArg {
    Enabled,
    Disabled,
}

impl From<MetricsServerArg> for ksail_core::domain::MetricsServer {
    fn from(arg: MetricsServerArg) -> Self {
        match arg {
            MetricsServerArg::Enabled => Self::Enabled,
            MetricsServerArg::Disabled => Self::Disabled,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
