//! Flags shared by every `ksail` subcommand.

use std::path::PathBuf;

use clap::Args;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more to stderr: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never colour output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// TOML file with init defaults
    #[arg(short, long, global = true, env = "KSAIL_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How scaffold events are printed on stdout
    #[arg(
        long,
        global = true,
        env = "KSAIL_OUTPUT_FORMAT",
        value_enum,
        default_value = "auto"
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Log level selected by `--quiet` and the `-v` count. Quiet wins.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Rendering of scaffold events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Coloured when stdout is a terminal, plain otherwise
    #[default]
    Auto,
    Human,
    Plain,
    /// One JSON object per event
    Json,
}
