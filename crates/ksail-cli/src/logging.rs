//! Tracing setup for the `ksail` binary.
//!
//! The library crates only emit events. This is the one place a subscriber
//! is installed: stderr, ANSI only on a terminal, `RUST_LOG` over the flags.

use std::io::IsTerminal as _;

use anyhow::Context as _;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Install the global subscriber. Call once, first thing in `main`.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(args.log_level())));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(args.verbose >= 2)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("tracing subscriber already installed")
}

/// One directive per workspace crate so dependencies stay quiet.
fn filter_directives(level: LevelFilter) -> String {
    ["ksail", "ksail_core", "ksail_adapters"]
        .map(|target| format!("{target}={level}"))
        .join(",")
}
