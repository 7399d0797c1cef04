//! Log setup for the `almanac` binary.
//!
//! Events go to stderr so stdout carries nothing but results. The library
//! crates emit events; this module is the one place a subscriber is
//! installed.
//!
//! | Flags     | `almanac*` targets |
//! |-----------|--------------------|
//! | (none)    | warn               |
//! | `-v`      | info               |
//! | `-vv`     | debug              |
//! | `-vvv`    | trace              |
//! | `--quiet` | error              |
//!
//! A set `RUST_LOG` replaces the table entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the selected level.
const LOG_TARGETS: [&str; 3] = ["almanac", "almanac_core", "almanac_adapters"];

/// Install the stderr subscriber. A second call in one process fails.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(level)));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// `--quiet` wins over any `-v` count.
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `almanac=debug,almanac_core=debug,...` for every crate in the workspace.
fn filter_directives(level: &str) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
