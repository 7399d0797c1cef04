//! Flags accepted before or after any `almanac` subcommand.

use clap::Args;
use std::path::PathBuf;

/// Verbosity, colour, config file and output format.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log level counter: warnings by default, one `-v` per step to TRACE.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Warnings and errors
    -v      - Info level
    -vv     - Debug level (every date step and check)
    -vvv    - Trace level"
    )]
    pub verbose: u8,

    /// Hide progress lines. Results and errors are still written.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print results and errors"
    )]
    pub quiet: bool,

    /// Any non-empty `NO_COLOR` turns colour off (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Must exist when given; the platform default may be absent.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE instead of the default location"
    )]
    pub config: Option<PathBuf>,

    /// `auto` defers to `output.format`, then to terminal detection.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How results are printed"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise.
    #[default]
    Auto,
    /// Bold results and coloured markers.
    Human,
    /// Bare result lines, easy to pipe.
    Plain,
    /// One pretty-printed JSON document per result.
    Json,
}
