//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "almanac",
    bin_name = "almanac",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validated date arithmetic and numeric guards",
    long_about = "Almanac shifts dates by months, weeks and days, checks expiry \
                  dates, computes guarded percentages and runs credential checks.",
    after_help = "EXAMPLES:\n\
        \x20 almanac shift 12/01/2025 --days 5\n\
        \x20 almanac expired 01/03/2025 --today 02/03/2025\n\
        \x20 almanac percent --total 100 --rate 50\n\
        \x20 almanac completions bash > /usr/share/bash-completion/completions/almanac",
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
    /// Shift a date by months, weeks and days.
    #[command(
        visible_alias = "add",
        about = "Shift a date by months, weeks and days",
        after_help = "Months are applied first, then weeks, then days. A day that does\n\
            not exist in the target month is clamped to the month's last day.\n\n\
            EXAMPLES:\n\
            \x20 almanac shift 12/01/2025 --days 5          # 17/01/2025\n\
            \x20 almanac shift 31/01/2024 --months 1        # 29/02/2024\n\
            \x20 almanac shift 15/03/2025 --weeks -2 --days 1"
    )]
    Shift(ShiftArgs),

    /// Check whether an expiry date has passed.
    #[command(
        about = "Check whether an expiry date has passed",
        after_help = "A missing date counts as expired. A date expiring today is still valid.\n\n\
            EXAMPLES:\n\
            \x20 almanac expired 31/12/2030\n\
            \x20 almanac expired 01/03/2025 --today 02/03/2025\n\
            \x20 almanac expired"
    )]
    Expired(ExpiredArgs),

    /// Compute a percentage of a total.
    #[command(
        visible_alias = "pct",
        about = "Compute a percentage of a total",
        after_help = "EXAMPLES:\n\
            \x20 almanac percent --total 100 --rate 50\n\
            \x20 almanac percent --total 19.99 --rate 7.5"
    )]
    Percent(AmountArgs),

    /// Apply a percentage discount to a total.
    #[command(
        about = "Apply a percentage discount to a total",
        after_help = "EXAMPLES:\n\
            \x20 almanac discount --total 80 --rate 25"
    )]
    Discount(AmountArgs),

    /// Run the guard-clause credential check.
    #[command(
        about = "Validate a subject and credential",
        after_help = "Checks run in order: system up, subject named, credential matches.\n\
            Exits with code 2 unless validation succeeds.\n\n\
            EXAMPLES:\n\
            \x20 almanac validate --name Alice --credential 1234 --supplied 1234\n\
            \x20 almanac validate --supplied 1234\n\
            \x20 almanac validate --system-down --name Bob --credential 1 --supplied 9"
    )]
    Validate(ValidateArgs),

    /// Initialise an Almanac configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 almanac init                       # default location\n\
            \x20 almanac init --path ./almanac.toml # explicit file\n\
            \x20 almanac init --force               # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 almanac completions bash > ~/.local/share/bash-completion/completions/almanac\n\
            \x20 almanac completions zsh  > ~/.zfunc/_almanac\n\
            \x20 almanac completions fish > ~/.config/fish/completions/almanac.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Almanac configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 almanac config get dates.format\n\
            \x20 almanac config list\n\
            \x20 almanac config path"
    )]
    Config(ConfigCommands),
}

// ── shift ─────────────────────────────────────────────────────────────────────

/// Arguments for `almanac shift`.
#[derive(Debug, Args)]
pub struct ShiftArgs {
    /// Start date, in the configured `dates.format`.
    #[arg(value_name = "DATE", help = "Start date (default format dd/mm/yyyy)")]
    pub date: String,

    /// Months to add (negative to subtract).
    #[arg(
        short = 'm',
        long = "months",
        value_name = "N",
        default_value_t = 0,
        allow_negative_numbers = true,
        help = "Months to add"
    )]
    pub months: i32,

    /// Weeks to add (negative to subtract).
    #[arg(
        short = 'w',
        long = "weeks",
        value_name = "N",
        default_value_t = 0,
        allow_negative_numbers = true,
        help = "Weeks to add"
    )]
    pub weeks: i32,

    /// Days to add (negative to subtract).
    #[arg(
        short = 'd',
        long = "days",
        value_name = "N",
        default_value_t = 0,
        allow_negative_numbers = true,
        help = "Days to add"
    )]
    pub days: i32,
}

// ── expired ───────────────────────────────────────────────────────────────────

/// Arguments for `almanac expired`.
#[derive(Debug, Args)]
pub struct ExpiredArgs {
    /// Expiry date. Omitted means no expiry is on record.
    #[arg(value_name = "DATE", help = "Expiry date (omit for none)")]
    pub date: Option<String>,

    /// Use this date as today instead of the system clock.
    #[arg(long = "today", value_name = "DATE", help = "Override today's date")]
    pub today: Option<String>,
}

// ── percent / discount ────────────────────────────────────────────────────────

/// Arguments for `almanac percent` and `almanac discount`.
#[derive(Debug, Args)]
pub struct AmountArgs {
    /// Total amount; must be finite and non-negative.
    #[arg(
        short = 't',
        long = "total",
        value_name = "AMOUNT",
        allow_negative_numbers = true,
        help = "Total amount"
    )]
    pub total: f64,

    /// Rate in percent; must be between 0 and 100.
    #[arg(
        short = 'r',
        long = "rate",
        value_name = "PERCENT",
        allow_negative_numbers = true,
        help = "Rate in percent (0-100)"
    )]
    pub rate: f64,
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `almanac validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Treat the system as unavailable.
    #[arg(long = "system-down", help = "Simulate an unavailable system")]
    pub system_down: bool,

    /// Subject name. Omitted means no subject is on record.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Subject name")]
    pub name: Option<String>,

    /// Credential stored for the subject.
    #[arg(
        long = "credential",
        value_name = "CODE",
        requires = "name",
        default_value_t = 0,
        allow_negative_numbers = true,
        help = "Stored credential of the subject"
    )]
    pub credential: i32,

    /// Credential being checked.
    #[arg(
        short = 's',
        long = "supplied",
        value_name = "CODE",
        allow_negative_numbers = true,
        help = "Credential to check"
    )]
    pub supplied: i32,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `almanac init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write here instead of the default location.
    #[arg(long = "path", value_name = "FILE", help = "Where to write the file")]
    pub path: Option<PathBuf>,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `almanac completions`.
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

/// Subcommands for `almanac config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `dates.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
