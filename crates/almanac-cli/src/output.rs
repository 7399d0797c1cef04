//! Output management and formatting.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on flags and configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let resolved_format = resolve_format(args.output_format, &config.output.format, || {
            io::stdout().is_terminal()
        });

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// A command's result. Written even in quiet mode; as JSON when asked.
    pub fn result<T: Serialize>(&self, human: &str, value: &T) -> io::Result<()> {
        let line = match self.resolved_format {
            OutputFormat::Json => serde_json::to_string_pretty(value).map_err(io::Error::other)?,
            _ if self.no_color => human.to_owned(),
            _ => human.bold().to_string(),
        };
        self.term.write_line(&line)
    }

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

/// Flag beats config; `auto` in both falls back to terminal detection.
fn resolve_format(
    flag: OutputFormat,
    configured: &str,
    stdout_is_terminal: impl FnOnce() -> bool,
) -> OutputFormat {
    let requested = match flag {
        OutputFormat::Auto => OutputFormat::from_str(configured, true).unwrap_or_else(|_| {
            tracing::warn!(value = configured, "Unknown output.format, using auto");
            OutputFormat::Auto
        }),
        explicit => explicit,
    };
    match requested {
        OutputFormat::Auto if stdout_is_terminal() => OutputFormat::Human,
        OutputFormat::Auto => OutputFormat::Plain,
        resolved => resolved,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(quiet: bool, output_format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color: false,
            config: None,
            output_format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn flag_wins_over_config() {
        assert_eq!(
            resolve_format(OutputFormat::Json, "plain", || true),
            OutputFormat::Json
        );
    }

    #[test]
    fn config_used_when_flag_is_auto() {
        assert_eq!(
            resolve_format(OutputFormat::Auto, "JSON", || true),
            OutputFormat::Json
        );
    }

    #[test]
    fn auto_follows_terminal() {
        assert_eq!(
            resolve_format(OutputFormat::Auto, "auto", || true),
            OutputFormat::Human
        );
        assert_eq!(
            resolve_format(OutputFormat::Auto, "auto", || false),
            OutputFormat::Plain
        );
    }

    #[test]
    fn unknown_config_value_falls_back_to_auto() {
        assert_eq!(
            resolve_format(OutputFormat::Auto, "yaml", || false),
            OutputFormat::Plain
        );
    }

    #[test]
    fn color_only_for_human_format() {
        assert!(make_manager(false, OutputFormat::Human).supports_color());
        assert!(!make_manager(false, OutputFormat::Plain).supports_color());
        assert!(!make_manager(false, OutputFormat::Json).supports_color());
    }

    #[test]
    fn quiet_mode_still_writes_results() {
        let out = make_manager(true, OutputFormat::Plain);
        assert!(out.print("hidden").is_ok());
        assert!(out.result("50", &50.0).is_ok());
    }
}
