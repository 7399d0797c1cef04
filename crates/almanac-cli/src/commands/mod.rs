//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into core calls and print the outcome. No
//! business logic lives here.

pub mod completions;
pub mod config;
pub mod discount;
pub mod expired;
pub mod init;
pub mod percent;
pub mod shift;
pub mod validate;

use almanac_adapters::PatternCodec;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

/// The date codec for the configured `dates.format`.
pub(crate) fn configured_codec(config: &AppConfig) -> CliResult<PatternCodec> {
    PatternCodec::new(config.dates.format.as_str()).map_err(|e| CliError::ConfigError {
        message: format!("dates.format '{}' is not usable", config.dates.format),
        source: Some(Box::new(e)),
    })
}
