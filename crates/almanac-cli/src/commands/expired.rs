//! `almanac expired`: has an expiry date passed?

use serde::Serialize;
use tracing::{debug, instrument};

use almanac_adapters::{FixedClock, SystemClock};
use almanac_core::application::{CalendarService, Clock, DateCodec, TextDateService};

use crate::{
    cli::ExpiredArgs,
    commands::configured_codec,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct ExpiryReport {
    expiry: Option<String>,
    today: String,
    expired: bool,
}

/// Execute the `almanac expired` command.
#[instrument(skip_all)]
pub fn execute(args: ExpiredArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let codec = configured_codec(&config)?;

    let clock: Box<dyn Clock> = match &args.today {
        Some(text) => Box::new(FixedClock::new(codec.parse(text)?)),
        None => Box::new(SystemClock::new()),
    };
    let service = TextDateService::new(Box::new(codec), CalendarService::new(clock));

    let today = service
        .calendar()
        .today()
        .with_cli_context(|| "reading today's date")?;
    let expiry = args.date.as_deref().map(|text| service.parse(text)).transpose()?;
    let expired = service
        .calendar()
        .is_expired(expiry)
        .with_cli_context(|| "checking expiry")?;
    debug!(%today, expired, "Expiry evaluated");

    let verdict = if expired { "expired" } else { "valid" };
    output.result(
        verdict,
        &ExpiryReport {
            expiry: expiry.map(|d| service.format(d)),
            today: service.format(today),
            expired,
        },
    )?;
    Ok(())
}
