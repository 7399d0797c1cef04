//! `almanac shift`: add months, weeks and days to a date.

use serde::Serialize;
use tracing::{info, instrument};

use almanac_adapters::SystemClock;
use almanac_core::{
    application::{CalendarService, TextDateService},
    domain::DateOffset,
};

use crate::{
    cli::ShiftArgs,
    commands::configured_codec,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct ShiftReport<'a> {
    input: &'a str,
    offset: DateOffset,
    result: &'a str,
}

/// Execute the `almanac shift` command.
#[instrument(skip_all, fields(date = %args.date))]
pub fn execute(args: ShiftArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let offset = DateOffset::new(args.months, args.weeks, args.days);
    let codec = configured_codec(&config)?;
    // Shifting never reads the clock; the service just needs one.
    let service = TextDateService::new(
        Box::new(codec),
        CalendarService::new(Box::new(SystemClock::new())),
    );

    let shifted = service.shift_text(&args.date, offset)?;
    info!(result = %shifted, "Date shifted");

    output.result(
        &shifted,
        &ShiftReport {
            input: &args.date,
            offset,
            result: &shifted,
        },
    )?;
    Ok(())
}
