//! `almanac percent`: guarded percentage of a total.

use serde::Serialize;
use tracing::{debug, instrument};

use almanac_core::domain::{PercentageRequest, calculator};

use crate::{cli::AmountArgs, error::CliResult, output::OutputManager};

#[derive(Debug, Serialize)]
struct PercentReport {
    total: f64,
    rate: f64,
    percentage: f64,
}

/// Execute the `almanac percent` command.
#[instrument(skip_all, fields(total = args.total, rate = args.rate))]
pub fn execute(args: AmountArgs, output: OutputManager) -> CliResult<()> {
    let request = PercentageRequest::new(args.total, args.rate);
    let percentage = calculator::percentage_of(request)?;
    debug!(percentage, "Percentage computed");

    output.result(
        &percentage.to_string(),
        &PercentReport {
            total: args.total,
            rate: args.rate,
            percentage,
        },
    )?;
    Ok(())
}
