//! `almanac discount`: take a percentage off a total.

use serde::Serialize;
use tracing::{debug, instrument};

use almanac_core::domain::{PercentageRequest, calculator};

use crate::{cli::AmountArgs, error::CliResult, output::OutputManager};

#[derive(Debug, Serialize)]
struct DiscountReport {
    total: f64,
    rate: f64,
    discount: f64,
    discounted_total: f64,
}

/// Execute the `almanac discount` command.
#[instrument(skip_all, fields(total = args.total, rate = args.rate))]
pub fn execute(args: AmountArgs, output: OutputManager) -> CliResult<()> {
    let request = PercentageRequest::new(args.total, args.rate);
    let discount = calculator::percentage_of(request)?;
    let discounted_total = calculator::discounted_total(request)?;
    debug!(discount, discounted_total, "Discount applied");

    output.result(
        &format!("discount: {discount}\ntotal: {discounted_total}"),
        &DiscountReport {
            total: args.total,
            rate: args.rate,
            discount,
            discounted_total,
        },
    )?;
    Ok(())
}
