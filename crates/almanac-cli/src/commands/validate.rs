//! `almanac validate`: the guard-clause credential check.

use serde::Serialize;
use tracing::{info, instrument};

use almanac_core::domain::{Subject, ValidationOutcome, validation};

use crate::{
    cli::ValidateArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct ValidationReport {
    outcome: ValidationOutcome,
    message: &'static str,
    valid: bool,
}

/// Execute the `almanac validate` command.
///
/// The outcome is always printed; anything but `Valid` then fails with
/// exit code 2.
#[instrument(skip_all, fields(system_down = args.system_down, has_subject = args.name.is_some()))]
pub fn execute(args: ValidateArgs, output: OutputManager) -> CliResult<()> {
    let subject = args
        .name
        .map(|name| Subject::new(name, args.credential));
    let outcome = validation::validate(!args.system_down, subject.as_ref(), args.supplied);
    info!(%outcome, "Validation finished");

    output.result(
        outcome.message(),
        &ValidationReport {
            outcome,
            message: outcome.message(),
            valid: outcome.is_valid(),
        },
    )?;

    if outcome.is_valid() {
        Ok(())
    } else {
        Err(CliError::Rejected { outcome })
    }
}
