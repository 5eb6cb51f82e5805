//! Implementation of the `evoprompt validate` command.

use evoprompt_core::domain::ValidationResult;
use tracing::instrument;

use crate::{
    cli::ValidateArgs,
    config::AppConfig,
    error::CliResult,
    output::{OutputManager, Tone},
};

#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: ValidateArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let result = super::validation_service(config).validate_file(&args.file)?;

    output.section("Validation result:", Tone::Green, &result)?;
    report_status(output, &result)?;
    Ok(())
}

/// One-line verdict under the result document (human/plain only).
pub(crate) fn report_status(output: &OutputManager, result: &ValidationResult) -> CliResult<()> {
    if output.is_json() {
        return Ok(());
    }
    let file = result.file();
    match (result.error(), result.domain()) {
        (None, Some(domain)) => output.success(&format!("{file} is a valid {domain} document"))?,
        (None, None) => output.success(&format!("{file} is valid"))?,
        (Some(error), _) => output.warning(&format!("{file} is invalid: {error}"))?,
    }
    Ok(())
}
