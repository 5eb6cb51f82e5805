//! Implementation of the `evoprompt entangle` command.
//!
//! Validation runs first; its result is reported even when it failed, and
//! generation still follows.

use tracing::instrument;

use crate::{
    cli::EntangleArgs,
    config::AppConfig,
    error::CliResult,
    output::{OutputManager, Tone},
};

#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: EntangleArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let run = super::entangle_service(config).run(&args.file)?;

    if output.is_json() {
        output.document(&run)?;
        return Ok(());
    }

    output.section("Validation result:", Tone::Green, &run.validation)?;
    super::validate::report_status(output, &run.validation)?;
    output.section("Generation result:", Tone::Cyan, &run.generation)?;
    output.section("Entangled results:", Tone::Magenta, &run)?;
    Ok(())
}
