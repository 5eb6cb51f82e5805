//! Implementation of the `evoprompt generate` command.

use crate::{
    cli::GenerateArgs,
    error::CliResult,
    output::{OutputManager, Tone},
};

pub fn execute(args: GenerateArgs, output: &OutputManager) -> CliResult<()> {
    let result = super::generation_service().generate(&args.input)?;
    output.section("Generation result:", Tone::Cyan, &result)?;
    Ok(())
}
