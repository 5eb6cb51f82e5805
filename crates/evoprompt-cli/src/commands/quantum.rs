//! Implementation of the `evoprompt quantum` command.

use evoprompt_core::{domain::PromptMixer, error::EvopromptError};
use tracing::{debug, instrument};

use crate::{
    cli::QuantumArgs,
    config::AppConfig,
    error::CliResult,
    output::{OutputManager, Tone},
};

#[instrument(skip_all)]
pub fn execute(args: QuantumArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let count = args.count.unwrap_or(config.quantum.default_count);
    debug!(count, "Measuring prompts");

    let report = PromptMixer::default()
        .measure(count, &mut rand::thread_rng())
        .map_err(EvopromptError::from)?;

    if output.is_json() {
        output.document(&report)?;
        return Ok(());
    }

    output.header("Quantum Prompt Generation:", Tone::Blue)?;
    output.section("Superposed Prompts:", Tone::Yellow, &report.superposed)?;
    output.section("Entangled Prompt:", Tone::Green, &report.entangled)?;
    output.section("Collapsed Prompt (Measurement):", Tone::Magenta, &report.collapsed)?;
    Ok(())
}
