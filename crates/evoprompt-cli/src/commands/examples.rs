//! Implementation of the `evoprompt examples` command.

use crate::{
    config::AppConfig,
    error::CliResult,
    output::{OutputManager, Tone},
};

pub fn execute(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let examples = super::catalog_service(config).list_examples()?;

    if output.is_json() {
        output.document(&examples)?;
        return Ok(());
    }

    if examples.is_empty() {
        output.error(&format!(
            "No examples found in {}",
            config.examples_dir().display()
        ))?;
        return Ok(());
    }

    output.header("Available Examples:", Tone::Cyan)?;
    for path in &examples {
        output.line(&format!("  {}", path.display()))?;
    }
    Ok(())
}
