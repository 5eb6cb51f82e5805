//! Implementation of the `evoprompt schemas` command.

use crate::{
    config::AppConfig,
    error::CliResult,
    output::{OutputManager, Tone},
};

pub fn execute(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let entries = super::catalog_service(config).list_schemas();

    if output.is_json() {
        output.document(&entries)?;
        return Ok(());
    }

    if !entries.iter().any(|e| e.present) {
        output.error(&format!(
            "No schemas found under {}",
            config.schemas_dir().display()
        ))?;
        return Ok(());
    }

    output.header("Available Schemas:", Tone::Green)?;
    for entry in &entries {
        let marker = if entry.present { "\u{2713}" } else { "\u{2717}" };
        let note = if entry.present { "" } else { "  (missing)" };
        output.line(&format!(
            "  {marker} {:<20} {}{note}",
            entry.domain.key(),
            entry.path.display()
        ))?;
    }
    Ok(())
}
