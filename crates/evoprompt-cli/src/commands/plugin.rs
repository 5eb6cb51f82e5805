//! Implementation of the `evoprompt plugin` command.

use serde_json::json;

use crate::{
    error::CliResult,
    output::{OutputManager, Tone},
};

pub const PLUGIN_MESSAGE: &str = "Plugin system coming soon! Quantum extensibility awaits.";

pub fn execute(output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.document(&json!({ "message": PLUGIN_MESSAGE }))?;
    } else {
        output.message(PLUGIN_MESSAGE, Tone::Magenta)?;
    }
    Ok(())
}
