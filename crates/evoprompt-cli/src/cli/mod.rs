//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum, builder::RangedU64ValueParser};

pub mod global;
pub use global::GlobalArgs;

/// Banner shown above `--help`.
pub const LOGO: &str = r"
 _____                 _                                 _
| ____|_ __ ___  _ __ | | ___  _   _  ___  ___  ___  __| |
|  _| | '_ ` _ \| '_ \| |/ _ \| | | |/ _ \/ __|/ _ \/ _` |
| |___| | | | | | |_) | | (_) | |_| |  __/\__ \  __/ (_| |
|_____|_| |_| |_| .__/|_|\___/ \__, |\___||___/\___|\__,_|
                |_|            |___/
";

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "evoprompt",
    bin_name = "evoprompt",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Evoprompt Protocol CLI: validation, generation and quantum prompts",
    long_about = "Validates JSON documents against domain schemas, runs the \
                  generation step and mixes quantum prompts.",
    before_help = LOGO,
    after_help = "EXAMPLES:\n\
        \x20 evoprompt validate demos/cold_email.json\n\
        \x20 evoprompt entangle demos/landing_page.json --output-format json\n\
        \x20 evoprompt quantum -n 2\n\
        \x20 evoprompt completions bash > /usr/share/bash-completion/completions/evoprompt",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a document against the schema of its domain.
    #[command(
        visible_alias = "v",
        about = "Validate input against a schema",
        after_help = "The domain is read from `metadata.domain` in the document.\n\n\
            EXAMPLES:\n\
            \x20 evoprompt validate demos/cold_email.json\n\
            \x20 evoprompt --schemas-dir ./schemas validate draft.json"
    )]
    Validate(ValidateArgs),

    /// Run the generation step for an input file.
    #[command(
        visible_alias = "g",
        about = "Generate output from an input file"
    )]
    Generate(GenerateArgs),

    /// Validate, then generate, and report both.
    #[command(about = "Validate then generate in one run")]
    Entangle(EntangleArgs),

    /// List the schema table.
    #[command(about = "List available schemas")]
    Schemas,

    /// List example documents.
    #[command(visible_alias = "ls", about = "List available examples")]
    Examples,

    /// Plugin system placeholder.
    #[command(about = "Plugin system (coming soon)")]
    Plugin,

    /// Superpose, entangle and collapse canned prompts.
    #[command(
        about = "Quantum prompt generation",
        after_help = "EXAMPLES:\n\
            \x20 evoprompt quantum\n\
            \x20 evoprompt quantum -n 2 --output-format json"
    )]
    Quantum(QuantumArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 evoprompt completions bash > ~/.local/share/bash-completion/completions/evoprompt\n\
            \x20 evoprompt completions zsh  > ~/.zfunc/_evoprompt\n\
            \x20 evoprompt completions fish > ~/.config/fish/completions/evoprompt.fish"
    )]
    Completions(CompletionsArgs),
}

// ── validate / generate / entangle ───────────────────────────────────────────

/// Arguments for `evoprompt validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the input file to validate.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Arguments for `evoprompt generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Input file for generation.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// Arguments for `evoprompt entangle`.
#[derive(Debug, Args)]
pub struct EntangleArgs {
    /// Input file to validate and generate from.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

// ── quantum ───────────────────────────────────────────────────────────────────

/// Arguments for `evoprompt quantum`.
#[derive(Debug, Args)]
pub struct QuantumArgs {
    /// Number of prompts to superpose.  Falls back to `quantum.default_count`.
    #[arg(
        short = 'n',
        long = "count",
        value_name = "N",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
        help = "Number of prompts to superpose [default: 3]"
    )]
    pub count: Option<usize>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `evoprompt completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_validate_command() {
        let cli = Cli::parse_from(["evoprompt", "validate", "doc.json"]);
        match cli.command {
            Commands::Validate(args) => assert_eq!(args.file, PathBuf::from("doc.json")),
            other => panic!("expected Validate, got {other:?}"),
        }
    }

    #[test]
    fn quantum_count_is_optional() {
        let cli = Cli::parse_from(["evoprompt", "quantum"]);
        assert!(matches!(
            cli.command,
            Commands::Quantum(QuantumArgs { count: None })
        ));

        let cli = Cli::parse_from(["evoprompt", "quantum", "-n", "2"]);
        assert!(matches!(
            cli.command,
            Commands::Quantum(QuantumArgs { count: Some(2) })
        ));
    }

    #[test]
    fn quantum_count_must_be_positive() {
        assert!(Cli::try_parse_from(["evoprompt", "quantum", "-n", "0"]).is_err());
        assert!(Cli::try_parse_from(["evoprompt", "quantum", "-n", "-1"]).is_err());
    }

    #[test]
    fn validate_requires_a_file() {
        assert!(Cli::try_parse_from(["evoprompt", "validate"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "evoprompt",
            "schemas",
            "--schemas-dir",
            "/tmp/s",
            "--output-format",
            "json",
        ]);
        assert_eq!(cli.global.schemas_dir, Some(PathBuf::from("/tmp/s")));
        assert_eq!(cli.global.output_format, global::OutputFormat::Json);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["evoprompt", "--quiet", "--verbose", "plugin"]);
        assert!(result.is_err());
    }
}
