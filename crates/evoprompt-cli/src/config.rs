//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags ([`AppConfig::apply_overrides`])
//! 2. Environment variables, `EVOPROMPT__<SECTION>__<KEY>`
//! 3. Config file (`--config`, or the platform config dir when present)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::global::{GlobalArgs, OutputFormat};

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "EVOPROMPT";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where schemas and examples live.
    pub paths: PathsConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Quantum prompt settings.
    pub quantum: QuantumConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub schemas_dir: PathBuf,
    pub examples_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantumConfig {
    pub default_count: usize,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            schemas_dir: PathBuf::from("schemas"),
            examples_dir: PathBuf::from("examples"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl Default for QuantumConfig {
    fn default() -> Self {
        Self { default_count: 3 }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional file and the environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Self::config_path()).required(false),
        };
        Self::load_from(file, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(
        file: File<config::FileSourceFile, config::FileFormat>,
        env: Environment,
    ) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to serialise default config")?;

        let cfg: Self = Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                env.prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        cfg.validate()?;
        debug!(?cfg, "Configuration loaded");
        Ok(cfg)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.quantum.default_count == 0 {
            bail!("quantum.default_count must be at least 1");
        }
        if OutputFormat::from_config(&self.output.format).is_none() {
            bail!(
                "output.format must be one of auto, human, plain, json (got '{}')",
                self.output.format
            );
        }
        Ok(())
    }

    /// Let command-line flags win over every other source.
    pub fn apply_overrides(&mut self, args: &GlobalArgs) {
        if let Some(dir) = &args.schemas_dir {
            self.paths.schemas_dir = dir.clone();
        }
        if let Some(dir) = &args.examples_dir {
            self.paths.examples_dir = dir.clone();
        }
        if args.no_color {
            self.output.no_color = true;
        }
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.evoprompt.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "evoprompt", "evoprompt")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".evoprompt.toml"))
    }

    pub fn schemas_dir(&self) -> &Path {
        &self.paths.schemas_dir
    }

    pub fn examples_dir(&self) -> &Path {
        &self.paths.examples_dir
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load_toml(toml: &str, env: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, toml).unwrap();

        let vars: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::load_from(
            File::from(path.as_path()).required(true),
            Environment::with_prefix(ENV_PREFIX).source(Some(vars)),
        )
    }

    #[test]
    fn defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.schemas_dir(), Path::new("schemas"));
        assert_eq!(cfg.examples_dir(), Path::new("examples"));
        assert_eq!(cfg.quantum.default_count, 3);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn file_overrides_defaults() {
        let cfg = load_toml(
            "[paths]\nschemas_dir = \"/srv/schemas\"\n\n[quantum]\ndefault_count = 2\n",
            &[],
        )
        .unwrap();
        assert_eq!(cfg.schemas_dir(), Path::new("/srv/schemas"));
        assert_eq!(cfg.examples_dir(), Path::new("examples"));
        assert_eq!(cfg.quantum.default_count, 2);
    }

    #[test]
    fn environment_overrides_file() {
        let cfg = load_toml(
            "[quantum]\ndefault_count = 2\n",
            &[("EVOPROMPT__QUANTUM__DEFAULT_COUNT", "1")],
        )
        .unwrap();
        assert_eq!(cfg.quantum.default_count, 1);
    }

    #[test]
    fn zero_default_count_is_rejected() {
        let err = load_toml("[quantum]\ndefault_count = 0\n", &[]).unwrap_err();
        assert!(err.to_string().contains("default_count"));
    }

    #[test]
    fn unknown_output_format_is_rejected() {
        assert!(load_toml("[output]\nformat = \"yaml\"\n", &[]).is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/evoprompt.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn flags_override_config() {
        let mut cfg = AppConfig::default();
        let args = GlobalArgs {
            no_color: true,
            schemas_dir: Some(PathBuf::from("s")),
            ..Default::default()
        };
        cfg.apply_overrides(&args);

        assert_eq!(cfg.schemas_dir(), Path::new("s"));
        assert_eq!(cfg.examples_dir(), Path::new("examples"));
        assert!(cfg.output.no_color);
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
