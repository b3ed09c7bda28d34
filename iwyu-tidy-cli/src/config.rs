//! Configuration file loading for iwyu-tidy.
//!
//! Discovers and loads `iwyu-tidy.toml` from the working directory.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use iwyu_tidy_tables::{FalsePositiveConfig, ReportConfig, TablesConfig, UmbrellaConfig};
use serde::Deserialize;
use tracing::debug;

use crate::run::{ColorChoice, OutputFormat};

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "iwyu-tidy.toml";

/// Top-level configuration from iwyu-tidy.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IwyuTidyConfig {
    /// Report shape settings (path prefix, error prefix, strictness).
    pub report: ReportConfig,

    /// Umbrella header replacement and extra forward declarations.
    pub umbrella: UmbrellaConfig,

    /// Additional known-bad suggestions.
    pub false_positives: Vec<FalsePositiveConfig>,

    /// Output defaults.
    pub output: OutputConfig,
}

impl IwyuTidyConfig {
    pub fn tables_config(&self) -> TablesConfig {
        TablesConfig {
            report: self.report.clone(),
            umbrella: self.umbrella.clone(),
            false_positives: self.false_positives.clone(),
        }
    }
}

/// Output section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub color: Option<ColorChoice>,
}

/// Discover the iwyu-tidy.toml config file in `dir`.
///
/// Returns `None` if no config file is found.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse an iwyu-tidy.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<IwyuTidyConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<IwyuTidyConfig> {
    let config: IwyuTidyConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from `dir`, or return default if not found.
pub fn load_or_default(dir: &Utf8Path) -> anyhow::Result<IwyuTidyConfig> {
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(IwyuTidyConfig::default()),
    }
}

/// Flags that can override the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub format: Option<OutputFormat>,
    pub color: Option<ColorChoice>,
    pub strict: bool,
}

/// Merged configuration combining config file and CLI arguments.
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
    pub format: OutputFormat,
    pub color: ColorChoice,
    pub strict: bool,
    pub tables: TablesConfig,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: IwyuTidyConfig,
}

impl ConfigMerger {
    pub fn new(config: IwyuTidyConfig) -> Self {
        Self { config }
    }

    /// CLI values win where given; `--strict` ORs with `report.strict`.
    pub fn merge(self, cli: &CliOverrides) -> MergedConfig {
        let tables = self.config.tables_config();
        MergedConfig {
            format: cli.format.or(self.config.output.format).unwrap_or_default(),
            color: cli.color.or(self.config.output.color).unwrap_or_default(),
            strict: cli.strict || self.config.report.strict,
            tables,
        }
    }
}
