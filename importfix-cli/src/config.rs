//! Configuration file loading for importfix.
//!
//! Discovers and loads `importfix.toml` from the working directory (or `--config`).
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use importfix_core::settings::DEFAULT_ANALYZER;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "importfix.toml";

/// Top-level configuration from importfix.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImportfixConfig {
    pub analyzer: AnalyzerConfig,
    pub target: TargetConfig,
    pub remediation: RemediationConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Executable invoked with the pass-through arguments.
    pub program: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_ANALYZER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Label suffix marking a synthetic test wrapper target.
    pub test_wrapper_suffix: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            test_wrapper_suffix: importfix_core::settings::CheckSettings::default()
                .test_wrapper_suffix,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemediationConfig {
    /// First word of every printed command.
    pub tool: String,

    /// `--config=` value in the "run this locally" hint.
    pub reproduce_config: String,
}

impl Default for RemediationConfig {
    fn default() -> Self {
        let defaults = importfix_core::settings::CheckSettings::default();
        Self {
            tool: defaults.edit_tool,
            reproduce_config: defaults.reproduce_config,
        }
    }
}

/// Discover the importfix.toml config file in `dir`.
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

/// Load and parse an importfix.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<ImportfixConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<ImportfixConfig> {
    let config: ImportfixConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from `dir`, or return default if not found.
pub fn load_or_default(dir: &Utf8Path) -> anyhow::Result<ImportfixConfig> {
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(ImportfixConfig::default()),
    }
}

/// Config file merged with CLI arguments.
#[derive(Debug, Clone)]
pub struct MergedConfig {
    pub analyzer: String,
    pub test_wrapper_suffix: String,
    pub edit_tool: String,
    pub reproduce_config: String,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: ImportfixConfig,
}

impl ConfigMerger {
    pub fn new(config: ImportfixConfig) -> Self {
        Self { config }
    }

    /// CLI values replace config file values when given.
    pub fn merge_check_args(
        self,
        cli_analyzer: Option<&str>,
        cli_test_wrapper_suffix: Option<&str>,
    ) -> MergedConfig {
        MergedConfig {
            analyzer: cli_analyzer
                .map(str::to_string)
                .unwrap_or(self.config.analyzer.program),
            test_wrapper_suffix: cli_test_wrapper_suffix
                .map(str::to_string)
                .unwrap_or(self.config.target.test_wrapper_suffix),
            edit_tool: self.config.remediation.tool,
            reproduce_config: self.config.remediation.reproduce_config,
        }
    }
}
