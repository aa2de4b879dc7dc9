use clap::ValueEnum;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

pub mod analysis;
pub mod loader;

pub use analysis::AnalysisConfig;
pub use loader::ConfigLoader;

use crate::error::{common, AdsightError, ErrorCode, ErrorExt, Result};
use crate::report::ReportFormat;

/// Name of the project-local configuration file
pub const CONFIG_FILE_NAME: &str = "adsight.toml";

/// Get the per-user adsight configuration directory
pub fn get_global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "adsight", "adsight").map(|dirs| dirs.config_dir().to_path_buf())
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: ReportFormat,
    /// Keywords listed in the text report
    pub top: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            top: 15,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_env_from(|key| std::env::var(key).ok())
    }

    /// Apply `ADSIGHT_*` overrides read through `lookup`
    pub fn merge_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("ADSIGHT_TARGET_ACOS") {
            self.analysis.target_acos = parse_env_number("ADSIGHT_TARGET_ACOS", &value)?;
        }

        if let Some(value) = lookup("ADSIGHT_MIN_BID") {
            self.analysis.min_bid = parse_env_number("ADSIGHT_MIN_BID", &value)?;
        }

        if let Some(value) = lookup("ADSIGHT_LOW_CTR_THRESHOLD") {
            self.analysis.low_ctr_threshold =
                parse_env_number("ADSIGHT_LOW_CTR_THRESHOLD", &value)?;
        }

        if let Some(format) = lookup("ADSIGHT_FORMAT") {
            self.output.format = ReportFormat::from_str(format.trim(), true)
                .map_err(|_| common::unsupported_format(&format))?;
        }

        if let Some(level) = lookup("ADSIGHT_LOG_LEVEL") {
            self.log_level = Some(level);
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.analysis.validate()
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).to_config_error("Failed to render configuration")
    }
}

fn parse_env_number(name: &str, value: &str) -> Result<f64> {
    debug!("Applying environment override {}={}", name, value);
    value.trim().parse::<f64>().map_err(|e| {
        AdsightError::config_with_code(
            ErrorCode::CONFIG_INVALID_VALUE,
            format!("{} must be a number, got '{}'", name, value),
            None,
        )
        .with_source(e)
    })
}
