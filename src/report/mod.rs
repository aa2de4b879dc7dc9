//! Rendering analysis results for people and for other tools

pub mod table;
pub mod text;

use std::fmt;
use std::fs;
use std::path::Path;

use chrono::Utc;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::error::{ErrorExt, Result};
use crate::model::AnalysisResult;

pub use table::render_csv;
pub use text::{format_acotr, render_text};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

pub fn render_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render in the requested format; `top` only limits the text keyword table
pub fn render(
    result: &AnalysisResult,
    format: ReportFormat,
    config: &AnalysisConfig,
    top: usize,
) -> Result<String> {
    debug!(%format, keywords = result.full_analysis.data.len(), "Rendering report");
    match format {
        ReportFormat::Text => Ok(render_text(result, config, top, Utc::now())),
        ReportFormat::Json => render_json(result),
        ReportFormat::Csv => render_csv(result),
    }
}

/// Write a rendered report to `path`, creating parent directories
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .to_output_error(format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, contents)
        .to_output_error(format!("Failed to write report to {}", path.display()))
        .map_err(|e| e.with_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::testing::RecordBuilder;

    #[test]
    fn test_json_contract_field_names() {
        let records = vec![RecordBuilder::new("dragon rider")
            .impressions(5000)
            .clicks(50)
            .orders(2)
            .spend(10.0)
            .sales(15.0)
            .build()];
        let result = analyze(&records, &AnalysisConfig::default());
        let json: serde_json::Value = serde_json::from_str(&render_json(&result).unwrap()).unwrap();

        let keyword = &json["fullAnalysis"]["data"][0];
        assert_eq!(keyword["keyword"], "dragon rider");
        assert!(keyword["priorityScore"].is_u64());
        assert!(keyword["dataConfidence"].is_string());
        assert!(json["fullAnalysis"]["potentialSavings"].is_f64());
        assert!(json["painPoints"]["wastedSpend"].is_f64());
    }

    #[test]
    fn test_format_parsing_and_display() {
        assert_eq!(ReportFormat::from_str("json", true), Ok(ReportFormat::Json));
        assert_eq!(ReportFormat::Csv.to_string(), "csv");
        assert_eq!(ReportFormat::default(), ReportFormat::Text);
    }

    #[test]
    fn test_write_report_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports/today.json");
        write_report(&path, "{}").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "{}");
    }
}
