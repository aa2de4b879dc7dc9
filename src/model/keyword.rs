//! Per-keyword analysis output

use serde::{Deserialize, Serialize};
use std::fmt;

use super::record::AdRecord;

/// UI hint attached to every recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
    Green,
}

/// How far a keyword's statistics can be trusted, ordered from weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DataConfidence {
    Low,
    Medium,
    High,
}

impl fmt::Display for DataConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        f.write_str(label)
    }
}

/// The closed set of per-keyword actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeywordAction {
    Pause,
    LowCtr,
    Boost,
    LowerBid,
    Maintain,
}

impl KeywordAction {
    pub fn color(&self) -> Color {
        match self {
            Self::Pause | Self::LowCtr => Color::Red,
            Self::Boost => Color::Green,
            Self::LowerBid | Self::Maintain => Color::Yellow,
        }
    }

    /// Extra priority granted for the severity of the issue
    pub fn severity_bonus(&self) -> u8 {
        match self {
            Self::Pause => 3,
            Self::LowCtr => 2,
            Self::LowerBid => 1,
            Self::Boost | Self::Maintain => 0,
        }
    }
}

/// Targeting breadth of a keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Phrase,
    Broad,
    Other,
}

impl MatchType {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "exact" => Self::Exact,
            "phrase" => Self::Phrase,
            "broad" => Self::Broad,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Exact => "exact",
            Self::Phrase => "phrase",
            Self::Broad => "broad",
            Self::Other => "other",
        };
        f.write_str(label)
    }
}

/// An input row enriched with relative metrics, confidence and a recommendation
///
/// The embedded record carries `ctr` and `acos` as derived from its counts,
/// falling back to the exported values only when they cannot be derived.
/// Created once per analysis run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedKeyword {
    #[serde(flatten)]
    pub record: AdRecord,
    pub action: KeywordAction,
    /// Advisory text, always starting with the action label ("Pause", "Boost", ...)
    pub recommendation: String,
    pub color: Color,
    pub current_bid: Option<f64>,
    pub new_bid: Option<f64>,
    pub profit_optimized_bid: Option<f64>,
    pub priority_score: u8,
    pub relative_acos: Option<f64>,
    pub relative_ctr: Option<f64>,
    pub relative_cvr: Option<f64>,
    pub data_confidence: DataConfidence,
    /// Orders per click
    pub cvr: Option<f64>,
    pub effective_acos: Option<f64>,
}

impl AnalyzedKeyword {
    pub fn keyword(&self) -> &str {
        &self.record.keyword
    }
}
