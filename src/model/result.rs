//! Top-level analysis output, JSON-serializable with camelCase field names

use serde::{Deserialize, Serialize};

use super::keyword::{AnalyzedKeyword, MatchType};

/// Headline statistics shown before the full analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PainPoints {
    pub keywords_with_no_sales: usize,
    pub wasted_spend: f64,
    pub keywords_with_low_ctr: usize,
}

/// The single most expensive non-converting keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeRecommendation {
    pub keyword: String,
    pub campaign_name: String,
    pub ad_group: String,
    pub match_type: String,
    pub spend: f64,
    pub clicks: u64,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BidAction {
    Increase,
    Decrease,
    Maintain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidRecommendation {
    pub keyword: String,
    pub campaign_name: String,
    pub ad_group: String,
    pub match_type: String,
    pub action: BidAction,
    pub current_bid: Option<f64>,
    pub recommended_bid: Option<f64>,
    pub potential_impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchTypeRecommendation {
    pub keyword: String,
    pub current_match_type: MatchType,
    pub recommended_match_type: MatchType,
    pub current_acos: f64,
    pub recommended_acos: f64,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioTotals {
    pub total_spend: f64,
    pub total_sales: f64,
    pub total_royalties: f64,
    pub total_orders: u64,
    pub total_clicks: u64,
    pub total_impressions: u64,
}

/// Portfolio-level aggregates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub totals: PortfolioTotals,
    /// Spend over sales plus royalties (ACoTR basis), 0 without revenue
    pub average_acos: f64,
    /// Sales plus royalties over spend, absent without spend
    pub effective_roas: Option<f64>,
    pub potential_savings: f64,
    pub estimated_gain: f64,
    pub net_optimization_potential: f64,
    pub analyzed_keywords_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullAnalysis {
    /// Analyzed keywords, highest priority first
    pub data: Vec<AnalyzedKeyword>,
    pub negative_keyword_suggestions: Vec<String>,
    pub match_type_recommendations: Vec<MatchTypeRecommendation>,
    pub bid_recommendations: Vec<BidRecommendation>,
    #[serde(flatten)]
    pub summary: PortfolioSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub pain_points: PainPoints,
    pub free_recommendation: Option<FreeRecommendation>,
    pub full_analysis: FullAnalysis,
}

impl AnalysisResult {
    pub fn is_empty(&self) -> bool {
        self.full_analysis.data.is_empty()
    }
}
