//! Keyword advertising analysis engine
//!
//! A pure function from a list of [`AdRecord`]s and an [`AnalysisConfig`] to an
//! [`AnalysisResult`]. The engine performs no I/O and never fails: undefined
//! ratios surface as `None` rather than errors.

pub mod collation;
pub mod enrichment;
pub mod match_types;
pub mod pain_points;
pub mod peers;
pub mod portfolio;
pub mod rules;

use tracing::{debug, info};

use crate::config::AnalysisConfig;
use crate::model::{AdRecord, AnalysisResult, AnalyzedKeyword, FullAnalysis};

pub use enrichment::{enrich, priority_score, profit_optimized_bid};
pub use peers::{PeerBaseline, PeerGroups, RelativeMetrics};

/// Run the full analysis over one export
pub fn analyze(records: &[AdRecord], config: &AnalysisConfig) -> AnalysisResult {
    let keyword_rows: Vec<AdRecord> = records
        .iter()
        .filter(|r| r.has_keyword())
        .cloned()
        .collect();
    debug!(
        total = records.len(),
        keywords = keyword_rows.len(),
        "Filtered rows without keyword text"
    );

    let pain_points = pain_points::compute(&keyword_rows, config);

    let peers = PeerGroups::by_ad_group(&keyword_rows);
    debug!(ad_groups = peers.len(), "Computed peer baselines");

    let mut data: Vec<AnalyzedKeyword> = keyword_rows
        .iter()
        .map(|r| enrich(r, &peers.baseline_for(r), config))
        .collect();
    // stable: equal scores keep input order
    data.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));

    let match_type_recommendations = match_types::recommend(&keyword_rows);
    let negative_keyword_suggestions = collation::negative_keywords(&keyword_rows, config);
    let bid_recommendations = collation::bid_recommendations(&data);
    let free_recommendation = collation::free_recommendation(&keyword_rows);
    let summary = portfolio::summarize(&data, config);

    info!(
        keywords = summary.analyzed_keywords_count,
        wasted_spend = pain_points.wasted_spend,
        potential_savings = summary.potential_savings,
        estimated_gain = summary.estimated_gain,
        "Analysis complete"
    );

    AnalysisResult {
        pain_points,
        free_recommendation,
        full_analysis: FullAnalysis {
            data,
            negative_keyword_suggestions,
            match_type_recommendations,
            bid_recommendations,
            summary,
        },
    }
}
