//! Per-keyword enrichment: relative metrics, confidence, decision and bids

use tracing::trace;

use super::peers::{relative_metrics, PeerBaseline};
use super::rules::{self, KeywordSignals};
use crate::config::AnalysisConfig;
use crate::model::{finite_or_zero, AdRecord, AnalyzedKeyword};

pub const MAX_PRIORITY: u8 = 10;

/// Build the analyzed view of one record against its ad-group baseline
pub fn enrich(record: &AdRecord, baseline: &PeerBaseline, config: &AnalysisConfig) -> AnalyzedKeyword {
    let relative = relative_metrics(record, baseline);
    let confidence = config.confidence_for(record.clicks, record.orders);
    let effective_acos = record.effective_acos();
    let current_bid = record.current_bid();

    let signals = KeywordSignals {
        impressions: record.impressions,
        clicks: record.clicks,
        orders: record.orders,
        ctr: record.ctr(),
        effective_acos,
        relative_cvr: relative.cvr,
        confidence,
        current_bid,
    };
    let verdict = rules::evaluate(&signals, config);
    let severity = rules::severity_bonus(&signals, config);

    trace!(
        keyword = %record.keyword,
        ad_group = %record.ad_group,
        action = ?verdict.action,
        confidence = %confidence,
        "Keyword decision"
    );

    let mut output = record.clone();
    output.ctr = record.ctr();
    output.acos = record.acos().or(record.acos);

    AnalyzedKeyword {
        record: output,
        color: verdict.action.color(),
        priority_score: priority_score(record.spend(), severity, config),
        action: verdict.action,
        recommendation: verdict.recommendation,
        current_bid,
        new_bid: verdict.new_bid,
        profit_optimized_bid: profit_optimized_bid(current_bid, effective_acos, config),
        relative_acos: relative.acos,
        relative_ctr: relative.ctr,
        relative_cvr: relative.cvr,
        data_confidence: confidence,
        cvr: record.cvr(),
        effective_acos,
    }
}

/// Spend-driven base score plus the accumulated severity bonus, 0 to 10
pub fn priority_score(spend: f64, severity_bonus: u8, config: &AnalysisConfig) -> u8 {
    let unit = config.priority_spend_unit;
    let base = if unit > 0.0 {
        (finite_or_zero(spend) / unit * 10.0)
            .round()
            .min(MAX_PRIORITY as f64)
    } else {
        0.0
    };
    let base = if base.is_finite() { base as u8 } else { 0 };

    base.saturating_add(severity_bonus).min(MAX_PRIORITY)
}

/// Bid that would land ACoTR on target, assuming cost scales with bid
pub fn profit_optimized_bid(
    current_bid: Option<f64>,
    effective_acos: Option<f64>,
    config: &AnalysisConfig,
) -> Option<f64> {
    let bid = current_bid?;
    let acotr = effective_acos.filter(|a| *a > 0.0)?;
    let optimized = bid * config.target_acos / acotr;
    optimized.is_finite().then(|| config.floor_bid(optimized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::peers::PeerGroups;
    use crate::model::{Color, DataConfidence, KeywordAction};
    use crate::testing::RecordBuilder;

    fn enrich_alone(record: AdRecord) -> AnalyzedKeyword {
        let config = AnalysisConfig::default();
        let peers = PeerGroups::by_ad_group(std::slice::from_ref(&record));
        enrich(&record, &peers.baseline_for(&record), &config)
    }

    #[test]
    fn test_priority_base_and_cap() {
        let config = AnalysisConfig::default();
        assert_eq!(priority_score(0.0, 0, &config), 0);
        assert_eq!(priority_score(1.0, 0, &config), 2);
        assert_eq!(priority_score(1.0, 3, &config), 5);
        assert_eq!(priority_score(1.0, 5, &config), 7);
        assert_eq!(priority_score(400.0, 3, &config), 10);
        assert_eq!(priority_score(f64::NAN, 3, &config), 3);
    }

    #[test]
    fn test_pause_keyword_enrichment() {
        let analyzed = enrich_alone(
            RecordBuilder::new("free fantasy books")
                .impressions(1000)
                .clicks(50)
                .spend(10.0)
                .build(),
        );

        assert_eq!(analyzed.action, KeywordAction::Pause);
        assert_eq!(analyzed.color, Color::Red);
        assert!(analyzed.recommendation.starts_with("Pause"));
        assert_eq!(analyzed.new_bid, None);
        assert_eq!(analyzed.effective_acos, None);
        assert_eq!(analyzed.data_confidence, DataConfidence::Low);
        assert_eq!(analyzed.priority_score, 10);
    }

    #[test]
    fn test_pause_with_low_ctr_stacks_bonuses() {
        let analyzed = enrich_alone(
            RecordBuilder::new("unclicked")
                .impressions(10_000)
                .clicks(6)
                .spend(1.0)
                .build(),
        );

        assert_eq!(analyzed.action, KeywordAction::Pause);
        // base 2, +3 pause, +2 low ctr
        assert_eq!(analyzed.priority_score, 7);
    }

    #[test]
    fn test_no_clicks_skips_bid_math() {
        let analyzed = enrich_alone(RecordBuilder::new("k").impressions(50).build());
        assert_eq!(analyzed.current_bid, None);
        assert_eq!(analyzed.new_bid, None);
        assert_eq!(analyzed.profit_optimized_bid, None);
        assert_eq!(analyzed.action, KeywordAction::Maintain);
    }

    #[test]
    fn test_derived_rates_are_serialized() {
        let analyzed = enrich_alone(
            RecordBuilder::new("dragon romance")
                .impressions(1000)
                .clicks(20)
                .orders(1)
                .spend(5.0)
                .sales(10.0)
                .build(),
        );
        let json = serde_json::to_value(&analyzed).unwrap();

        assert_eq!(json["ctr"], 0.02);
        assert_eq!(json["acos"], 0.5);
        assert_eq!(json["cvr"], 0.05);
        assert_eq!(json["effectiveAcos"], 0.5);
    }

    #[test]
    fn test_exported_acos_kept_without_sales() {
        let analyzed = enrich_alone(
            RecordBuilder::new("k")
                .impressions(500)
                .clicks(5)
                .spend(2.0)
                .acos(1.2)
                .build(),
        );
        assert_eq!(analyzed.record.acos, Some(1.2));
        assert_eq!(analyzed.record.ctr, Some(0.01));
        assert_eq!(analyzed.cvr, Some(0.0));
    }

    #[test]
    fn test_profit_optimized_bid_floor() {
        let config = AnalysisConfig::default();
        assert_eq!(profit_optimized_bid(Some(0.3), Some(3.5), &config), Some(0.2));
        let bid = profit_optimized_bid(Some(1.0), Some(0.175), &config).unwrap();
        assert!((bid - 2.0).abs() < 1e-9);
        assert_eq!(profit_optimized_bid(Some(1.0), Some(0.0), &config), None);
        assert_eq!(profit_optimized_bid(None, Some(0.5), &config), None);
    }
}
