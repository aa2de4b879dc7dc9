//! Portfolio totals and projected optimization value

use super::collation::bid_action;
use crate::config::AnalysisConfig;
use crate::model::{ratio, AnalyzedKeyword, BidAction, PortfolioSummary, PortfolioTotals};

pub fn totals<'a>(keywords: impl IntoIterator<Item = &'a AnalyzedKeyword>) -> PortfolioTotals {
    keywords
        .into_iter()
        .map(|k| &k.record)
        .fold(PortfolioTotals::default(), |mut acc, r| {
            acc.total_spend += r.spend();
            acc.total_sales += r.sales();
            acc.total_royalties += r.royalties();
            acc.total_orders = acc.total_orders.saturating_add(r.orders);
            acc.total_clicks = acc.total_clicks.saturating_add(r.clicks);
            acc.total_impressions = acc.total_impressions.saturating_add(r.impressions);
            acc
        })
}

/// Aggregate the analyzed portfolio into summary metrics
pub fn summarize(keywords: &[AnalyzedKeyword], config: &AnalysisConfig) -> PortfolioSummary {
    let totals = totals(keywords);
    let revenue = totals.total_sales + totals.total_royalties;

    let potential_savings: f64 = keywords
        .iter()
        .filter(|k| bid_action(k.action) == BidAction::Decrease)
        .map(|k| projected_savings(k, config))
        .sum();
    let estimated_gain: f64 = keywords
        .iter()
        .filter(|k| bid_action(k.action) == BidAction::Increase)
        .map(|k| projected_gain(k, config))
        .sum();

    PortfolioSummary {
        average_acos: ratio(totals.total_spend, revenue).unwrap_or(0.0),
        effective_roas: ratio(revenue, totals.total_spend),
        potential_savings,
        estimated_gain,
        net_optimization_potential: potential_savings + estimated_gain,
        analyzed_keywords_count: keywords.len(),
        totals,
    }
}

/// Spend no longer needed once ACoTR reaches the target
pub fn projected_savings(keyword: &AnalyzedKeyword, config: &AnalysisConfig) -> f64 {
    let Some(acotr) = keyword.effective_acos.filter(|a| *a > 0.0) else {
        return 0.0;
    };
    let saving = keyword.record.spend() * (1.0 - config.target_acos / acotr);
    if saving.is_finite() {
        saving.max(0.0)
    } else {
        0.0
    }
}

/// Extra revenue from the additional clicks a higher bid buys
///
/// Assumes clicks scale with the bid ratio (damped by `click_elasticity`)
/// and that new clicks convert like existing ones.
pub fn projected_gain(keyword: &AnalyzedKeyword, config: &AnalysisConfig) -> f64 {
    let record = &keyword.record;
    let bid_ratio = keyword
        .current_bid
        .zip(keyword.new_bid)
        .and_then(|(current, new)| ratio(new, current))
        .unwrap_or(config.boost_bid_multiplier);

    let extra_clicks = record.clicks as f64 * (bid_ratio - 1.0).max(0.0) * config.click_elasticity;
    let gain = match (record.cvr(), record.revenue_per_order()) {
        (Some(cvr), Some(revenue_per_order)) => extra_clicks * cvr * revenue_per_order,
        _ => 0.0,
    };
    if gain.is_finite() {
        gain.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::enrichment::enrich;
    use crate::analysis::peers::PeerGroups;
    use crate::model::{AdRecord, KeywordAction};
    use crate::testing::RecordBuilder;

    fn analyze_all(records: &[AdRecord]) -> Vec<AnalyzedKeyword> {
        let config = AnalysisConfig::default();
        let peers = PeerGroups::by_ad_group(records);
        records
            .iter()
            .map(|r| enrich(r, &peers.baseline_for(r), &config))
            .collect()
    }

    #[test]
    fn test_empty_portfolio() {
        let summary = summarize(&[], &AnalysisConfig::default());
        assert_eq!(summary.average_acos, 0.0);
        assert_eq!(summary.effective_roas, None);
        assert_eq!(summary.net_optimization_potential, 0.0);
        assert_eq!(summary.analyzed_keywords_count, 0);
    }

    #[test]
    fn test_totals_and_ratios() {
        let keywords = analyze_all(&[
            RecordBuilder::new("a").impressions(1000).clicks(10).orders(1).spend(10.0).sales(30.0).build(),
            RecordBuilder::new("b").impressions(500).clicks(5).spend(10.0).royalties(10.0).build(),
        ]);
        let summary = summarize(&keywords, &AnalysisConfig::default());

        assert_eq!(summary.totals.total_spend, 20.0);
        assert_eq!(summary.totals.total_sales, 30.0);
        assert_eq!(summary.totals.total_royalties, 10.0);
        assert_eq!(summary.totals.total_orders, 1);
        assert_eq!(summary.totals.total_clicks, 15);
        assert_eq!(summary.totals.total_impressions, 1500);
        assert_eq!(summary.average_acos, 0.5);
        assert_eq!(summary.effective_roas, Some(2.0));
        assert_eq!(summary.analyzed_keywords_count, 2);
    }

    #[test]
    fn test_savings_from_lower_bid() {
        let keywords = analyze_all(&[RecordBuilder::new("over target")
            .impressions(4000)
            .clicks(60)
            .orders(2)
            .spend(50.0)
            .sales(30.0)
            .royalties(5.0)
            .build()]);
        assert_eq!(keywords[0].action, KeywordAction::LowerBid);

        let summary = summarize(&keywords, &AnalysisConfig::default());
        // 50 * (1 - 0.35 / (50 / 35)) = 37.75
        assert!((summary.potential_savings - 37.75).abs() < 1e-9);
        assert_eq!(summary.estimated_gain, 0.0);
        assert_eq!(summary.net_optimization_potential, summary.potential_savings);
    }

    #[test]
    fn test_gain_from_boost() {
        let keywords = analyze_all(&[RecordBuilder::new("winner")
            .impressions(5000)
            .clicks(100)
            .orders(5)
            .spend(10.0)
            .sales(100.0)
            .bid(0.5)
            .build()]);
        assert_eq!(keywords[0].action, KeywordAction::Boost);

        let summary = summarize(&keywords, &AnalysisConfig::default());
        // 100 clicks * 0.2 * 0.05 cvr * $20 per order = 20
        assert!((summary.estimated_gain - 20.0).abs() < 1e-9);
        assert_eq!(summary.potential_savings, 0.0);
    }

    #[test]
    fn test_count_totals_saturate() {
        let keywords = analyze_all(&[
            RecordBuilder::new("a").impressions(u64::MAX).clicks(u64::MAX).orders(u64::MAX).spend(5.0).build(),
            RecordBuilder::new("b").impressions(u64::MAX).clicks(u64::MAX).orders(u64::MAX).spend(5.0).build(),
        ]);
        let totals = totals(&keywords);

        assert_eq!(totals.total_clicks, u64::MAX);
        assert_eq!(totals.total_orders, u64::MAX);
        assert_eq!(totals.total_impressions, u64::MAX);
        assert_eq!(totals.total_spend, 10.0);
    }

    #[test]
    fn test_savings_never_negative() {
        let keywords = analyze_all(&[RecordBuilder::new("k").clicks(30).orders(1).spend(1.0).sales(10.0).build()]);
        let mut k = keywords[0].clone();
        k.effective_acos = Some(0.1);
        assert_eq!(projected_savings(&k, &AnalysisConfig::default()), 0.0);
    }
}
