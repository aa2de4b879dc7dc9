//! End-to-end scenarios for the analysis engine

use adsight::model::{BidAction, Color, DataConfidence, KeywordAction};
use adsight::testing::RecordBuilder;
use adsight::{analyze, AdRecord, AnalysisConfig};

fn find<'a>(result: &'a adsight::AnalysisResult, keyword: &str) -> &'a adsight::model::AnalyzedKeyword {
    result
        .full_analysis
        .data
        .iter()
        .find(|k| k.keyword() == keyword)
        .unwrap_or_else(|| panic!("keyword {keyword} missing from analysis"))
}

#[test]
fn test_clicks_without_orders_are_paused() {
    let records = vec![RecordBuilder::new("k1")
        .impressions(1000)
        .clicks(50)
        .spend(10.0)
        .ctr(0.05)
        .acos(0.0)
        .build()];

    let result = analyze(&records, &AnalysisConfig::default());

    assert_eq!(result.pain_points.keywords_with_no_sales, 1);
    assert_eq!(result.pain_points.wasted_spend, 10.0);
    let k1 = find(&result, "k1");
    assert!(k1.recommendation.starts_with("Pause"));
    assert_eq!(k1.color, Color::Red);
    assert_eq!(k1.effective_acos, None);

    let free = result.free_recommendation.as_ref().unwrap();
    assert_eq!(free.keyword, "k1");
    assert_eq!(free.spend, 10.0);
}

#[test]
fn test_peer_beating_converter_below_break_even_is_boosted() {
    let records = vec![
        RecordBuilder::new("dragon rider")
            .ad_group("Epic")
            .impressions(5000)
            .clicks(50)
            .orders(2)
            .spend(10.0)
            .sales(15.0)
            .royalties(1.0)
            .bid(0.5)
            .build(),
        RecordBuilder::new("wizard academy")
            .ad_group("Epic")
            .impressions(4000)
            .clicks(40)
            .orders(1)
            .spend(10.0)
            .sales(20.0)
            .bid(0.45)
            .build(),
    ];

    let result = analyze(&records, &AnalysisConfig::default());
    let keyword = find(&result, "dragon rider");

    assert_eq!(keyword.data_confidence, DataConfidence::Medium);
    assert!(keyword.recommendation.starts_with("Boost"));
    assert_eq!(keyword.action, KeywordAction::Boost);
    assert!(keyword.new_bid.unwrap() > 0.5);
    assert!(keyword.relative_cvr.unwrap() >= 1.0);

    let bid = result
        .full_analysis
        .bid_recommendations
        .iter()
        .find(|b| b.keyword == "dragon rider")
        .unwrap();
    assert_eq!(bid.action, BidAction::Increase);
    assert!(result.full_analysis.summary.estimated_gain > 0.0);
}

#[test]
fn test_unprofitable_keyword_gets_lower_bid_at_any_confidence() {
    let base = RecordBuilder::new("regency romance")
        .impressions(4000)
        .clicks(60)
        .orders(2)
        .spend(50.0)
        .sales(30.0)
        .royalties(5.0)
        .bid(1.0);
    let high_volume = RecordBuilder::new("regency romance")
        .impressions(40_000)
        .clicks(600)
        .orders(20)
        .spend(500.0)
        .sales(300.0)
        .royalties(50.0)
        .bid(1.0);

    for record in [base.build(), high_volume.build()] {
        let result = analyze(&[record], &AnalysisConfig::default());
        let keyword = find(&result, "regency romance");

        assert!(keyword.recommendation.starts_with("Lower Bid"));
        assert!(!keyword.recommendation.starts_with("Boost"));
        assert!(keyword.new_bid.unwrap() < 1.0);
        assert!(result.full_analysis.summary.potential_savings > 0.0);
    }
}

#[test]
fn test_royalty_earning_keywords_are_not_negated() {
    let records = vec![
        RecordBuilder::new("kindle unlimited romance")
            .impressions(2500)
            .clicks(15)
            .spend(7.0)
            .royalties(2.5)
            .build(),
        RecordBuilder::new("free romance books")
            .impressions(2500)
            .clicks(15)
            .spend(7.0)
            .build(),
    ];

    let result = analyze(&records, &AnalysisConfig::default());
    let negatives = &result.full_analysis.negative_keyword_suggestions;

    assert_eq!(negatives, &vec!["free romance books".to_string()]);
}

#[test]
fn test_match_type_recommendation_in_full_run() {
    let row = |match_type: &str, spend: f64, sales: f64| -> AdRecord {
        RecordBuilder::new("cozy mystery")
            .ad_group(match_type)
            .match_type(match_type)
            .impressions(3000)
            .clicks(30)
            .orders(2)
            .spend(spend)
            .sales(sales)
            .build()
    };
    let records = vec![row("broad", 30.0, 40.0), row("exact", 8.0, 40.0)];

    let result = analyze(&records, &AnalysisConfig::default());
    let recs = &result.full_analysis.match_type_recommendations;

    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].recommended_match_type, adsight::model::MatchType::Exact);
    assert!(recs[0].recommended_acos < recs[0].current_acos);
}

#[test]
fn test_thresholds_follow_configuration() {
    let record = RecordBuilder::new("steady seller")
        .impressions(3000)
        .clicks(30)
        .orders(2)
        .spend(12.0)
        .sales(30.0)
        .build();

    let default = analyze(std::slice::from_ref(&record), &AnalysisConfig::default());
    assert_eq!(find(&default, "steady seller").action, KeywordAction::LowerBid);

    let relaxed = AnalysisConfig {
        target_acos: 0.5,
        ..AnalysisConfig::default()
    };
    let relaxed = analyze(std::slice::from_ref(&record), &relaxed);
    assert_ne!(find(&relaxed, "steady seller").action, KeywordAction::LowerBid);
}

#[test]
fn test_weaker_peer_over_target_is_lowered_while_stronger_is_boosted() {
    let records = vec![
        RecordBuilder::new("strong")
            .ad_group("Cozy")
            .impressions(2000)
            .clicks(20)
            .orders(2)
            .spend(10.0)
            .sales(20.0)
            .bid(0.5)
            .build(),
        RecordBuilder::new("weak")
            .ad_group("Cozy")
            .impressions(2000)
            .clicks(40)
            .orders(1)
            .spend(10.0)
            .sales(20.0)
            .bid(0.5)
            .build(),
    ];

    let result = analyze(&records, &AnalysisConfig::default());

    let strong = find(&result, "strong");
    assert_eq!(strong.data_confidence, DataConfidence::Medium);
    assert!(strong.relative_cvr.unwrap() > 1.0);
    assert_eq!(strong.action, KeywordAction::Boost);

    let weak = find(&result, "weak");
    assert_eq!(weak.data_confidence, DataConfidence::Medium);
    assert_eq!(weak.effective_acos, Some(0.5));
    assert!(weak.relative_cvr.unwrap() < 1.0);
    assert_eq!(weak.action, KeywordAction::LowerBid);
    assert!((weak.new_bid.unwrap() - 0.35).abs() < 1e-9);
}
