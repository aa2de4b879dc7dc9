//! Grouped recommendations derived from analyzed keywords

use std::collections::HashSet;

use crate::config::AnalysisConfig;
use crate::model::{
    AdRecord, AnalyzedKeyword, BidAction, BidRecommendation, FreeRecommendation, KeywordAction,
};

/// Keywords that keep spending on clicks without ever converting
///
/// Rows earning page-read royalties are left alone. Output is ordered by
/// spend, highest first, with case-insensitive duplicates dropped.
pub fn negative_keywords(records: &[AdRecord], config: &AnalysisConfig) -> Vec<String> {
    let mut candidates: Vec<&AdRecord> = records
        .iter()
        .filter(|r| {
            r.is_zero_order_spend()
                && r.clicks > config.negative_keyword_min_clicks
                && !r.has_royalties()
        })
        .collect();
    candidates.sort_by(|a, b| b.spend().total_cmp(&a.spend()));

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|r| seen.insert(r.keyword.trim().to_lowercase()))
        .map(|r| r.keyword.trim().to_string())
        .collect()
}

pub fn bid_action(action: KeywordAction) -> BidAction {
    match action {
        KeywordAction::Boost => BidAction::Increase,
        KeywordAction::LowerBid => BidAction::Decrease,
        _ => BidAction::Maintain,
    }
}

/// One bid entry per analyzed keyword, in the order given
pub fn bid_recommendations(keywords: &[AnalyzedKeyword]) -> Vec<BidRecommendation> {
    keywords
        .iter()
        .map(|k| {
            let action = bid_action(k.action);
            BidRecommendation {
                keyword: k.record.keyword.clone(),
                campaign_name: k.record.campaign_name.clone(),
                ad_group: k.record.ad_group.clone(),
                match_type: k.record.match_type.clone(),
                action,
                current_bid: k.current_bid,
                recommended_bid: k.new_bid.or(k.current_bid),
                potential_impact: potential_impact(k, action),
            }
        })
        .collect()
}

fn potential_impact(k: &AnalyzedKeyword, action: BidAction) -> String {
    match (action, k.current_bid, k.new_bid) {
        (BidAction::Increase, Some(current), Some(new)) => format!(
            "Raise bid ${current:.2} -> ${new:.2} to win more impressions at {:.0}% ACoTR",
            k.effective_acos.unwrap_or_default() * 100.0
        ),
        (BidAction::Decrease, Some(current), Some(new)) => format!(
            "Cut bid ${current:.2} -> ${new:.2} to bring ACoTR from {:.0}% toward target",
            k.effective_acos.unwrap_or_default() * 100.0
        ),
        (BidAction::Increase, _, _) => "Raise bid to scale a profitable keyword".to_string(),
        (BidAction::Decrease, _, _) => "Lower bid to reduce unprofitable spend".to_string(),
        (BidAction::Maintain, _, _) => match k.action {
            KeywordAction::Pause => format!("Stop ${:.2} of spend with no orders", k.record.spend()),
            KeywordAction::LowCtr => "Fix relevance before changing the bid".to_string(),
            _ => "No change expected".to_string(),
        },
    }
}

/// The most expensive keyword that never converted
pub fn free_recommendation(records: &[AdRecord]) -> Option<FreeRecommendation> {
    records
        .iter()
        .filter(|r| r.is_zero_order_spend())
        .fold(None::<&AdRecord>, |best, r| match best {
            Some(b) if b.spend() >= r.spend() => Some(b),
            _ => Some(r),
        })
        .map(|r| FreeRecommendation {
            keyword: r.keyword.trim().to_string(),
            campaign_name: r.campaign_name.clone(),
            ad_group: r.ad_group.clone(),
            match_type: r.match_type.clone(),
            spend: r.spend(),
            clicks: r.clicks,
            message: format!(
                "\"{}\" spent ${:.2} over {} clicks without a single order. \
                 Pause it or add it as a negative keyword.",
                r.keyword.trim(),
                r.spend(),
                r.clicks
            ),
        })
}
