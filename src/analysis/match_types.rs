//! Cross-match-type comparison of the same keyword text

use std::collections::BTreeMap;

use crate::model::{ratio, AdRecord, MatchType, MatchTypeRecommendation};

/// Pooled performance of one keyword under one match type
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Variant {
    spend: f64,
    revenue: f64,
    orders: u64,
}

impl Variant {
    fn acos(&self) -> Option<f64> {
        ratio(self.spend, self.revenue)
    }
}

#[derive(Debug, Default)]
struct KeywordGroup {
    display: String,
    variants: BTreeMap<MatchType, Variant>,
}

/// Recommend tightening broad keywords whose exact or phrase twins convert cheaper
///
/// At most one recommendation per keyword; exact is preferred over phrase.
pub fn recommend(records: &[AdRecord]) -> Vec<MatchTypeRecommendation> {
    group_by_base_keyword(records)
        .into_values()
        .filter_map(|group| recommend_for_group(&group))
        .collect()
}

fn group_by_base_keyword(records: &[AdRecord]) -> BTreeMap<String, KeywordGroup> {
    let mut groups: BTreeMap<String, KeywordGroup> = BTreeMap::new();

    for record in records {
        let match_type = MatchType::parse(&record.match_type);
        if match_type == MatchType::Other {
            continue;
        }

        let group = groups.entry(base_keyword(&record.keyword)).or_default();
        if group.display.is_empty() {
            group.display = record.keyword.trim().to_string();
        }
        let variant = group.variants.entry(match_type).or_default();
        variant.spend += record.spend();
        variant.revenue += record.total_revenue();
        variant.orders = variant.orders.saturating_add(record.orders);
    }

    groups
}

pub fn base_keyword(keyword: &str) -> String {
    keyword.trim().to_lowercase()
}

fn recommend_for_group(group: &KeywordGroup) -> Option<MatchTypeRecommendation> {
    if group.variants.len() < 2 {
        return None;
    }
    let broad_acos = group.variants.get(&MatchType::Broad)?.acos()?;

    [MatchType::Exact, MatchType::Phrase]
        .into_iter()
        .find_map(|tighter| {
            let variant = group.variants.get(&tighter)?;
            let acos = variant.acos()?;
            (variant.orders > 0 && acos < broad_acos).then(|| MatchTypeRecommendation {
                keyword: group.display.clone(),
                current_match_type: MatchType::Broad,
                recommended_match_type: tighter,
                current_acos: broad_acos,
                recommended_acos: acos,
                reason: format!(
                    "{} match converts at {:.0}% ACoTR vs {:.0}% on broad",
                    capitalize(tighter),
                    acos * 100.0,
                    broad_acos * 100.0
                ),
            })
        })
}

fn capitalize(match_type: MatchType) -> &'static str {
    match match_type {
        MatchType::Exact => "Exact",
        MatchType::Phrase => "Phrase",
        MatchType::Broad => "Broad",
        MatchType::Other => "Other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordBuilder;

    fn row(keyword: &str, match_type: &str, spend: f64, sales: f64, orders: u64) -> AdRecord {
        RecordBuilder::new(keyword)
            .match_type(match_type)
            .clicks(20)
            .orders(orders)
            .spend(spend)
            .sales(sales)
            .build()
    }

    #[test]
    fn test_exact_preferred_when_cheaper() {
        let records = vec![
            row("Cozy Mystery", "broad", 30.0, 50.0, 3),
            row("cozy mystery", "EXACT", 10.0, 50.0, 3),
            row("cozy mystery", "phrase", 10.0, 80.0, 4),
        ];
        let recs = recommend(&records);

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].keyword, "Cozy Mystery");
        assert_eq!(recs[0].recommended_match_type, MatchType::Exact);
        assert_eq!(recs[0].current_acos, 0.6);
        assert_eq!(recs[0].recommended_acos, 0.2);
        assert!(recs[0].reason.starts_with("Exact match"));
    }

    #[test]
    fn test_phrase_when_exact_has_no_orders() {
        let records = vec![
            row("space opera", "broad", 30.0, 50.0, 3),
            row("space opera", "exact", 5.0, 0.0, 0),
            row("space opera", "phrase", 10.0, 40.0, 2),
        ];
        let recs = recommend(&records);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].recommended_match_type, MatchType::Phrase);
    }

    #[test]
    fn test_no_recommendation_when_broad_is_cheaper() {
        let records = vec![
            row("litrpg", "broad", 10.0, 100.0, 5),
            row("litrpg", "exact", 20.0, 50.0, 2),
        ];
        assert!(recommend(&records).is_empty());
    }

    #[test]
    fn test_single_variant_or_missing_broad() {
        let records = vec![
            row("grimdark", "broad", 10.0, 20.0, 1),
            row("grimdark", "broad", 10.0, 20.0, 1),
            row("epic fantasy", "exact", 5.0, 50.0, 2),
            row("epic fantasy", "phrase", 5.0, 10.0, 1),
        ];
        assert!(recommend(&records).is_empty());
    }

    #[test]
    fn test_broad_without_sales_is_not_a_control() {
        let records = vec![
            row("portal fantasy", "broad", 25.0, 0.0, 0),
            row("portal fantasy", "exact", 5.0, 30.0, 2),
        ];
        assert!(recommend(&records).is_empty());
    }

    #[test]
    fn test_ties_produce_nothing() {
        let records = vec![
            row("dark academia", "broad", 10.0, 40.0, 2),
            row("dark academia", "exact", 10.0, 40.0, 2),
        ];
        assert!(recommend(&records).is_empty());
    }
}
