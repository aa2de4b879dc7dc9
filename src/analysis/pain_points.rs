use crate::config::AnalysisConfig;
use crate::model::{AdRecord, PainPoints};

/// Headline waste statistics over keyword rows
pub fn compute(records: &[AdRecord], config: &AnalysisConfig) -> PainPoints {
    records
        .iter()
        .fold(PainPoints::default(), |mut acc, record| {
            if record.is_zero_order_spend() {
                acc.keywords_with_no_sales += 1;
                acc.wasted_spend += record.spend();
            }
            if is_low_ctr(record, config) {
                acc.keywords_with_low_ctr += 1;
            }
            acc
        })
}

fn is_low_ctr(record: &AdRecord, config: &AnalysisConfig) -> bool {
    record.impressions > config.low_ctr_min_impressions
        && record
            .ctr()
            .is_some_and(|ctr| ctr < config.low_ctr_threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordBuilder;

    #[test]
    fn test_empty_input() {
        let pain = compute(&[], &AnalysisConfig::default());
        assert_eq!(pain, PainPoints::default());
    }

    #[test]
    fn test_counts_and_sums() {
        let records = vec![
            RecordBuilder::new("a").clicks(3).spend(4.25).build(),
            RecordBuilder::new("b").clicks(9).spend(5.75).build(),
            RecordBuilder::new("c").clicks(9).orders(1).spend(8.0).sales(20.0).build(),
            RecordBuilder::new("d").impressions(5000).clicks(2).orders(1).spend(1.0).sales(9.0).build(),
            RecordBuilder::new("e").impressions(90).clicks(0).build(),
        ];
        let pain = compute(&records, &AnalysisConfig::default());

        assert_eq!(pain.keywords_with_no_sales, 2);
        assert_eq!(pain.wasted_spend, 10.0);
        assert_eq!(pain.keywords_with_low_ctr, 1);
    }

    #[test]
    fn test_zero_spend_is_not_waste() {
        let records = vec![RecordBuilder::new("idle").impressions(10).build()];
        let pain = compute(&records, &AnalysisConfig::default());
        assert_eq!(pain.keywords_with_no_sales, 0);
        assert_eq!(pain.wasted_spend, 0.0);
    }
}
