//! Ad-group peer baselines and relative performance

use std::collections::HashMap;

use crate::model::{ratio, AdRecord};

/// Mean metrics of one ad group, each over the members where the metric is defined
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PeerBaseline {
    pub mean_acos: Option<f64>,
    pub mean_ctr: Option<f64>,
    pub mean_cvr: Option<f64>,
    pub members: usize,
}

/// A keyword's performance relative to its peer baseline
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RelativeMetrics {
    /// (acos - mean) / mean; positive means worse than peers
    pub acos: Option<f64>,
    /// ctr / mean; 1.0 is average
    pub ctr: Option<f64>,
    /// cvr / mean; 1.0 is average
    pub cvr: Option<f64>,
}

#[derive(Default)]
struct Accumulator {
    acos: MeanAccumulator,
    ctr: MeanAccumulator,
    cvr: MeanAccumulator,
    members: usize,
}

#[derive(Default)]
struct MeanAccumulator {
    sum: f64,
    count: usize,
}

impl MeanAccumulator {
    fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    fn mean(&self) -> Option<f64> {
        ratio(self.sum, self.count as f64)
    }
}

/// Baselines for every ad group in one analysis run
#[derive(Debug, Default)]
pub struct PeerGroups {
    baselines: HashMap<String, PeerBaseline>,
}

impl PeerGroups {
    pub fn by_ad_group(records: &[AdRecord]) -> Self {
        let mut groups: HashMap<String, Accumulator> = HashMap::new();

        for record in records {
            let acc = groups.entry(group_key(record)).or_default();
            acc.acos.push(record.acos());
            acc.ctr.push(record.ctr());
            acc.cvr.push(record.cvr());
            acc.members += 1;
        }

        let baselines = groups
            .into_iter()
            .map(|(key, acc)| {
                let baseline = PeerBaseline {
                    mean_acos: acc.acos.mean(),
                    mean_ctr: acc.ctr.mean(),
                    mean_cvr: acc.cvr.mean(),
                    members: acc.members,
                };
                (key, baseline)
            })
            .collect();

        Self { baselines }
    }

    pub fn baseline_for(&self, record: &AdRecord) -> PeerBaseline {
        self.baselines
            .get(&group_key(record))
            .copied()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.baselines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.baselines.is_empty()
    }
}

fn group_key(record: &AdRecord) -> String {
    record.ad_group.trim().to_string()
}

pub fn relative_metrics(record: &AdRecord, baseline: &PeerBaseline) -> RelativeMetrics {
    RelativeMetrics {
        acos: record
            .acos()
            .zip(baseline.mean_acos)
            .and_then(|(acos, mean)| ratio(acos - mean, mean)),
        ctr: record
            .ctr()
            .zip(baseline.mean_ctr)
            .and_then(|(ctr, mean)| ratio(ctr, mean)),
        cvr: record
            .cvr()
            .zip(baseline.mean_cvr)
            .and_then(|(cvr, mean)| ratio(cvr, mean)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordBuilder;

    #[test]
    fn test_baseline_averages_defined_members_only() {
        let records = vec![
            RecordBuilder::new("a").ad_group("g1").clicks(10).orders(1).spend(5.0).sales(10.0).build(),
            RecordBuilder::new("b").ad_group("g1").clicks(10).orders(0).spend(5.0).sales(0.0).build(),
            RecordBuilder::new("c").ad_group("g2").clicks(0).spend(0.0).build(),
        ];

        let peers = PeerGroups::by_ad_group(&records);
        assert_eq!(peers.len(), 2);

        let g1 = peers.baseline_for(&records[0]);
        assert_eq!(g1.members, 2);
        assert_eq!(g1.mean_acos, Some(0.5));
        assert_eq!(g1.mean_cvr, Some(0.05));

        let g2 = peers.baseline_for(&records[2]);
        assert_eq!(g2.mean_acos, None);
        assert_eq!(g2.mean_cvr, None);
    }

    #[test]
    fn test_relative_metrics_against_peers() {
        let records = vec![
            RecordBuilder::new("good").ad_group("g").impressions(1000).clicks(20).orders(2).spend(5.0).sales(20.0).build(),
            RecordBuilder::new("bad").ad_group("g").impressions(1000).clicks(10).orders(1).spend(15.0).sales(20.0).build(),
        ];
        let peers = PeerGroups::by_ad_group(&records);

        let good = relative_metrics(&records[0], &peers.baseline_for(&records[0]));
        let bad = relative_metrics(&records[1], &peers.baseline_for(&records[1]));

        assert!(good.acos.unwrap() < 0.0);
        assert!(bad.acos.unwrap() > 0.0);
        assert!(good.ctr.unwrap() > 1.0);
        assert!(bad.ctr.unwrap() < 1.0);
        assert_eq!(good.cvr, Some(1.0));
    }

    #[test]
    fn test_relative_metrics_null_without_peer_sales() {
        let record = RecordBuilder::new("k").clicks(10).spend(3.0).build();
        let peers = PeerGroups::by_ad_group(std::slice::from_ref(&record));
        let relative = relative_metrics(&record, &peers.baseline_for(&record));
        assert_eq!(relative.acos, None);
        assert_eq!(relative.cvr, None);
    }

    #[test]
    fn test_zero_mean_does_not_divide() {
        let records = vec![
            RecordBuilder::new("free").ad_group("g").clicks(5).orders(1).spend(0.0).sales(10.0).build(),
        ];
        let peers = PeerGroups::by_ad_group(&records);
        let relative = relative_metrics(&records[0], &peers.baseline_for(&records[0]));
        assert_eq!(relative.acos, None);
    }
}
