//! Testing utilities and fixtures
//!
//! Builders for keyword rows and a small sample export shared by unit tests,
//! integration suites and benchmarks.

use crate::model::AdRecord;

/// Builder for creating test keyword rows
///
/// Everything not set explicitly is zero or absent.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: AdRecord,
}

impl RecordBuilder {
    pub fn new(keyword: &str) -> Self {
        Self {
            record: AdRecord {
                keyword: keyword.to_string(),
                ..Default::default()
            },
        }
    }

    pub fn campaign(mut self, name: &str) -> Self {
        self.record.campaign_name = name.to_string();
        self
    }

    pub fn ad_group(mut self, name: &str) -> Self {
        self.record.ad_group = name.to_string();
        self
    }

    pub fn match_type(mut self, match_type: &str) -> Self {
        self.record.match_type = match_type.to_string();
        self
    }

    pub fn impressions(mut self, impressions: u64) -> Self {
        self.record.impressions = impressions;
        self
    }

    pub fn clicks(mut self, clicks: u64) -> Self {
        self.record.clicks = clicks;
        self
    }

    pub fn orders(mut self, orders: u64) -> Self {
        self.record.orders = orders;
        self
    }

    pub fn spend(mut self, spend: f64) -> Self {
        self.record.spend = spend;
        self
    }

    pub fn sales(mut self, sales: f64) -> Self {
        self.record.sales = sales;
        self
    }

    pub fn bid(mut self, bid: f64) -> Self {
        self.record.keyword_bid = Some(bid);
        self
    }

    pub fn royalties(mut self, royalties: f64) -> Self {
        self.record.estimated_kenp_royalties = Some(royalties);
        self
    }

    pub fn kenp_read(mut self, pages: u64) -> Self {
        self.record.kenp_read = Some(pages);
        self
    }

    pub fn ctr(mut self, ctr: f64) -> Self {
        self.record.ctr = Some(ctr);
        self
    }

    pub fn acos(mut self, acos: f64) -> Self {
        self.record.acos = Some(acos);
        self
    }

    pub fn build(self) -> AdRecord {
        self.record
    }
}

/// A synthetic portfolio of `count` rows spread over a handful of ad groups
///
/// Deterministic, so repeated calls produce identical exports.
pub fn synthetic_portfolio(count: usize) -> Vec<AdRecord> {
    const MATCH_TYPES: [&str; 3] = ["broad", "phrase", "exact"];

    (0..count)
        .map(|i| {
            let clicks = (i * 7 % 150) as u64;
            let orders = if i % 4 == 0 { 0 } else { (i % 6) as u64 };
            let spend = clicks as f64 * (0.25 + (i % 9) as f64 * 0.1);
            let sales = orders as f64 * 4.99;

            let mut builder = RecordBuilder::new(&format!("keyword {}", i / 3))
                .campaign(&format!("Campaign {}", i % 5))
                .ad_group(&format!("Group {}", i % 12))
                .match_type(MATCH_TYPES[i % 3])
                .impressions(clicks * (40 + (i % 500) as u64))
                .clicks(clicks)
                .orders(orders)
                .spend(spend)
                .sales(sales);
            if i % 10 == 0 {
                builder = builder.royalties(spend * 0.3).kenp_read((i * 11) as u64);
            }
            if i % 3 == 0 {
                builder = builder.bid(0.3 + (i % 7) as f64 * 0.1);
            }
            builder.build()
        })
        .collect()
}

/// A small export in the column layout produced by the ad console
pub const SAMPLE_EXPORT_CSV: &str = "\
Campaign Name,Ad Group Name,Keyword Text,Match Type,Impressions,Clicks,CTR,Spend,14 Day Total Sales,14 Day Total Orders (#),ACOS,Keyword Bid,Estimated KENP Royalties
Fantasy SP,Epic,dragon rider,exact,5000,50,1.00%,$10.00,$15.00,2,66.67%,$0.50,$1.00
Fantasy SP,Epic,wizard academy,broad,4000,40,1.00%,$10.00,$20.00,1,50.00%,$0.45,
Fantasy SP,Epic,free fantasy books,broad,3000,30,1.00%,$12.50,$0.00,0,,$0.40,
Romance SP,Regency,regency romance,phrase,4000,60,1.50%,$50.00,$30.00,2,166.67%,$1.00,$5.00
Romance SP,Regency,kindle unlimited romance,broad,2500,15,0.60%,$7.00,$0.00,0,,$0.35,$2.50
Auto,,,,800,4,0.50%,$1.20,$0.00,0,,,
";
