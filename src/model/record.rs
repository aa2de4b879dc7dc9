//! Normalized keyword performance rows as handed over by the export parser

use serde::{Deserialize, Serialize};

/// Divide two numbers, yielding `None` when the result would not be a finite value
pub fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 || !denominator.is_finite() || !numerator.is_finite() {
        return None;
    }
    let value = numerator / denominator;
    value.is_finite().then_some(value)
}

/// Clamp malformed money values to zero so one bad cell cannot poison sums
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// One keyword x match type x campaign row of an advertising export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdRecord {
    #[serde(default)]
    pub campaign_name: String,
    #[serde(default)]
    pub ad_group: String,
    pub keyword: String,
    #[serde(default)]
    pub match_type: String,
    #[serde(default)]
    pub impressions: u64,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub orders: u64,
    #[serde(default)]
    pub spend: f64,
    #[serde(default)]
    pub sales: f64,
    /// Click-through rate as exported, used only when impressions are missing
    #[serde(default)]
    pub ctr: Option<f64>,
    /// ACOS as exported; recomputed from spend and sales whenever possible
    #[serde(default)]
    pub acos: Option<f64>,
    #[serde(default)]
    pub keyword_bid: Option<f64>,
    #[serde(default)]
    pub suggested_bid_low: Option<f64>,
    #[serde(default)]
    pub suggested_bid_median: Option<f64>,
    #[serde(default)]
    pub suggested_bid_high: Option<f64>,
    #[serde(default)]
    pub kenp_read: Option<u64>,
    #[serde(default)]
    pub estimated_kenp_royalties: Option<f64>,
}

impl AdRecord {
    /// Rows without keyword text are auto or product targeting and are not analyzed
    pub fn has_keyword(&self) -> bool {
        !self.keyword.trim().is_empty()
    }

    pub fn spend(&self) -> f64 {
        finite_or_zero(self.spend)
    }

    pub fn sales(&self) -> f64 {
        finite_or_zero(self.sales)
    }

    /// Page-read royalties, zero when not exported
    pub fn royalties(&self) -> f64 {
        self.estimated_kenp_royalties.map(finite_or_zero).unwrap_or(0.0)
    }

    pub fn has_royalties(&self) -> bool {
        self.royalties() > 0.0
    }

    /// Sales plus page-read royalties
    pub fn total_revenue(&self) -> f64 {
        self.sales() + self.royalties()
    }

    pub fn is_zero_order_spend(&self) -> bool {
        self.spend() > 0.0 && self.orders == 0
    }

    pub fn ctr(&self) -> Option<f64> {
        if self.impressions > 0 {
            ratio(self.clicks as f64, self.impressions as f64)
        } else {
            self.ctr.filter(|c| c.is_finite() && *c >= 0.0)
        }
    }

    pub fn acos(&self) -> Option<f64> {
        ratio(self.spend(), self.sales())
    }

    pub fn cvr(&self) -> Option<f64> {
        ratio(self.orders as f64, self.clicks as f64)
    }

    /// Advertising cost of total revenue (ACoTR)
    pub fn effective_acos(&self) -> Option<f64> {
        ratio(self.spend(), self.total_revenue())
    }

    /// Exported bid, or average cost per click when the bid was not exported
    pub fn current_bid(&self) -> Option<f64> {
        match self.keyword_bid {
            Some(bid) if bid.is_finite() && bid > 0.0 => Some(bid),
            _ => ratio(self.spend(), self.clicks as f64),
        }
    }

    pub fn revenue_per_order(&self) -> Option<f64> {
        ratio(self.total_revenue(), self.orders as f64)
    }
}
