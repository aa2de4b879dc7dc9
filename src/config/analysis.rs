//! Thresholds that drive the analysis rules
//!
//! Every number the engine compares against lives here so the whole rule set
//! can be exercised under different thresholds without code edits.

use serde::{Deserialize, Serialize};

use crate::error::{common, Result};
use crate::model::DataConfidence;

pub const DEFAULT_TARGET_ACOS: f64 = 0.35;
pub const DEFAULT_MIN_BID: f64 = 0.20;
pub const DEFAULT_LOW_CTR_THRESHOLD: f64 = 0.002;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Profitability target for ACoTR; drives Lower Bid and Boost
    pub target_acos: f64,
    /// Floor for every suggested bid
    pub min_bid: f64,
    pub low_ctr_threshold: f64,
    /// CTR is only judged above this many impressions
    pub low_ctr_min_impressions: u64,
    /// Clicks without an order above which a keyword is paused
    pub pause_click_threshold: u64,
    /// Clicks without an order above which a keyword becomes a negative
    pub negative_keyword_min_clicks: u64,
    /// Medium confidence floor
    pub low_conf_clicks: u64,
    pub low_conf_orders: u64,
    /// High confidence floor
    pub med_conf_clicks: u64,
    pub med_conf_orders: u64,
    /// Boost when ACoTR is below target times this factor
    pub boost_target_factor: f64,
    /// No keyword is boosted at or above this ACoTR
    pub break_even_acos: f64,
    pub boost_bid_multiplier: f64,
    /// Spend that maps to a full priority point range of 10
    pub priority_spend_unit: f64,
    /// Share of a bid increase expected to turn into extra clicks
    pub click_elasticity: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            target_acos: DEFAULT_TARGET_ACOS,
            min_bid: DEFAULT_MIN_BID,
            low_ctr_threshold: DEFAULT_LOW_CTR_THRESHOLD,
            low_ctr_min_impressions: 100,
            pause_click_threshold: 5,
            negative_keyword_min_clicks: 5,
            low_conf_clicks: 20,
            low_conf_orders: 1,
            med_conf_clicks: 100,
            med_conf_orders: 3,
            boost_target_factor: 0.7,
            break_even_acos: 0.7,
            boost_bid_multiplier: 1.2,
            priority_spend_unit: 5.0,
            click_elasticity: 1.0,
        }
    }
}

impl AnalysisConfig {
    /// Classify a click/order volume into a confidence tier
    pub fn confidence_for(&self, clicks: u64, orders: u64) -> DataConfidence {
        if clicks >= self.med_conf_clicks && orders >= self.med_conf_orders {
            DataConfidence::High
        } else if clicks >= self.low_conf_clicks && orders >= self.low_conf_orders {
            DataConfidence::Medium
        } else {
            DataConfidence::Low
        }
    }

    /// Apply the bid floor
    pub fn floor_bid(&self, bid: f64) -> f64 {
        bid.max(self.min_bid)
    }

    /// Check every threshold for a usable value.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first field out of range.
    pub fn validate(&self) -> Result<()> {
        check_range("target_acos", self.target_acos, 0.0, 10.0, "in (0, 10]")?;
        check_finite_non_negative("min_bid", self.min_bid)?;
        check_range(
            "low_ctr_threshold",
            self.low_ctr_threshold,
            0.0,
            1.0,
            "in (0, 1]",
        )?;
        check_range(
            "boost_target_factor",
            self.boost_target_factor,
            0.0,
            1.0,
            "in (0, 1]",
        )?;
        check_range("break_even_acos", self.break_even_acos, 0.0, 10.0, "in (0, 10]")?;
        check_range(
            "boost_bid_multiplier",
            self.boost_bid_multiplier,
            1.0,
            10.0,
            "in (1, 10]",
        )?;
        check_range(
            "priority_spend_unit",
            self.priority_spend_unit,
            0.0,
            f64::MAX,
            "greater than 0",
        )?;
        check_finite_non_negative("click_elasticity", self.click_elasticity)?;

        if self.med_conf_clicks < self.low_conf_clicks || self.med_conf_orders < self.low_conf_orders
        {
            return Err(common::invalid_threshold(
                "med_conf_clicks",
                self.med_conf_clicks as f64,
                "at least the medium tier thresholds",
            ));
        }

        Ok(())
    }
}

fn check_range(field: &str, value: f64, lower_exclusive: f64, upper: f64, expected: &str) -> Result<()> {
    if value.is_finite() && value > lower_exclusive && value <= upper {
        Ok(())
    } else {
        Err(common::invalid_threshold(field, value, expected))
    }
}

fn check_finite_non_negative(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(common::invalid_threshold(field, value, "a non-negative number"))
    }
}
