//! Ordered decision table for per-keyword recommendations
//!
//! Rules are evaluated top to bottom and the first whose predicate holds
//! decides the action. The last rule always applies.

use crate::config::AnalysisConfig;
use crate::model::{DataConfidence, KeywordAction};

/// Everything a rule may look at for one keyword
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordSignals {
    pub impressions: u64,
    pub clicks: u64,
    pub orders: u64,
    pub ctr: Option<f64>,
    pub effective_acos: Option<f64>,
    pub relative_cvr: Option<f64>,
    pub confidence: DataConfidence,
    pub current_bid: Option<f64>,
}

/// Outcome of the decision table
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub action: KeywordAction,
    pub recommendation: String,
    pub new_bid: Option<f64>,
}

pub struct Rule {
    pub action: KeywordAction,
    pub applies: fn(&KeywordSignals, &AnalysisConfig) -> bool,
    pub advise: fn(&KeywordSignals, &AnalysisConfig) -> Verdict,
}

pub const RULES: &[Rule] = &[
    Rule {
        action: KeywordAction::Pause,
        applies: is_bleeding_clicks,
        advise: advise_pause,
    },
    Rule {
        action: KeywordAction::LowCtr,
        applies: is_low_ctr,
        advise: advise_low_ctr,
    },
    Rule {
        action: KeywordAction::Boost,
        applies: is_proven_converter,
        advise: advise_boost,
    },
    Rule {
        action: KeywordAction::LowerBid,
        applies: is_over_target,
        advise: advise_lower_bid,
    },
    Rule {
        action: KeywordAction::Maintain,
        applies: always,
        advise: advise_maintain,
    },
];

pub fn evaluate(signals: &KeywordSignals, config: &AnalysisConfig) -> Verdict {
    RULES
        .iter()
        .find(|rule| (rule.applies)(signals, config))
        .map(|rule| (rule.advise)(signals, config))
        .unwrap_or_else(|| advise_maintain(signals, config))
}

/// Sum of the severity bonuses of every rule whose condition holds, winner or not
pub fn severity_bonus(signals: &KeywordSignals, config: &AnalysisConfig) -> u8 {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(signals, config))
        .fold(0u8, |acc, rule| acc.saturating_add(rule.action.severity_bonus()))
}

/// Look up a rule by the action it produces
pub fn rule_for(action: KeywordAction) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.action == action)
}

fn always(_: &KeywordSignals, _: &AnalysisConfig) -> bool {
    true
}

fn is_bleeding_clicks(s: &KeywordSignals, config: &AnalysisConfig) -> bool {
    s.orders == 0 && s.clicks > config.pause_click_threshold
}

fn is_low_ctr(s: &KeywordSignals, config: &AnalysisConfig) -> bool {
    s.impressions > config.low_ctr_min_impressions
        && s.ctr.is_some_and(|ctr| ctr < config.low_ctr_threshold)
}

fn is_proven_converter(s: &KeywordSignals, config: &AnalysisConfig) -> bool {
    let Some(acotr) = s.effective_acos else {
        return false;
    };
    let beats_target = acotr < config.target_acos * config.boost_target_factor;
    let beats_peers = s.relative_cvr.is_some_and(|cvr| cvr > 1.0);

    s.orders > 0
        && s.confidence >= DataConfidence::Medium
        && acotr < config.break_even_acos
        && (beats_target || beats_peers)
}

fn is_over_target(s: &KeywordSignals, config: &AnalysisConfig) -> bool {
    s.orders > 0 && s.effective_acos.is_some_and(|acotr| acotr > config.target_acos)
}

fn advise_pause(s: &KeywordSignals, _config: &AnalysisConfig) -> Verdict {
    Verdict {
        action: KeywordAction::Pause,
        recommendation: format!("Pause - {} clicks with no orders", s.clicks),
        new_bid: None,
    }
}

fn advise_low_ctr(s: &KeywordSignals, _config: &AnalysisConfig) -> Verdict {
    Verdict {
        action: KeywordAction::LowCtr,
        recommendation: format!(
            "Low CTR - {:.2}% over {} impressions, review keyword relevance",
            s.ctr.unwrap_or_default() * 100.0,
            s.impressions
        ),
        new_bid: None,
    }
}

fn advise_boost(s: &KeywordSignals, config: &AnalysisConfig) -> Verdict {
    Verdict {
        action: KeywordAction::Boost,
        recommendation: format!(
            "Boost - {:.0}% ACoTR with {} confidence, raise bid {:.0}%",
            s.effective_acos.unwrap_or_default() * 100.0,
            s.confidence,
            (config.boost_bid_multiplier - 1.0) * 100.0
        ),
        new_bid: s
            .current_bid
            .map(|bid| config.floor_bid(bid * config.boost_bid_multiplier)),
    }
}

fn advise_lower_bid(s: &KeywordSignals, config: &AnalysisConfig) -> Verdict {
    let acotr = s.effective_acos.unwrap_or_default();
    let new_bid = s
        .current_bid
        .filter(|_| acotr > 0.0)
        .map(|bid| config.floor_bid(bid * config.target_acos / acotr));

    Verdict {
        action: KeywordAction::LowerBid,
        recommendation: format!(
            "Lower Bid - {:.0}% ACoTR is above the {:.0}% target",
            acotr * 100.0,
            config.target_acos * 100.0
        ),
        new_bid,
    }
}

fn advise_maintain(s: &KeywordSignals, _config: &AnalysisConfig) -> Verdict {
    let recommendation = if s.confidence == DataConfidence::Low {
        "Maintain - not enough data to act yet"
    } else {
        "Maintain - performing within target"
    };
    Verdict {
        action: KeywordAction::Maintain,
        recommendation: recommendation.to_string(),
        new_bid: None,
    }
}
