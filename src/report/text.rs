//! Plain-text report for terminals

use chrono::{DateTime, Utc};

use crate::config::AnalysisConfig;
use crate::model::{AnalysisResult, AnalyzedKeyword, Color};

fn marker(color: Color) -> &'static str {
    match color {
        Color::Green => "✓",
        Color::Yellow => "⚠",
        Color::Red => "✗",
    }
}

/// One ACoTR line, marked against the target and the break-even ceiling
pub fn format_acotr(name: &str, value: Option<f64>, config: &AnalysisConfig) -> String {
    match value {
        Some(v) if v <= config.target_acos => format!("  ✓ {name}: {:.1}%", v * 100.0),
        Some(v) if v <= config.break_even_acos => format!("  ⚠ {name}: {:.1}%", v * 100.0),
        Some(v) => format!("  ✗ {name}: {:.1}%", v * 100.0),
        None => format!("  - {name}: N/A"),
    }
}

fn money(value: f64) -> String {
    format!("${value:.2}")
}

fn bid(value: Option<f64>) -> String {
    value.map(money).unwrap_or_else(|| "-".to_string())
}

fn percent(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}%", v * 100.0))
        .unwrap_or_else(|| "N/A".to_string())
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

fn keyword_line(k: &AnalyzedKeyword) -> String {
    format!(
        "  {} {:<28} {:>3} {:>9} {:>8} {:>7} -> {:<7} {}",
        marker(k.color),
        truncate(k.keyword().trim(), 28),
        k.priority_score,
        money(k.record.spend()),
        percent(k.effective_acos),
        bid(k.current_bid),
        bid(k.new_bid),
        k.recommendation
    )
}

/// Human-readable report; at most `top` keywords are listed
pub fn render_text(
    result: &AnalysisResult,
    config: &AnalysisConfig,
    top: usize,
    generated_at: DateTime<Utc>,
) -> String {
    let pain = &result.pain_points;
    let full = &result.full_analysis;
    let summary = &full.summary;

    let mut lines = vec![
        "📊 Keyword Analysis Report".to_string(),
        format!("   Generated: {}", generated_at.format("%Y-%m-%d %H:%M UTC")),
        format!("   Keywords analyzed: {}", summary.analyzed_keywords_count),
        String::new(),
        "🔥 Pain Points:".to_string(),
        format!(
            "   - {} keywords spent {} with no sales",
            pain.keywords_with_no_sales,
            money(pain.wasted_spend)
        ),
        format!("   - {} keywords with low CTR", pain.keywords_with_low_ctr),
    ];

    if let Some(free) = &result.free_recommendation {
        lines.push(String::new());
        lines.push("💡 Quick Win:".to_string());
        lines.push(format!("   {}", free.message));
    }

    let totals = &summary.totals;
    let average = (totals.total_spend > 0.0).then_some(summary.average_acos);
    let roas = summary
        .effective_roas
        .map(|r| format!("{r:.2}x"))
        .unwrap_or_else(|| "N/A".to_string());
    lines.extend([
        String::new(),
        "Portfolio:".to_string(),
        format!("   Spend: {}", money(totals.total_spend)),
        format!(
            "   Revenue: {} ({} sales + {} royalties)",
            money(totals.total_sales + totals.total_royalties),
            money(totals.total_sales),
            money(totals.total_royalties)
        ),
        format_acotr("Average ACoTR", average, config),
        format!("   ROAS: {roas}"),
        format!("   Potential savings: {}", money(summary.potential_savings)),
        format!("   Estimated gain: {}", money(summary.estimated_gain)),
        format!(
            "   Net optimization potential: {}",
            money(summary.net_optimization_potential)
        ),
    ]);

    if !full.data.is_empty() {
        let shown = full.data.len().min(top);
        lines.push(String::new());
        lines.push(format!("Top {} of {} keywords by priority:", shown, full.data.len()));
        lines.push(format!(
            "    {:<28} {:>3} {:>9} {:>8} {:>7}    {:<7} Recommendation",
            "Keyword", "Pri", "Spend", "ACoTR", "Bid", "New"
        ));
        lines.extend(full.data.iter().take(top).map(keyword_line));
    }

    if !full.negative_keyword_suggestions.is_empty() {
        lines.push(String::new());
        lines.push("🚫 Negative keyword suggestions:".to_string());
        lines.extend(
            full.negative_keyword_suggestions
                .iter()
                .map(|keyword| format!("   - {keyword}")),
        );
    }

    if !full.match_type_recommendations.is_empty() {
        lines.push(String::new());
        lines.push("🎯 Match type changes:".to_string());
        lines.extend(full.match_type_recommendations.iter().map(|rec| {
            format!(
                "   - {}: {} -> {} ({})",
                rec.keyword, rec.current_match_type, rec.recommended_match_type, rec.reason
            )
        }));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
