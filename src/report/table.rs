//! CSV export of the analyzed keyword table

use csv::Writer;

use crate::error::{AdsightError, ErrorCode, ErrorExt, Result};
use crate::model::AnalysisResult;

const HEADERS: [&str; 19] = [
    "Keyword",
    "Campaign Name",
    "Ad Group Name",
    "Match Type",
    "Impressions",
    "Clicks",
    "Orders",
    "Spend",
    "Sales",
    "Estimated KENP Royalties",
    "ACoTR",
    "Current Bid",
    "New Bid",
    "Profit Optimized Bid",
    "Priority",
    "Confidence",
    "Action",
    "Color",
    "Recommendation",
];

fn cell(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.4}")).unwrap_or_default()
}

/// One row per analyzed keyword, in priority order
pub fn render_csv(result: &AnalysisResult) -> Result<String> {
    let mut writer = Writer::from_writer(Vec::new());
    writer
        .write_record(HEADERS)
        .to_output_error("Failed to write CSV header")?;

    for k in &result.full_analysis.data {
        let r = &k.record;
        let action = serde_json::to_value(k.action)?;
        let color = serde_json::to_value(k.color)?;
        writer
            .write_record([
                r.keyword.clone(),
                r.campaign_name.clone(),
                r.ad_group.clone(),
                r.match_type.clone(),
                r.impressions.to_string(),
                r.clicks.to_string(),
                r.orders.to_string(),
                format!("{:.2}", r.spend()),
                format!("{:.2}", r.sales()),
                format!("{:.2}", r.royalties()),
                cell(k.effective_acos),
                cell(k.current_bid),
                cell(k.new_bid),
                cell(k.profit_optimized_bid),
                k.priority_score.to_string(),
                k.data_confidence.to_string(),
                action.as_str().unwrap_or_default().to_string(),
                color.as_str().unwrap_or_default().to_string(),
                k.recommendation.clone(),
            ])
            .to_output_error(format!("Failed to write CSV row for '{}'", r.keyword))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AdsightError::output_with_code(ErrorCode::OUTPUT_IO_ERROR, e.to_string(), None))?;
    String::from_utf8(bytes).to_output_error("CSV output was not valid UTF-8")
}
