//! Reading keyword rows out of advertising console CSV exports

pub mod columns;
pub mod values;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{common, AdsightError, ErrorCode, Result};
use crate::model::AdRecord;
pub use columns::{Column, HeaderMap};

/// A row that could not be turned into a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowIssue {
    /// Line number in the file, header included
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedExport {
    pub records: Vec<AdRecord>,
    pub issues: Vec<RowIssue>,
}

impl ParsedExport {
    /// Rows the engine will actually analyze
    pub fn keyword_count(&self) -> usize {
        self.records.iter().filter(|r| r.has_keyword()).count()
    }
}

pub fn read_export(path: &Path) -> Result<ParsedExport> {
    let file = File::open(path).map_err(|e| AdsightError::from(e).with_path(path))?;
    let parsed = parse_export(file).map_err(|e| e.with_path(path))?;
    info!(
        path = %path.display(),
        records = parsed.records.len(),
        skipped = parsed.issues.len(),
        "Read export"
    );
    Ok(parsed)
}

/// Parse an export from any reader
///
/// Fails only on unreadable input or a header missing a required column;
/// malformed rows are collected as [`RowIssue`]s.
pub fn parse_export<R: Read>(reader: R) -> Result<ParsedExport> {
    let mut rows = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rows.headers()?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(AdsightError::input_with_code(
            ErrorCode::INPUT_EMPTY,
            "Empty or invalid file: no header row",
            None,
        ));
    }

    let header_map = HeaderMap::from_headers(&headers);
    if let Some(column) = header_map.missing_required() {
        return Err(common::missing_column(column.label()));
    }
    debug!(columns = header_map.len(), "Resolved export columns");

    let mut parsed = ParsedExport::default();
    for result in rows.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                warn!(line, error = %e, "Skipping unreadable row");
                parsed.issues.push(RowIssue {
                    line,
                    reason: e.to_string(),
                });
                continue;
            }
        };
        if row.iter().all(|cell| cell.is_empty()) {
            continue;
        }

        let line = row.position().map(|p| p.line()).unwrap_or_default();
        match parse_row(&header_map, &row) {
            Ok(record) => parsed.records.push(record),
            Err(reason) => {
                warn!(line, %reason, "Skipping malformed row");
                parsed.issues.push(RowIssue { line, reason });
            }
        }
    }

    Ok(parsed)
}

fn parse_row(map: &HeaderMap, row: &StringRecord) -> std::result::Result<AdRecord, String> {
    let text = |column: Column| map.get(row, column).unwrap_or_default().to_string();
    let number = |column: Column| -> std::result::Result<Option<f64>, String> {
        map.get(row, column)
            .map(values::parse_number)
            .transpose()
            .map(Option::flatten)
            .map_err(|e| format!("{}: {}", column.label(), e))
    };
    let count = |column: Column| -> std::result::Result<Option<u64>, String> {
        map.get(row, column)
            .map(values::parse_count)
            .transpose()
            .map(Option::flatten)
            .map_err(|e| format!("{}: {}", column.label(), e))
    };

    Ok(AdRecord {
        campaign_name: text(Column::CampaignName),
        ad_group: text(Column::AdGroup),
        keyword: text(Column::Keyword),
        match_type: text(Column::MatchType),
        impressions: count(Column::Impressions)?.unwrap_or(0),
        clicks: count(Column::Clicks)?.unwrap_or(0),
        orders: count(Column::Orders)?.unwrap_or(0),
        spend: number(Column::Spend)?.unwrap_or(0.0),
        sales: number(Column::Sales)?.unwrap_or(0.0),
        ctr: number(Column::Ctr)?,
        acos: number(Column::Acos)?,
        keyword_bid: number(Column::KeywordBid)?,
        suggested_bid_low: number(Column::SuggestedBidLow)?,
        suggested_bid_median: number(Column::SuggestedBidMedian)?,
        suggested_bid_high: number(Column::SuggestedBidHigh)?,
        kenp_read: count(Column::KenpRead)?,
        estimated_kenp_royalties: number(Column::KenpRoyalties)?,
    })
}
