//! Header recognition for advertising exports

use std::collections::HashMap;

use csv::StringRecord;

/// Every column the parser knows how to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    CampaignName,
    AdGroup,
    Keyword,
    MatchType,
    Impressions,
    Clicks,
    Ctr,
    Spend,
    Sales,
    Orders,
    Acos,
    KeywordBid,
    SuggestedBidLow,
    SuggestedBidMedian,
    SuggestedBidHigh,
    KenpRead,
    KenpRoyalties,
}

impl Column {
    pub const ALL: [Column; 17] = [
        Column::CampaignName,
        Column::AdGroup,
        Column::Keyword,
        Column::MatchType,
        Column::Impressions,
        Column::Clicks,
        Column::Ctr,
        Column::Spend,
        Column::Sales,
        Column::Orders,
        Column::Acos,
        Column::KeywordBid,
        Column::SuggestedBidLow,
        Column::SuggestedBidMedian,
        Column::SuggestedBidHigh,
        Column::KenpRead,
        Column::KenpRoyalties,
    ];

    pub const REQUIRED: [Column; 4] = [
        Column::Keyword,
        Column::Impressions,
        Column::Clicks,
        Column::Spend,
    ];

    pub fn label(&self) -> &'static str {
        self.aliases()[0]
    }

    /// Accepted header spellings, canonical one first
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Column::CampaignName => &["Campaign Name", "Campaign"],
            Column::AdGroup => &["Ad Group Name", "Ad Group"],
            Column::Keyword => &["Keyword", "Keyword Text", "Targeting", "Customer Search Term"],
            Column::MatchType => &["Match Type"],
            Column::Impressions => &["Impressions", "Impr"],
            Column::Clicks => &["Clicks"],
            Column::Ctr => &["CTR", "Click-Thru Rate (CTR)", "Click Through Rate"],
            Column::Spend => &["Spend", "Cost", "Total Spend"],
            Column::Sales => &["Sales", "14 Day Total Sales", "7 Day Total Sales"],
            Column::Orders => &["Orders", "14 Day Total Orders (#)", "7 Day Total Orders (#)"],
            Column::Acos => &[
                "ACOS",
                "Total Advertising Cost of Sales (ACOS)",
                "Total Advertising Cost of Sales (ACoS)",
            ],
            Column::KeywordBid => &["Keyword Bid", "Bid", "Max Bid"],
            Column::SuggestedBidLow => &["Suggested Bid (low)", "Suggested Bid Low"],
            Column::SuggestedBidMedian => &["Suggested Bid (median)", "Suggested Bid Median"],
            Column::SuggestedBidHigh => &["Suggested Bid (high)", "Suggested Bid High"],
            Column::KenpRead => &["KENP Read", "Kindle Edition Normalized Pages (KENP) Read"],
            Column::KenpRoyalties => &["Estimated KENP Royalties", "KENP Royalties"],
        }
    }
}

/// Lowercase and keep only letters and digits, so "Click-Thru Rate (CTR)" == "clickthrurate ctr"
pub fn normalize_header(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Position of each recognized column in a header row
#[derive(Debug, Default)]
pub struct HeaderMap {
    positions: HashMap<Column, usize>,
}

impl HeaderMap {
    pub fn from_headers(headers: &StringRecord) -> Self {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
        let positions = Column::ALL
            .iter()
            .filter_map(|column| {
                column
                    .aliases()
                    .iter()
                    .map(|alias| normalize_header(alias))
                    .find_map(|alias| normalized.iter().position(|h| *h == alias))
                    .map(|index| (*column, index))
            })
            .collect();
        Self { positions }
    }

    pub fn position(&self, column: Column) -> Option<usize> {
        self.positions.get(&column).copied()
    }

    /// First required column with no matching header
    pub fn missing_required(&self) -> Option<Column> {
        Column::REQUIRED
            .into_iter()
            .find(|column| !self.positions.contains_key(column))
    }

    pub fn get<'r>(&self, row: &'r StringRecord, column: Column) -> Option<&'r str> {
        self.position(column).and_then(|index| row.get(index))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
