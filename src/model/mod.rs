//! Data model shared by the export parser, the analysis engine and the report renderers

pub mod keyword;
pub mod record;
pub mod result;

pub use keyword::{AnalyzedKeyword, Color, DataConfidence, KeywordAction, MatchType};
pub use record::{finite_or_zero, ratio, AdRecord};
pub use result::{
    AnalysisResult, BidAction, BidRecommendation, FreeRecommendation, FullAnalysis,
    MatchTypeRecommendation, PainPoints, PortfolioSummary, PortfolioTotals,
};
