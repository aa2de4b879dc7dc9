//! # adsight
//!
//! Turns keyword-level advertising performance exports into an optimization
//! report: wasted spend, per-keyword bid actions, match-type changes,
//! negative-keyword suggestions and portfolio profitability.
//!
//! ## Usage
//!
//! ```bash
//! adsight analyze export.csv [--format text|json|csv] [--target-acos 0.35]
//! ```
//!
//! ## Modules
//!
//! - `analysis` - The pure analysis engine
//! - `config` - Thresholds and output settings, loaded from TOML and the environment
//! - `error` - Coded error type shared by the surfaces around the engine
//! - `ingest` - CSV export parsing with header aliases and value coercion
//! - `model` - Input records and the analysis result contract
//! - `report` - Text, JSON and CSV rendering
//! - `testing` - Record builders and sample exports for tests and benchmarks
pub mod analysis;
pub mod config;
pub mod error;
pub mod ingest;
pub mod model;
pub mod report;

pub mod testing;

pub use analysis::analyze;
pub use config::AnalysisConfig;
pub use model::{AdRecord, AnalysisResult};
