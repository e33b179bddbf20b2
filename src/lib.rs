//! A Rust library for normalizing spreadsheet-exported incident reports into
//! validated, analysis-ready records.
//!
//! Raw rows go through date resolution, validity gating and feature
//! derivation (category, seriousness, funding source). Rows that cannot be
//! used are reported as diagnostics next to the accepted records.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod models;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::PipelineConfig;
pub use error::{DateField, IncidentReaderError, RejectionReason, Result, RowDiagnostic};
pub use models::{
    FundingSource, IncidentCategory, IncidentFlags, NormalizedRecord, RawRecord, RawValue,
    SeriousnessScore,
};

// Pipeline
pub use algorithm::incident::{
    BatchResult, IncidentPipeline, LexicalTranslator, RowResult, classify, normalize_row,
    process_batch, seriousness_score,
};
pub use schema::{DateFormatConfig, normalize_date};

// Filtering capabilities
pub use filter::{FilterOptions, IncidentFilter, IncidentFilters, apply_filters};

// Loading
pub use loader::{load_json_export, parse_json_export, process_export, process_exports_parallel};
