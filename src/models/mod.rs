//! Data models for incident reports
//!
//! `raw` holds rows exactly as exported; `incident` holds the normalized,
//! feature-enriched records produced by the pipeline.

pub mod incident;
pub mod raw;

pub use incident::{FundingSource, IncidentCategory, NormalizedRecord, SeriousnessScore};
pub use raw::{IncidentFlags, RawRecord, RawValue};
