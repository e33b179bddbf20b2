//! Algorithms for deriving analytical attributes from incident reports.

pub mod incident;

pub use incident::{BatchResult, IncidentPipeline, process_batch};
