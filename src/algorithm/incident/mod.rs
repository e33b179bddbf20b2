//! Incident normalization pipeline
//!
//! Applies the row normalizer across a batch of raw rows. Batches are
//! processed sequentially and in order; a rejected row is recorded as a
//! diagnostic and never aborts the batch. Separate batches share no state and
//! may run concurrently.

pub mod categories;
pub mod normalize;
pub mod severity;
pub mod translation;

use std::time::Instant;

use serde::Serialize;

use crate::config::PipelineConfig;
use crate::error::{Result, RowDiagnostic};
use crate::models::incident::NormalizedRecord;
use crate::models::raw::RawRecord;
use crate::utils::logging::{log_operation_complete, log_operation_start, log_rejection};

pub use categories::classify;
pub use normalize::{RowResult, age_at, normalize_row};
pub use severity::{SeverityFactors, seriousness_score};
pub use translation::LexicalTranslator;

/// Label used for batches that did not come from a file
pub const IN_MEMORY_SOURCE: &str = "in-memory batch";

/// Accepted records and rejection diagnostics for one batch
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchResult {
    /// Accepted records, in input order
    pub records: Vec<NormalizedRecord>,
    /// Rejected rows, in input order
    pub diagnostics: Vec<RowDiagnostic>,
}

impl BatchResult {
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Number of raw rows the batch was built from
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.accepted_count() + self.rejected_count()
    }

    /// Whether every row was accepted
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<NormalizedRecord>, Vec<RowDiagnostic>) {
        (self.records, self.diagnostics)
    }
}

/// Normalizes batches of raw rows under a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct IncidentPipeline {
    config: PipelineConfig,
}

impl IncidentPipeline {
    /// Create a pipeline after validating its configuration
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Normalize one row at `index` of its batch
    pub fn normalize_row(&self, index: usize, raw: &RawRecord) -> RowResult {
        normalize_row(index, raw, &self.config)
    }

    /// Normalize an in-memory batch
    #[must_use]
    pub fn process_batch(&self, rows: &[RawRecord]) -> BatchResult {
        self.process_batch_from(IN_MEMORY_SOURCE, rows)
    }

    /// Normalize a batch, using `source` to label log output
    #[must_use]
    pub fn process_batch_from(&self, source: &str, rows: &[RawRecord]) -> BatchResult {
        let start = Instant::now();
        log_operation_start("Normalizing incident rows from", source);

        let result = rows
            .iter()
            .enumerate()
            .fold(BatchResult::default(), |mut acc, (index, raw)| {
                match self.normalize_row(index, raw) {
                    Ok(record) => acc.records.push(record),
                    Err(reason) => {
                        let diagnostic = RowDiagnostic::new(index, reason);
                        if self.config.log_rejections {
                            log_rejection(source, &diagnostic);
                        }
                        acc.diagnostics.push(diagnostic);
                    }
                }
                acc
            });

        log_operation_complete(
            "normalized",
            source,
            result.accepted_count(),
            result.rejected_count(),
            Some(start.elapsed()),
        );
        result
    }
}

/// Normalize a batch with the default configuration
#[must_use]
pub fn process_batch(rows: &[RawRecord]) -> BatchResult {
    IncidentPipeline::default().process_batch(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DateField, RejectionReason};
    use crate::models::raw::RawValue;

    fn row(incident: Option<f64>, birth: Option<f64>) -> RawRecord {
        RawRecord {
            incident_date: incident.map(RawValue::Number),
            date_of_birth: birth.map(RawValue::Number),
            client_number: Some(RawValue::Number(7.0)),
            ..Default::default()
        }
    }

    #[test]
    fn test_bad_rows_do_not_abort_batch() {
        let rows = vec![
            row(Some(45000.0), Some(25000.0)),
            row(None, Some(25000.0)),
            row(Some(20000.0), Some(25000.0)),
            row(Some(45001.0), Some(25000.0)),
        ];
        let result = process_batch(&rows);

        assert_eq!(result.accepted_count(), 2);
        assert_eq!(result.rejected_count(), 2);
        assert_eq!(result.total_rows(), 4);
        assert!(!result.is_clean());

        // Accepted rows keep their original index in the id
        assert!(result.records[0].id.ends_with("-0"));
        assert!(result.records[1].id.ends_with("-3"));

        assert_eq!(result.diagnostics[0].index, 1);
        assert_eq!(
            result.diagnostics[0].reason,
            RejectionReason::UnparseableDate {
                field: DateField::IncidentDate
            }
        );
        assert_eq!(result.diagnostics[1].index, 2);
        assert!(matches!(
            result.diagnostics[1].reason,
            RejectionReason::ChronologyViolation { .. }
        ));
    }

    #[test]
    fn test_empty_batch() {
        let result = process_batch(&[]);
        assert!(result.is_clean());
        assert_eq!(result.total_rows(), 0);
    }

    #[test]
    fn test_pipeline_rejects_invalid_config() {
        let mut config = PipelineConfig::default();
        config.date_format_config.date_formats = vec![String::new()];
        assert!(IncidentPipeline::new(config).is_err());
    }
}
