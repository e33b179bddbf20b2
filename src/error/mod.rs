//! Error handling for the incident reader.
//!
//! Two layers live here. `IncidentReaderError` covers failures of the library
//! itself (reading an export, decoding JSON). Row rejections are not errors of
//! the library: they are reported as `RowDiagnostic` values alongside the
//! accepted records so a bad row never aborts a batch.

use std::{fmt, io};

use chrono::NaiveDate;
use serde::Serialize;

/// Specialized error type for the incident reader
#[derive(Debug, thiserror::Error)]
pub enum IncidentReaderError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Error decoding an export
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The export did not have the expected tabular shape
    #[error("Invalid export: {0}")]
    InvalidExport(String),

    /// Invalid pipeline configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl IncidentReaderError {
    /// Create an invalid-export error with a message
    pub fn invalid_export(message: impl Into<String>) -> Self {
        Self::InvalidExport(message.into())
    }

    /// Create a configuration error with a message
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }
}

/// Result type for incident reader operations
pub type Result<T> = std::result::Result<T, IncidentReaderError>;

/// The two raw date fields a row must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DateField {
    /// Date of the incident
    IncidentDate,
    /// Client date of birth
    DateOfBirth,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncidentDate => write!(f, "incident date"),
            Self::DateOfBirth => write!(f, "date of birth"),
        }
    }
}

/// Why a raw row was excluded from the normalized output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum RejectionReason {
    /// A date field was missing or failed every resolution rule
    #[error("invalid or missing {field}")]
    UnparseableDate {
        /// Which field could not be resolved
        field: DateField,
    },

    /// Both dates parsed but the incident precedes the birth date
    #[error("incident date {incident_date} is before date of birth {birth_date}")]
    ChronologyViolation {
        /// Resolved incident date
        incident_date: NaiveDate,
        /// Resolved date of birth
        birth_date: NaiveDate,
    },
}

/// A rejected row and the reason it was rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowDiagnostic {
    /// Zero-based position of the row in the input batch
    pub index: usize,
    /// Reason for rejection
    pub reason: RejectionReason,
}

impl RowDiagnostic {
    #[must_use]
    pub const fn new(index: usize, reason: RejectionReason) -> Self {
        Self { index, reason }
    }

    /// Row number as shown by a spreadsheet tool (1-based, after the header row)
    #[must_use]
    pub const fn sheet_row(&self) -> usize {
        self.index + 2
    }
}

impl fmt::Display for RowDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.sheet_row(), self.reason)
    }
}
