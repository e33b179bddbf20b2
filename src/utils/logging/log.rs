//! Logging utilities
//!
//! This module provides standardized logging functions for batch operations.

use crate::error::RowDiagnostic;

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `source` - Label of the batch being operated on (usually a file path)
pub fn log_operation_start(operation: &str, source: &str) {
    log::info!("{operation} {source}");
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `source` - Label of the batch that was operated on
/// * `accepted` - Number of rows accepted
/// * `rejected` - Number of rows rejected
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    source: &str,
    accepted: usize,
    rejected: usize,
    elapsed: Option<std::time::Duration>,
) {
    if let Some(duration) = elapsed {
        log::info!(
            "Successfully {operation} {accepted} records from {source} ({rejected} rows rejected) in {duration:?}"
        );
    } else {
        log::info!(
            "Successfully {operation} {accepted} records from {source} ({rejected} rows rejected)"
        );
    }
}

/// Log a rejected row
pub fn log_rejection(source: &str, diagnostic: &RowDiagnostic) {
    log_warning(&format!("Skipping {diagnostic}"), Some(source));
}

/// Log an operation warning with consistent format
///
/// # Arguments
/// * `message` - Warning message
/// * `source` - Optional batch label related to the warning
pub fn log_warning(message: &str, source: Option<&str>) {
    if let Some(source) = source {
        log::warn!("{message}: {source}");
    } else {
        log::warn!("{message}");
    }
}
