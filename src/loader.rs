//! Export file loading
//!
//! Exports are JSON arrays of row objects keyed by column header, the shape a
//! spreadsheet-to-JSON conversion produces. Several exports can be processed
//! at once; each is an independent batch.

use std::fs;
use std::path::{Path, PathBuf};

use indicatif::ProgressBar;
use rayon::prelude::*;
use serde_json::Value;

use crate::algorithm::incident::{BatchResult, IncidentPipeline};
use crate::error::{IncidentReaderError, Result};
use crate::models::raw::RawRecord;
use crate::utils::logging::log_warning;

/// Parse an in-memory JSON export into raw rows
pub fn parse_json_export(json: &str) -> Result<Vec<RawRecord>> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(rows) = value else {
        return Err(IncidentReaderError::invalid_export(
            "expected a JSON array of row objects",
        ));
    };

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            if !row.is_object() {
                return Err(IncidentReaderError::invalid_export(format!(
                    "row {index} is not an object"
                )));
            }
            serde_json::from_value(row).map_err(|e| {
                IncidentReaderError::invalid_export(format!("row {index}: {e}"))
            })
        })
        .collect()
}

/// Read a JSON export file into raw rows
pub fn load_json_export(path: &Path) -> Result<Vec<RawRecord>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        IncidentReaderError::IoError(std::io::Error::new(
            e.kind(),
            format!("Failed to read export {}: {e}", path.display()),
        ))
    })?;
    let rows = parse_json_export(&contents)?;
    if rows.is_empty() {
        log_warning("Export contains no rows", Some(&path.display().to_string()));
    }
    Ok(rows)
}

/// Load and normalize a single export file
pub fn process_export(path: &Path, pipeline: &IncidentPipeline) -> Result<BatchResult> {
    let rows = load_json_export(path)?;
    Ok(pipeline.process_batch_from(&path.display().to_string(), &rows))
}

/// Load and normalize several export files in parallel
///
/// Returns one `BatchResult` per file, in the order the paths were given.
/// Fails with the first unreadable or malformed file.
pub fn process_exports_parallel(
    paths: &[PathBuf],
    pipeline: &IncidentPipeline,
    progress: Option<&ProgressBar>,
) -> Result<Vec<BatchResult>> {
    let results: Vec<Result<BatchResult>> = paths
        .par_iter()
        .map(|path| {
            let result = process_export(path, pipeline);
            if let Some(pb) = progress {
                pb.inc(1);
            }
            result
        })
        .collect();

    let batches = results.into_iter().collect::<Result<Vec<_>>>()?;

    log::info!(
        "Successfully processed {} export files ({} records)",
        batches.len(),
        batches.iter().map(BatchResult::accepted_count).sum::<usize>()
    );

    Ok(batches)
}
