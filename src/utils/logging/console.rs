//! Console output utilities
//!
//! Summaries go to stderr so that stdout stays free for record output.

use itertools::Itertools;

use crate::algorithm::incident::BatchResult;

/// Print summary information about a processed batch
pub fn print_batch_summary(source: &str, result: &BatchResult, elapsed: std::time::Duration) {
    eprintln!(
        "{source}: {} rows, {} accepted, {} rejected in {:?}",
        result.total_rows(),
        result.accepted_count(),
        result.rejected_count(),
        elapsed
    );
}

/// Print the first `limit` rejection diagnostics of a batch
pub fn print_rejections(result: &BatchResult, limit: usize) {
    if result.is_clean() {
        return;
    }
    let shown = result.diagnostics.iter().take(limit).join("\n  ");
    eprintln!("  {shown}");
    if result.rejected_count() > limit {
        eprintln!("  ... and {} more", result.rejected_count() - limit);
    }
}
