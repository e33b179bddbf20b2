use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use incident_reader::utils::logging::console::{print_batch_summary, print_rejections};
use incident_reader::utils::logging::{create_main_progress_bar, finish_and_clear};
use incident_reader::{
    BatchResult, IncidentPipeline, NormalizedRecord, PipelineConfig, process_exports_parallel,
};
use log::info;

/// Rejections printed per file in the summary
const REJECTION_PREVIEW: usize = 10;

#[derive(Parser)]
#[command(
    name = "incident-reader",
    about = "Normalize spreadsheet-exported incident reports into analysis-ready records"
)]
struct Cli {
    /// JSON exports (arrays of row objects keyed by column header)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Write normalized records here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Do not log each rejected row
    #[arg(long)]
    quiet_rejections: bool,
}

fn write_records(
    writer: impl Write,
    records: &[&NormalizedRecord],
    pretty: bool,
) -> anyhow::Result<()> {
    let mut writer = BufWriter::new(writer);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, records)?;
    } else {
        serde_json::to_writer(&mut writer, records)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = PipelineConfig::default().with_rejection_logging(!cli.quiet_rejections);
    let pipeline = IncidentPipeline::new(config).context("Invalid pipeline configuration")?;

    let start = Instant::now();
    let pb = (cli.inputs.len() > 1).then(|| {
        create_main_progress_bar(cli.inputs.len() as u64, Some("Processing exports"))
    });
    let batches = process_exports_parallel(&cli.inputs, &pipeline, pb.as_ref())
        .context("Failed to process incident exports")?;
    if let Some(pb) = &pb {
        finish_and_clear(pb);
    }

    for (path, batch) in cli.inputs.iter().zip(&batches) {
        print_batch_summary(&path.display().to_string(), batch, start.elapsed());
        print_rejections(batch, REJECTION_PREVIEW);
    }

    let records: Vec<&NormalizedRecord> = batches
        .iter()
        .flat_map(|batch| batch.records.iter())
        .collect();
    info!(
        "Normalized {} of {} rows from {} file(s) in {:?}",
        records.len(),
        batches.iter().map(BatchResult::total_rows).sum::<usize>(),
        batches.len(),
        start.elapsed()
    );

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            write_records(file, &records, cli.pretty)?;
            info!("Wrote {} records to {}", records.len(), path.display());
        }
        None => write_records(io::stdout().lock(), &records, cli.pretty)?,
    }

    Ok(())
}
