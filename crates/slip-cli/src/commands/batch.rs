//! Batch command - parse multiple slip text files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use slip_core::{ParsedSlip, SlipParser};

use super::parse::load_config;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file JSON results
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Write a summary CSV to this path
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Continue when a file cannot be read
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct BatchResult {
    path: PathBuf,
    slip: Option<ParsedSlip>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let parser = SlipParser::from_config(&config.extraction);

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());
    for path in files {
        let result = match fs::read_to_string(&path) {
            Ok(text) => BatchResult {
                slip: Some(parser.parse(&text)),
                error: None,
                path,
            },
            Err(e) => {
                if !args.continue_on_error {
                    pb.finish_and_clear();
                    anyhow::bail!("Failed to read {}: {}", path.display(), e);
                }
                warn!("failed to read {}: {}", path.display(), e);
                BatchResult {
                    slip: None,
                    error: Some(e.to_string()),
                    path,
                }
            }
        };

        if let (Some(output_dir), Some(slip)) = (&args.output_dir, &result.slip) {
            let stem = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("slip");
            let out_path = output_dir.join(format!("{}.json", stem));
            fs::write(&out_path, serde_json::to_string_pretty(slip)?)?;
        }

        pb.inc(1);
        results.push(result);
    }
    pb.finish_with_message("Done");

    if let Some(summary_path) = &args.summary {
        write_summary(summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let parsed = results.iter().filter(|r| r.slip.is_some()).count();
    println!(
        "{} Processed {} files ({} ok, {} failed)",
        style("✓").green(),
        results.len(),
        parsed,
        results.len() - parsed
    );
    debug!("batch finished in {:?}", start.elapsed());

    Ok(())
}

fn write_summary(path: &Path, results: &[BatchResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["file", "amount", "timestamp", "reference_no", "error"])?;
    for result in results {
        let slip = result.slip.clone().unwrap_or_default();
        wtr.write_record([
            result.path.display().to_string(),
            slip.amount.map(|a| a.to_string()).unwrap_or_default(),
            slip.timestamp
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
            slip.reference_no.unwrap_or_default(),
            result.error.clone().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;

    Ok(())
}
