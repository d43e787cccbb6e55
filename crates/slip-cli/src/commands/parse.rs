//! Parse command - extract fields from a single slip text.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::debug;

use slip_core::{ParseReport, SlipConfig, SlipParser};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input text file ("-" for stdin)
    #[arg(required_unless_present = "text")]
    input: Option<PathBuf>,

    /// Parse this text directly instead of reading a file
    #[arg(short, long)]
    text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Include the raw text and timing in JSON output
    #[arg(long)]
    raw: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let parser = SlipParser::from_config(&config.extraction);

    let text = read_input(&args)?;
    let report = parser.parse_report(&text);

    debug!("parsed in {}ms", report.processing_time_ms);

    let output = format_report(&report, args.format, args.raw)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Load the configuration named on the command line, or defaults.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<SlipConfig> {
    match config_path {
        Some(path) => Ok(SlipConfig::from_file(Path::new(path))?),
        None => Ok(SlipConfig::default()),
    }
}

fn read_input(args: &ParseArgs) -> anyhow::Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    let Some(input) = args.input.as_ref() else {
        anyhow::bail!("either an input file or --text is required");
    };

    if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    Ok(fs::read_to_string(input)?)
}

fn format_report(report: &ParseReport, format: OutputFormat, raw: bool) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            if raw {
                Ok(serde_json::to_string_pretty(report)?)
            } else {
                Ok(serde_json::to_string_pretty(&report.slip)?)
            }
        }
        OutputFormat::Csv => format_csv(report),
        OutputFormat::Text => Ok(format_text(report)),
    }
}

fn format_csv(report: &ParseReport) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["amount", "timestamp", "reference_no"])?;
    wtr.write_record([
        report
            .slip
            .amount
            .map(|a| a.to_string())
            .unwrap_or_default(),
        report
            .slip
            .timestamp
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default(),
        report.slip.reference_no.clone().unwrap_or_default(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(report: &ParseReport) -> String {
    let mut output = String::new();

    match &report.slip.amount {
        Some(amount) => output.push_str(&format!("Amount:    {}\n", amount)),
        None => output.push_str("Amount:    -\n"),
    }
    match &report.slip.timestamp {
        Some(timestamp) => output.push_str(&format!(
            "Timestamp: {}\n",
            timestamp.format("%Y-%m-%d %H:%M:%S")
        )),
        None => output.push_str("Timestamp: -\n"),
    }
    match &report.slip.reference_no {
        Some(reference) => output.push_str(&format!("Reference: {}\n", reference)),
        None => output.push_str("Reference: -\n"),
    }

    output
}
