//! Codec Comparison Driver
//!
//! Runs the full pipeline over a roster: import with per-row fault
//! isolation, normalize, export, compare the binary and text encodings, and
//! display the records restored from the binary form.
//!
//! Usage:
//!   cargo run --bin compare_codecs [-- --input roster.csv] [--json]

use anyhow::Context;
use clap::Parser;
use roster_codec::{compare_codecs, parse_csv, render_csv, wire};
use tracing::{debug, info, warn, Level};

/// Built-in sample roster: two valid rows, three rows that each violate a
/// different rule.
const SAMPLE_INPUT: &str = "\
Alice,30,ALICE@MAIL.COM
Bob,200,bob@mail.com
,25,no_name@mail.com
Charlie,40,charlie@mail.com
Dave,22,davemail.com
";

#[derive(Parser)]
#[command(name = "compare_codecs")]
#[command(about = "Roster ingestion and binary/text codec comparison")]
struct Args {
    /// Input roster file; the built-in sample is used when omitted
    #[arg(short, long)]
    input: Option<std::path::PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Emit the report and surviving records as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = match args.log_level.as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .init();

    let input = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading roster from {}", path.display()))?,
        None => SAMPLE_INPUT.to_string(),
    };

    let import = parse_csv(&input);
    for skip in &import.skipped {
        warn!("Skipped row: {} | reason: {}", skip.line, skip.reason);
    }
    info!(
        "Imported {} of {} rows",
        import.records.len(),
        import.records.len() + import.skipped.len()
    );

    let mut records = import.records;
    for record in &mut records {
        record.normalize();
    }
    for record in &records {
        info!("  {record}");
    }

    let csv_output = render_csv(&records);
    debug!("rendered text:\n{csv_output}");

    let report = compare_codecs(&records)?;

    let binary = wire::encode(&records);
    debug!(
        "encoded prefix: {}",
        hex::encode(&binary[..binary.len().min(24)])
    );
    let restored = wire::decode(&binary)?;

    if args.json {
        let out = serde_json::json!({
            "report": report,
            "records": records,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        info!("Binary size: {} bytes", report.binary_size);
        info!("Text size:   {} bytes", report.text_size);
        info!("Binary encode time: {:?}", report.encode_duration);
        info!("Text render time:   {:?}", report.render_duration);
    }

    info!("Restored {} records from the binary form:", restored.len());
    for record in &restored {
        info!("  {record}");
    }

    Ok(())
}
