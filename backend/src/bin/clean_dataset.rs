//! Dataset cleaning binary.
//!
//! Reads the raw Play Store CSV, drops rows without reviews or with a
//! non-numeric rating, labels sentiment and writes the cleaned CSV. Running
//! it twice on the same input produces the same output.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin clean-dataset -- [RAW_CSV] [CLEANED_CSV]
//! ```
//!
//! Paths fall back to `RAW_DATA_PATH` / `CLEANED_DATA_PATH`, then to
//! `googleplaystore.csv` / `googleplay_cleaned.csv`.

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use app_insights::io::{read_raw_rows, write_cleaned};
use app_insights::transformations::clean;

const DEFAULT_RAW_PATH: &str = "googleplaystore.csv";
const DEFAULT_CLEANED_PATH: &str = "googleplay_cleaned.csv";

fn resolve_path(arg: Option<String>, env_key: &str, default: &str) -> PathBuf {
    arg.or_else(|| env::var(env_key).ok())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(false)
        .init();

    let mut args = env::args().skip(1);
    let raw_path = resolve_path(args.next(), "RAW_DATA_PATH", DEFAULT_RAW_PATH);
    let cleaned_path = resolve_path(args.next(), "CLEANED_DATA_PATH", DEFAULT_CLEANED_PATH);

    let raw_rows = read_raw_rows(&raw_path)
        .with_context(|| format!("Failed to read raw dataset {}", raw_path.display()))?;
    let outcome = clean(raw_rows);

    write_cleaned(&cleaned_path, &outcome.rows)
        .with_context(|| format!("Failed to write cleaned dataset {}", cleaned_path.display()))?;

    let report = &outcome.report;
    info!(
        "Cleaned {} rows: {} without reviews, {} with invalid rating dropped",
        report.rows_read, report.dropped_missing_reviews, report.dropped_invalid_rating
    );
    info!(
        "Wrote {} rows ({} unique apps) to {}",
        report.rows_written,
        report.unique_apps,
        cleaned_path.display()
    );

    Ok(())
}
