//! CSV writers for the cleaned file and the filtered export.

use csv::Writer;
use log::debug;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{ErrorContext, InsightsError, InsightsResult};
use crate::models::{AppRecord, CleanedAppRow, ReviewsFormat};

pub const CLEANED_HEADERS: [&str; 4] = ["App", "Reviews", "Rating", "Sentiment"];

/// Columns of the filtered download. Engagement is a whole-table view and is not exported.
pub const EXPORT_HEADERS: [&str; 6] = [
    "App",
    "Reviews",
    "Rating",
    "Sentiment",
    "Performance Score",
    "Hidden Gem Score",
];

/// Shortest round-trip float text with a decimal point: `3.0`, `4.5`, `inf`; NaN is an empty cell.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{:?}", value)
    }
}

/// A review count in its column's format.
pub fn format_reviews(value: f64, format: ReviewsFormat) -> String {
    match format {
        ReviewsFormat::Integer if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 => {
            format!("{}", value as i64)
        }
        _ => format_float(value),
    }
}

/// Serialize cleaned rows with the `App,Reviews,Rating,Sentiment` header.
pub fn write_cleaned_to<W: Write>(writer: W, rows: &[CleanedAppRow]) -> InsightsResult<()> {
    let context = ErrorContext::new("write_cleaned");
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(CLEANED_HEADERS)
        .map_err(|e| InsightsError::csv(e, context.clone()))?;
    for row in rows {
        wtr.write_record([
            row.app.as_str(),
            row.reviews.as_str(),
            format_float(row.rating).as_str(),
            row.sentiment.as_str(),
        ])
        .map_err(|e| InsightsError::csv(e, context.clone()))?;
    }
    wtr.flush().map_err(|e| InsightsError::io(e, context))?;
    Ok(())
}

/// Write the cleaned file, replacing any existing one.
pub fn write_cleaned(path: &Path, rows: &[CleanedAppRow]) -> InsightsResult<()> {
    let file = File::create(path).map_err(|e| {
        InsightsError::io(e, ErrorContext::new("write_cleaned").with_path(path.display()))
    })?;
    write_cleaned_to(file, rows)?;
    debug!("Wrote {} cleaned rows to {}", rows.len(), path.display());
    Ok(())
}

/// Render records as CSV with the export columns.
pub fn export_filtered_csv(
    records: &[&AppRecord],
    reviews_format: ReviewsFormat,
) -> InsightsResult<String> {
    let context = ErrorContext::new("export_filtered");
    let mut wtr = Writer::from_writer(Vec::new());
    wtr.write_record(EXPORT_HEADERS)
        .map_err(|e| InsightsError::csv(e, context.clone()))?;
    for record in records {
        wtr.write_record([
            record.name.clone(),
            format_reviews(record.reviews, reviews_format),
            format_float(record.rating),
            record.sentiment.to_string(),
            format_float(record.performance_score),
            format_float(record.hidden_gem_score),
        ])
        .map_err(|e| InsightsError::csv(e, context.clone()))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| InsightsError::io(e.into_error(), context.clone()))?;
    String::from_utf8(bytes).map_err(|e| {
        InsightsError::io(
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            context,
        )
    })
}
