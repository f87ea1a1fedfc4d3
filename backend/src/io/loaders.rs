//! CSV readers for the raw export and the cleaned table.

use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{ErrorContext, InsightsError, InsightsResult};
use crate::models::{AppRecord, AppTable, RawAppRow, ReviewsFormat};
use crate::transformations::{coerce_numeric, is_missing};

pub const APP_COLUMN: &str = "App";
pub const REVIEWS_COLUMN: &str = "Reviews";
pub const RATING_COLUMN: &str = "Rating";

/// Positions of the three columns we read, resolved from the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    app: usize,
    reviews: usize,
    rating: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, context: &ErrorContext) -> InsightsResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| InsightsError::missing_column(name, context.clone()))
        };
        Ok(Self {
            app: find(APP_COLUMN)?,
            reviews: find(REVIEWS_COLUMN)?,
            rating: find(RATING_COLUMN)?,
        })
    }
}

/// A cell, or `None` when it is absent or holds a missing marker.
fn cell(record: &StringRecord, idx: usize) -> Option<&str> {
    record.get(idx).filter(|raw| !is_missing(raw))
}

fn open(path: &Path, operation: &str) -> InsightsResult<File> {
    File::open(path)
        .map_err(|e| InsightsError::io(e, ErrorContext::new(operation).with_path(path.display())))
}

fn for_each_row<R, F>(reader: R, context: ErrorContext, mut on_row: F) -> InsightsResult<()>
where
    R: Read,
    F: FnMut(ColumnIndex, &StringRecord),
{
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| InsightsError::csv(e, context.clone()))?
        .clone();
    let columns = ColumnIndex::resolve(&headers, &context)?;

    for (row_no, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| {
            InsightsError::csv(e, context.clone().with_details(format!("row {}", row_no + 1)))
        })?;
        on_row(columns, &record);
    }
    Ok(())
}

/// Parse raw rows (any extra columns are ignored).
pub fn parse_raw_rows<R: Read>(reader: R) -> InsightsResult<Vec<RawAppRow>> {
    let mut rows = Vec::new();
    for_each_row(reader, ErrorContext::new("read_raw"), |columns, record| {
        rows.push(RawAppRow {
            app: cell(record, columns.app).unwrap_or_default().to_string(),
            reviews: cell(record, columns.reviews).map(str::to_string),
            rating: cell(record, columns.rating).map(str::to_string),
        });
    })?;
    Ok(rows)
}

/// Read the raw Play Store export from disk.
pub fn read_raw_rows(path: &Path) -> InsightsResult<Vec<RawAppRow>> {
    let rows = parse_raw_rows(open(path, "read_raw")?).map_err(|e| with_path(e, path))?;
    debug!("Read {} raw rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Parse the cleaned table into derived records.
///
/// Reviews are coerced again here and default to 0 when unparseable. A rating
/// that does not parse becomes NaN; such a record never passes a rating filter.
/// The file's `Sentiment` column is not read; it is re-derived from the rating.
///
/// The Reviews column prints as integers only if every cell is an integer literal.
pub fn parse_app_table<R: Read>(reader: R) -> InsightsResult<AppTable> {
    let mut records = Vec::new();
    let mut integral_reviews = true;
    for_each_row(reader, ErrorContext::new("load_table"), |columns, record| {
        let name = cell(record, columns.app).unwrap_or_default();
        let raw_reviews = cell(record, columns.reviews);
        integral_reviews &= raw_reviews.is_some_and(|raw| raw.trim().parse::<i64>().is_ok());
        let reviews = raw_reviews.and_then(coerce_numeric).unwrap_or(0.0);
        let rating = cell(record, columns.rating)
            .and_then(coerce_numeric)
            .unwrap_or(f64::NAN);
        records.push(AppRecord::derive(name, reviews, rating));
    })?;

    let reviews_format = if integral_reviews {
        ReviewsFormat::Integer
    } else {
        ReviewsFormat::Float
    };
    Ok(AppTable::new(records, reviews_format))
}

/// Load the cleaned table from disk.
pub fn load_app_table(path: &Path) -> InsightsResult<AppTable> {
    let table = parse_app_table(open(path, "load_table")?).map_err(|e| with_path(e, path))?;
    info!(
        "Loaded {} apps from {} (reviews as {:?})",
        table.records.len(),
        path.display(),
        table.reviews_format
    );
    Ok(table)
}

fn with_path(err: InsightsError, path: &Path) -> InsightsError {
    match err {
        InsightsError::Csv { source, context } => InsightsError::Csv {
            source,
            context: context.with_path(path.display()),
        },
        InsightsError::MissingColumn { column, context } => InsightsError::MissingColumn {
            column,
            context: context.with_path(path.display()),
        },
        other => other,
    }
}

#[cfg(test)]
#[path = "loaders_tests.rs"]
mod loaders_tests;
