use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{CleanedAppRow, RawAppRow, Sentiment};

/// Cell values read as "missing": the NA spellings common in CSV exports.
pub const MISSING_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whether a raw cell is a missing-value marker. Matching is exact.
pub fn is_missing(raw: &str) -> bool {
    MISSING_MARKERS.contains(&raw)
}

/// Lenient numeric coercion; `None` for anything that is not a number.
pub fn coerce_numeric(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}

/// Row counts observed while cleaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub rows_read: usize,
    pub dropped_missing_reviews: usize,
    pub dropped_invalid_rating: usize,
    pub rows_written: usize,
    pub unique_apps: usize,
}

#[derive(Debug, Clone)]
pub struct CleaningOutcome {
    pub rows: Vec<CleanedAppRow>,
    pub report: CleaningReport,
}

/// Turn raw rows into cleaned rows.
///
/// Rows without reviews are dropped first; then rows whose rating is not
/// numeric. Surviving rows keep their review text untouched and get a
/// sentiment from the coerced rating.
pub fn clean<I>(raw_rows: I) -> CleaningOutcome
where
    I: IntoIterator<Item = RawAppRow>,
{
    let mut report = CleaningReport::default();
    let mut rows = Vec::new();

    for raw in raw_rows {
        report.rows_read += 1;

        let Some(reviews) = raw.reviews else {
            report.dropped_missing_reviews += 1;
            continue;
        };

        let Some(rating) = raw.rating.as_deref().and_then(coerce_numeric) else {
            report.dropped_invalid_rating += 1;
            continue;
        };

        rows.push(CleanedAppRow {
            app: raw.app,
            reviews,
            rating,
            sentiment: Sentiment::from_rating(rating),
        });
    }

    report.rows_written = rows.len();
    report.unique_apps = rows
        .iter()
        .map(|row| row.app.as_str())
        .collect::<HashSet<_>>()
        .len();

    debug!(
        "Cleaned {} rows -> {} ({} missing reviews, {} invalid ratings)",
        report.rows_read,
        report.rows_written,
        report.dropped_missing_reviews,
        report.dropped_invalid_rating
    );

    CleaningOutcome { rows, report }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(app: &str, reviews: Option<&str>, rating: Option<&str>) -> RawAppRow {
        RawAppRow {
            app: app.to_string(),
            reviews: reviews.map(str::to_string),
            rating: rating.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_markers() {
        assert!(is_missing(""));
        assert!(is_missing("NaN"));
        assert!(is_missing("N/A"));
        assert!(is_missing("null"));
        assert!(!is_missing("0"));
        assert!(!is_missing(" "));
        assert!(!is_missing("Varies with device"));
    }

    #[test]
    fn test_coerce_numeric() {
        assert_eq!(coerce_numeric("4.5"), Some(4.5));
        assert_eq!(coerce_numeric(" 3 "), Some(3.0));
        assert_eq!(coerce_numeric("1e3"), Some(1000.0));
        assert_eq!(coerce_numeric("3.0M"), None);
        assert_eq!(coerce_numeric("NaN"), None);
        assert_eq!(coerce_numeric(""), None);
    }

    #[test]
    fn test_drops_missing_reviews() {
        let outcome = clean(vec![raw("X", None, Some("4.5"))]);
        assert!(outcome.rows.is_empty());
        assert_eq!(outcome.report.dropped_missing_reviews, 1);
        assert_eq!(outcome.report.rows_written, 0);
    }

    #[test]
    fn test_drops_invalid_rating() {
        let outcome = clean(vec![
            raw("A", Some("10"), None),
            raw("B", Some("10"), Some("Everyone")),
            raw("C", Some("10"), Some("4.1")),
        ]);
        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].app, "C");
        assert_eq!(outcome.report.dropped_invalid_rating, 2);
    }

    #[test]
    fn test_reviews_kept_verbatim() {
        let outcome = clean(vec![raw("Big", Some("3.0M"), Some("4.4"))]);
        assert_eq!(outcome.rows[0].reviews, "3.0M");
        assert_eq!(outcome.rows[0].sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_sentiment_assignment() {
        let outcome = clean(vec![
            raw("P", Some("1"), Some("4")),
            raw("N", Some("1"), Some("3")),
            raw("G", Some("1"), Some("3.5")),
        ]);
        let sentiments: Vec<Sentiment> = outcome.rows.iter().map(|r| r.sentiment).collect();
        assert_eq!(
            sentiments,
            vec![Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative]
        );
    }

    #[test]
    fn test_report_counts_unique_apps() {
        let outcome = clean(vec![
            raw("Dup", Some("1"), Some("4")),
            raw("Dup", Some("2"), Some("4")),
            raw("Solo", Some("3"), Some("2")),
        ]);
        assert_eq!(outcome.report.rows_read, 3);
        assert_eq!(outcome.report.rows_written, 3);
        assert_eq!(outcome.report.unique_apps, 2);
    }
}
