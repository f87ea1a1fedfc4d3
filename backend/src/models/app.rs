//! Typed rows of the app table: raw, cleaned and derived.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::algorithms::scoring;

/// Three-way classification of an app derived from its rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// All categories, in display order.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// Classify a rating.
    ///
    /// Only an exact 3 is Neutral; anything else below 4 (including the open
    /// interval between 3 and 4, and NaN) is Negative.
    pub fn from_rating(rating: f64) -> Self {
        if rating >= 4.0 {
            Sentiment::Positive
        } else if rating == 3.0 {
            Sentiment::Neutral
        } else {
            Sentiment::Negative
        }
    }

    /// Bonus added to `rating * 20` in the performance score.
    pub fn bonus(self) -> f64 {
        match self {
            Sentiment::Positive => 80.0,
            Sentiment::Neutral => 50.0,
            Sentiment::Negative => 20.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "neutral" => Ok(Self::Neutral),
            "negative" => Ok(Self::Negative),
            _ => Err(format!("Unknown sentiment: {}", s)),
        }
    }
}

/// Highlight class of a performance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn classify(score: f64) -> Self {
        if score >= 80.0 {
            ScoreTier::High
        } else if score >= 50.0 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }
}

/// A row of the raw Play Store export, projected to the three columns we use.
///
/// `None` marks a field holding a missing-value marker (empty, `NaN`, `N/A`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAppRow {
    pub app: String,
    pub reviews: Option<String>,
    pub rating: Option<String>,
}

/// A row that survived cleaning.
///
/// `reviews` keeps the raw text; it is only coerced once the dashboard loads the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedAppRow {
    #[serde(rename = "App")]
    pub app: String,
    #[serde(rename = "Reviews")]
    pub reviews: String,
    #[serde(rename = "Rating")]
    pub rating: f64,
    #[serde(rename = "Sentiment")]
    pub sentiment: Sentiment,
}

/// One application with all derived scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppRecord {
    pub name: String,
    pub reviews: f64,
    pub rating: f64,
    pub sentiment: Sentiment,
    pub performance_score: f64,
    pub hidden_gem_score: f64,
    /// Infinite or NaN when `rating` is 0.
    pub engagement_score: f64,
}

impl AppRecord {
    /// Build a record from its two inputs, deriving every other field.
    pub fn derive(name: impl Into<String>, reviews: f64, rating: f64) -> Self {
        let sentiment = Sentiment::from_rating(rating);
        Self {
            name: name.into(),
            reviews,
            rating,
            sentiment,
            performance_score: scoring::performance_score(rating, sentiment),
            hidden_gem_score: scoring::hidden_gem_score(rating, reviews),
            engagement_score: scoring::engagement_score(reviews, rating),
        }
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::classify(self.performance_score)
    }
}

/// How the Reviews column prints in exports.
///
/// The format belongs to the whole column: a single review count that had to
/// be defaulted, or was written with a fraction, switches every row to float text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewsFormat {
    #[default]
    Integer,
    Float,
}

impl ReviewsFormat {
    /// `Integer` only when every value is a finite whole number.
    pub fn of_values(reviews: impl IntoIterator<Item = f64>) -> Self {
        if reviews
            .into_iter()
            .all(|value| value.is_finite() && value.fract() == 0.0)
        {
            ReviewsFormat::Integer
        } else {
            ReviewsFormat::Float
        }
    }
}

/// The derived app table, loaded once and shared read-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppTable {
    pub records: Vec<AppRecord>,
    pub reviews_format: ReviewsFormat,
}

impl AppTable {
    pub fn new(records: Vec<AppRecord>, reviews_format: ReviewsFormat) -> Self {
        Self {
            records,
            reviews_format,
        }
    }
}

impl From<Vec<AppRecord>> for AppTable {
    fn from(records: Vec<AppRecord>) -> Self {
        let reviews_format = ReviewsFormat::of_values(records.iter().map(|r| r.reviews));
        Self::new(records, reviews_format)
    }
}

impl std::ops::Deref for AppTable {
    type Target = [AppRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_boundaries() {
        assert_eq!(Sentiment::from_rating(5.0), Sentiment::Positive);
        assert_eq!(Sentiment::from_rating(4.0), Sentiment::Positive);
        assert_eq!(Sentiment::from_rating(3.99), Sentiment::Negative);
        assert_eq!(Sentiment::from_rating(3.5), Sentiment::Negative);
        assert_eq!(Sentiment::from_rating(3.0), Sentiment::Neutral);
        assert_eq!(Sentiment::from_rating(2.999), Sentiment::Negative);
        assert_eq!(Sentiment::from_rating(0.0), Sentiment::Negative);
        assert_eq!(Sentiment::from_rating(f64::NAN), Sentiment::Negative);
    }

    #[test]
    fn test_sentiment_parse() {
        assert_eq!("Positive".parse::<Sentiment>().unwrap(), Sentiment::Positive);
        assert_eq!(" neutral ".parse::<Sentiment>().unwrap(), Sentiment::Neutral);
        assert_eq!("NEGATIVE".parse::<Sentiment>().unwrap(), Sentiment::Negative);
        assert!("meh".parse::<Sentiment>().is_err());
    }

    #[test]
    fn test_score_tier_thresholds() {
        assert_eq!(ScoreTier::classify(100.0), ScoreTier::High);
        assert_eq!(ScoreTier::classify(80.0), ScoreTier::High);
        assert_eq!(ScoreTier::classify(79.99), ScoreTier::Medium);
        assert_eq!(ScoreTier::classify(50.0), ScoreTier::Medium);
        assert_eq!(ScoreTier::classify(49.99), ScoreTier::Low);
        assert_eq!(ScoreTier::classify(f64::NAN), ScoreTier::Low);
    }

    #[test]
    fn test_derive_neutral_record() {
        let record = AppRecord::derive("Y", 100.0, 3.0);
        assert_eq!(record.sentiment, Sentiment::Neutral);
        assert_eq!(record.performance_score, 100.0);
        assert_eq!(record.hidden_gem_score, 30.0);
        assert_eq!(record.engagement_score, 33.33);
        assert_eq!(record.tier(), ScoreTier::High);
    }

    #[test]
    fn test_derive_zero_rating() {
        let record = AppRecord::derive("Z", 10.0, 0.0);
        assert_eq!(record.performance_score, 20.0);
        assert_eq!(record.hidden_gem_score, 0.0);
        assert!(record.engagement_score.is_infinite());
        assert_eq!(record.tier(), ScoreTier::Low);

        let silent = AppRecord::derive("Q", 0.0, 0.0);
        assert!(silent.engagement_score.is_nan());
    }

    #[test]
    fn test_reviews_format_from_values() {
        assert_eq!(ReviewsFormat::of_values([159.0, 0.0]), ReviewsFormat::Integer);
        assert_eq!(ReviewsFormat::of_values([159.0, 2.5]), ReviewsFormat::Float);
        assert_eq!(ReviewsFormat::of_values(Vec::new()), ReviewsFormat::Integer);

        let table = AppTable::from(vec![AppRecord::derive("A", 3.0, 4.0)]);
        assert_eq!(table.reviews_format, ReviewsFormat::Integer);
        assert_eq!(table.len(), 1);
    }
}
