//! Per-record score derivations.
//!
//! Every function here is pure and works on a single record's `rating` and
//! `reviews`. Degenerate inputs (a zero rating, negative review counts) are
//! not guarded: whatever IEEE-754 produces is what the dashboard shows.

use crate::models::Sentiment;

/// Round to two decimals, ties to even.
///
/// Non-finite values pass through unchanged.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// `clamp(rating * 20 + bonus, 0, 100)` rounded to two decimals.
pub fn performance_score(rating: f64, sentiment: Sentiment) -> f64 {
    round2((rating * 20.0 + sentiment.bonus()).clamp(0.0, 100.0))
}

/// Rating scaled by the square root of the review count.
pub fn hidden_gem_score(rating: f64, reviews: f64) -> f64 {
    rating * reviews.sqrt()
}

/// Reviews per rating point, rounded to two decimals.
///
/// A zero rating yields `+inf` (or NaN when there are no reviews either).
pub fn engagement_score(reviews: f64, rating: f64) -> f64 {
    round2(reviews / rating)
}

/// Arithmetic mean, 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_round2_basic() {
        assert_eq!(round2(33.333_333), 33.33);
        assert_eq!(round2(2.0 / 3.0), 0.67);
        assert_eq!(round2(100.0), 100.0);
    }

    #[test]
    fn test_round2_ties_to_even() {
        // 0.125 and 0.375 are exact in binary, so the tie is real.
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
    }

    #[test]
    fn test_round2_non_finite() {
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
        assert!(round2(f64::NAN).is_nan());
    }

    #[test]
    fn test_performance_score_examples() {
        assert_eq!(performance_score(3.0, Sentiment::Neutral), 100.0);
        assert_eq!(performance_score(4.5, Sentiment::Positive), 100.0);
        assert_eq!(performance_score(3.5, Sentiment::Negative), 90.0);
        assert_eq!(performance_score(1.0, Sentiment::Negative), 40.0);
        assert_eq!(performance_score(0.0, Sentiment::Negative), 20.0);
        assert_eq!(performance_score(2.13, Sentiment::Negative), 62.6);
    }

    #[test]
    fn test_hidden_gem_score() {
        assert_eq!(hidden_gem_score(3.0, 100.0), 30.0);
        assert_eq!(hidden_gem_score(4.0, 0.0), 0.0);
        assert!(hidden_gem_score(4.0, -1.0).is_nan());
    }

    #[test]
    fn test_engagement_score() {
        assert_eq!(engagement_score(100.0, 3.0), 33.33);
        assert_eq!(engagement_score(5.0, 0.0), f64::INFINITY);
        assert!(engagement_score(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[4.0, 5.0]), 4.5);
    }

    proptest! {
        #[test]
        fn performance_score_stays_in_range(rating in 0.0f64..=5.0) {
            let score = performance_score(rating, Sentiment::from_rating(rating));
            prop_assert!((0.0..=100.0).contains(&score));
        }

        #[test]
        fn performance_score_clamped_for_any_rating(rating in -1.0e6f64..1.0e6) {
            for sentiment in Sentiment::ALL {
                let score = performance_score(rating, sentiment);
                prop_assert!((0.0..=100.0).contains(&score));
            }
        }

        #[test]
        fn hidden_gem_monotonic_in_reviews(
            rating in 0.0f64..=5.0,
            low in 0.0f64..1.0e7,
            extra in 0.0f64..1.0e7,
        ) {
            prop_assert!(hidden_gem_score(rating, low) <= hidden_gem_score(rating, low + extra));
        }
    }
}
