//! Synthetic rating trends for sparklines and the comparison chart.
//!
//! The dataset has no history, so trends are decorative: each point is the
//! app's rating plus Gaussian jitter. Nothing deterministic depends on them.
//! Use [`TrendGenerator::seeded`] wherever reproducible output is needed.

use chrono::{Duration, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::api::TrendPoint;

/// Points per series (one per day).
pub const TREND_POINTS: usize = 5;
/// Standard deviation of the jitter, in stars.
pub const TREND_STD_DEV: f64 = 0.2;
pub const TREND_MIN_RATING: f64 = 1.0;
pub const TREND_MAX_RATING: f64 = 5.0;

pub struct TrendGenerator {
    rng: StdRng,
}

impl TrendGenerator {
    /// A generator producing different series on every call.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// `TREND_POINTS` jittered ratings, one per day, the last one on `end`.
    pub fn series(&mut self, rating: f64, end: NaiveDate) -> Vec<TrendPoint> {
        (0..TREND_POINTS)
            .map(|i| {
                let offset = (TREND_POINTS - 1 - i) as i64;
                let noise: f64 = self.rng.sample(StandardNormal);
                TrendPoint {
                    day: end - Duration::days(offset),
                    rating: (rating + TREND_STD_DEV * noise).clamp(TREND_MIN_RATING, TREND_MAX_RATING),
                }
            })
            .collect()
    }
}

impl Default for TrendGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
