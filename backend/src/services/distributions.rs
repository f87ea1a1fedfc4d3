use std::collections::HashMap;

use crate::api::{SentimentCount, SentimentDistribution};
use crate::models::{AppRecord, Sentiment};

/// Count the filtered set per sentiment.
///
/// Only sentiments that occur are listed, most frequent first; equal counts
/// fall back to Positive, Neutral, Negative order.
pub fn compute_sentiment_distribution(filtered: &[&AppRecord]) -> SentimentDistribution {
    let mut tally: HashMap<Sentiment, usize> = HashMap::new();
    for record in filtered {
        *tally.entry(record.sentiment).or_insert(0) += 1;
    }

    let mut counts: Vec<SentimentCount> = Sentiment::ALL
        .into_iter()
        .filter_map(|sentiment| {
            tally
                .get(&sentiment)
                .map(|&count| SentimentCount { sentiment, count })
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));

    SentimentDistribution {
        counts,
        total: filtered.len(),
    }
}
