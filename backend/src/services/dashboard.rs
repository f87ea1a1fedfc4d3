//! One evaluation of the derivation and filter pipeline.
//!
//! A [`DashboardQuery`] borrows the loaded table, applies the filter once and
//! answers every view from that snapshot. Views computed from the whole table
//! (hidden gems, top engagement) ignore the criteria.

use log::debug;

use crate::api::{
    CompareData, DashboardData, EngagementEntry, HiddenGem, KpiSummary, LeaderboardEntry,
    SentimentDistribution,
};
use crate::error::InsightsResult;
use crate::io::export_filtered_csv;
use crate::models::{AppRecord, AppTable, FilterCriteria};
use crate::services::trends::{today, TrendGenerator};
use crate::services::{compare, distributions, insights, rankings};
use crate::transformations::filter_records;

pub struct DashboardQuery<'a> {
    table: &'a AppTable,
    criteria: FilterCriteria,
    filtered: Vec<&'a AppRecord>,
}

impl<'a> DashboardQuery<'a> {
    pub fn new(table: &'a AppTable, criteria: FilterCriteria) -> Self {
        let filtered = filter_records(&table.records, &criteria);
        debug!(
            "Filter min_rating={} sentiments={:?} kept {}/{} apps",
            criteria.min_rating,
            criteria.allowed_sentiments,
            filtered.len(),
            table.len()
        );
        Self {
            table,
            criteria,
            filtered,
        }
    }

    pub fn filtered(&self) -> &[&'a AppRecord] {
        &self.filtered
    }

    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        rankings::compute_leaderboard(&self.filtered, self.criteria.top_n)
    }

    pub fn hidden_gems(&self) -> Vec<HiddenGem> {
        rankings::compute_hidden_gems(&self.table.records)
    }

    pub fn top_engagement(&self) -> Vec<EngagementEntry> {
        rankings::compute_top_engagement(&self.table.records)
    }

    pub fn sentiment_distribution(&self) -> SentimentDistribution {
        distributions::compute_sentiment_distribution(&self.filtered)
    }

    pub fn kpis(&self) -> KpiSummary {
        insights::compute_kpis(&self.filtered, &self.leaderboard())
    }

    /// Compare the named leaderboard apps; no names means the default pair.
    pub fn compare(
        &self,
        names: &[String],
        generator: &mut TrendGenerator,
    ) -> InsightsResult<CompareData> {
        let leaderboard = self.leaderboard();
        let names = if names.is_empty() {
            compare::default_selection(&leaderboard)
        } else {
            names.to_vec()
        };
        compare::compute_compare_data(&leaderboard, &names, generator, today())
    }

    /// The filtered set as a CSV download.
    pub fn export_csv(&self) -> InsightsResult<String> {
        export_filtered_csv(&self.filtered, self.table.reviews_format)
    }

    /// All dashboard views; leaderboard rows get a sparkline when a generator is given.
    ///
    /// A sparkline is seeded from the rating of the first row carrying that app name.
    pub fn dashboard(&self, generator: Option<&mut TrendGenerator>) -> DashboardData {
        let mut leaderboard = self.leaderboard();
        if let Some(generator) = generator {
            let end = today();
            let ratings: Vec<f64> = leaderboard
                .iter()
                .map(|entry| first_rating(&leaderboard, &entry.app).unwrap_or(entry.rating))
                .collect();
            for (entry, rating) in leaderboard.iter_mut().zip(ratings) {
                entry.sparkline = Some(generator.series(rating, end));
            }
        }
        let kpis = insights::compute_kpis(&self.filtered, &leaderboard);

        DashboardData {
            criteria: self.criteria.clone(),
            kpis,
            leaderboard,
            hidden_gems: self.hidden_gems(),
            top_engagement: self.top_engagement(),
            sentiment_distribution: self.sentiment_distribution(),
        }
    }
}

fn first_rating(leaderboard: &[LeaderboardEntry], app: &str) -> Option<f64> {
    leaderboard
        .iter()
        .find(|entry| entry.app == app)
        .map(|entry| entry.rating)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;

    fn table() -> AppTable {
        AppTable::from(vec![
            AppRecord::derive("A", 100.0, 4.5),
            AppRecord::derive("B", 10.0, 4.1),
            AppRecord::derive("C", 1000.0, 3.0),
            AppRecord::derive("D", 5.0, 2.2),
            AppRecord::derive("E", 7.0, 0.0),
        ])
    }

    #[test]
    fn test_two_qualifying_rows() {
        let records = table();
        let query = DashboardQuery::new(&records, FilterCriteria::new(4.0, [Sentiment::Positive], 3));
        assert_eq!(query.leaderboard().len(), 2);
        assert_eq!(query.kpis().total_apps, 2);
    }

    #[test]
    fn test_empty_filtered_set() {
        let records = table();
        let query = DashboardQuery::new(&records, FilterCriteria::new(5.0, Sentiment::ALL, 10));
        let data = query.dashboard(None);
        assert!(data.leaderboard.is_empty());
        assert_eq!(data.kpis, KpiSummary::default());
        assert_eq!(data.sentiment_distribution.total, 0);
        // Whole-table views are unaffected.
        assert_eq!(data.hidden_gems.len(), 5);
        assert_eq!(data.top_engagement.len(), 5);
    }

    #[test]
    fn test_dashboard_sparklines() {
        let records = table();
        let query = DashboardQuery::new(&records, FilterCriteria::default());
        let mut generator = TrendGenerator::seeded(11);

        let with = query.dashboard(Some(&mut generator));
        assert!(with
            .leaderboard
            .iter()
            .all(|e| e.sparkline.as_ref().map(Vec::len) == Some(5)));

        let without = query.dashboard(None);
        assert!(without.leaderboard.iter().all(|e| e.sparkline.is_none()));
        assert_eq!(with.kpis, without.kpis);
    }

    #[test]
    fn test_duplicate_names_share_first_rating() {
        let records = AppTable::from(vec![
            AppRecord::derive("Dup", 100.0, 4.0),
            AppRecord::derive("Dup", 100.0, 1.0),
        ]);
        let query = DashboardQuery::new(&records, FilterCriteria::new(0.0, Sentiment::ALL, 10));
        let data = query.dashboard(Some(&mut TrendGenerator::seeded(3)));

        assert_eq!(data.leaderboard.len(), 2);
        assert_eq!(data.leaderboard[1].rating, 1.0);
        let second = data.leaderboard[1].sparkline.as_ref().unwrap();
        assert!(second.iter().all(|point| point.rating > 2.0));
    }

    #[test]
    fn test_compare_defaults_to_first_two() {
        let records = table();
        let query = DashboardQuery::new(&records, FilterCriteria::default());
        let data = query.compare(&[], &mut TrendGenerator::seeded(1)).unwrap();
        let names: Vec<&str> = data.apps.iter().map(|a| a.app.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_export_covers_filtered_set() {
        let records = table();
        let query = DashboardQuery::new(&records, FilterCriteria::new(3.0, Sentiment::ALL, 1));
        let csv = query.export_csv().unwrap();
        // header + A, B, C regardless of top_n
        assert_eq!(csv.lines().count(), 4);
        assert!(csv.lines().nth(1).unwrap().starts_with("A,100,4.5,"));
    }

    #[test]
    fn test_export_uses_table_reviews_format() {
        let records = AppTable::new(
            vec![AppRecord::derive("A", 100.0, 4.5)],
            crate::models::ReviewsFormat::Float,
        );
        let query = DashboardQuery::new(&records, FilterCriteria::default());
        let csv = query.export_csv().unwrap();
        assert!(csv.lines().nth(1).unwrap().starts_with("A,100.0,4.5,"));
    }
}
