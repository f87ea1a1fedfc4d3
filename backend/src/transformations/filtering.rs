use crate::models::{AppRecord, FilterCriteria};

/// Records passing the rating threshold and sentiment whitelist, in table order.
pub fn filter_records<'a>(records: &'a [AppRecord], criteria: &FilterCriteria) -> Vec<&'a AppRecord> {
    records
        .iter()
        .filter(|record| criteria.matches(record.rating, record.sentiment))
        .collect()
}
