use chrono::NaiveDate;

use crate::models::filter::FilterCriteria;
use crate::models::record::TransactionRecord;

/// Narrows a record list to the subset matching a filter selection.
///
/// Pure business logic: no I/O, no hidden state. The relative date
/// window is resolved against the `as_of` date the caller passes in,
/// so tests can pin the clock.
pub struct FilterService;

impl FilterService {
    pub fn new() -> Self {
        Self
    }

    /// Apply the criteria to `records` and return the matching subset.
    ///
    /// Active constraints combine with logical AND: exact string match
    /// on category/region/store, and `date >= as_of - window` when the
    /// date window is bounded. The input is not mutated; the result
    /// preserves the original relative order. An empty result is valid.
    ///
    /// Idempotent for a fixed `as_of`: re-applying the same criteria to
    /// the result returns an equal list.
    pub fn apply(
        &self,
        records: &[TransactionRecord],
        criteria: &FilterCriteria,
        as_of: NaiveDate,
    ) -> Vec<TransactionRecord> {
        let cutoff = criteria.date_window.cutoff(as_of);

        records
            .iter()
            .filter(|r| Self::matches(r, criteria, cutoff))
            .cloned()
            .collect()
    }

    /// Count the matches without materializing the subset.
    #[must_use]
    pub fn count_matches(
        &self,
        records: &[TransactionRecord],
        criteria: &FilterCriteria,
        as_of: NaiveDate,
    ) -> usize {
        let cutoff = criteria.date_window.cutoff(as_of);

        records
            .iter()
            .filter(|r| Self::matches(r, criteria, cutoff))
            .count()
    }

    fn matches(
        record: &TransactionRecord,
        criteria: &FilterCriteria,
        cutoff: Option<NaiveDate>,
    ) -> bool {
        criteria
            .category
            .as_ref()
            .map_or(true, |c| &record.category == c)
            && criteria
                .region
                .as_ref()
                .map_or(true, |r| &record.region == r)
            && criteria.store.as_ref().map_or(true, |s| &record.store == s)
            && cutoff.map_or(true, |earliest| record.date >= earliest)
    }
}

impl Default for FilterService {
    fn default() -> Self {
        Self::new()
    }
}
