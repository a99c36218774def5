use std::collections::HashSet;

use crate::models::filter::{DateSpan, FilterOptions};
use crate::models::record::TransactionRecord;

/// Derives the filter-option universe from the full record list.
///
/// Always fed the unfiltered records: the filter UI offers every
/// choice that exists in the data, not just the choices valid under
/// the current selection.
pub struct OptionsService;

impl OptionsService {
    pub fn new() -> Self {
        Self
    }

    /// Distinct values per filterable dimension plus the overall date
    /// span. Values are deduplicated and sorted alphabetically for a
    /// deterministic order; the span is `None` for an empty list.
    #[must_use]
    pub fn derive(&self, records: &[TransactionRecord]) -> FilterOptions {
        let date_span = records
            .iter()
            .map(|r| r.date)
            .min()
            .zip(records.iter().map(|r| r.date).max())
            .map(|(start, end)| DateSpan { start, end });

        FilterOptions {
            categories: Self::distinct_sorted(records, |r| r.category.as_str()),
            regions: Self::distinct_sorted(records, |r| r.region.as_str()),
            stores: Self::distinct_sorted(records, |r| r.store.as_str()),
            date_span,
        }
    }

    fn distinct_sorted<'a>(
        records: &'a [TransactionRecord],
        field: impl Fn(&'a TransactionRecord) -> &'a str,
    ) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut values: Vec<&str> = records
            .iter()
            .map(field)
            .filter(|v| seen.insert(*v))
            .collect();
        values.sort_unstable();
        values.into_iter().map(str::to_owned).collect()
    }
}

impl Default for OptionsService {
    fn default() -> Self {
        Self::new()
    }
}
