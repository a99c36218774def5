use std::collections::HashMap;

use crate::models::chart::{ChartSeriesPoint, Dimension, Measure};
use crate::models::record::TransactionRecord;

/// Turns a (filtered) record list into chart-ready series.
///
/// The core computes all the numbers; the frontend only renders.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Group `records` by `dimension` and sum `measure` per group.
    ///
    /// Ordering policy:
    /// - `Date`: ascending chronological (ISO labels sort
    ///   lexicographically in date order), irrespective of value.
    /// - `Category` / `Region`: descending by summed value; the sort is
    ///   stable, so tied groups keep first-encounter order.
    ///
    /// Region groupings also carry the number of contributing records
    /// per group. Groups with no contributing records never appear (no
    /// zero-filling), and grouping neither loses nor double-counts:
    /// the values of any series sum to the measure's overall total.
    pub fn group_by(
        &self,
        records: &[TransactionRecord],
        dimension: Dimension,
        measure: Measure,
    ) -> Vec<ChartSeriesPoint> {
        let count_transactions = dimension == Dimension::Region;

        // Accumulate in first-encounter order; the index map only
        // locates a label's slot.
        let mut points: Vec<ChartSeriesPoint> = Vec::new();
        let mut slot_by_label: HashMap<String, usize> = HashMap::new();

        for record in records {
            let label = dimension.label_of(record);
            let value = measure.value_of(record);

            match slot_by_label.get(&label) {
                Some(&slot) => {
                    let point = &mut points[slot];
                    point.value += value;
                    if let Some(count) = point.transaction_count.as_mut() {
                        *count += 1;
                    }
                }
                None => {
                    slot_by_label.insert(label.clone(), points.len());
                    points.push(ChartSeriesPoint {
                        label,
                        value,
                        transaction_count: count_transactions.then_some(1),
                    });
                }
            }
        }

        match dimension {
            Dimension::Date => points.sort_by(|a, b| a.label.cmp(&b.label)),
            Dimension::Category | Dimension::Region => points.sort_by(|a, b| {
                b.value
                    .partial_cmp(&a.value)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
        }

        points
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
