use serde::{Deserialize, Serialize};

use super::record::TransactionRecord;

/// Semantic kind of a displayed value, selecting its display format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasureKind {
    /// Whole US dollars with thousands separators (e.g., "$1,235")
    Currency,
    /// One decimal place with a percent sign (e.g., "16.7%")
    Percentage,
    /// Integer with thousands separators (e.g., "1,234")
    Count,
}

/// Record attribute used as the aggregation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    /// Group by transaction date (series sorted chronologically)
    Date,
    /// Group by category (series sorted by descending value)
    Category,
    /// Group by region (series sorted by descending value, with
    /// per-group transaction counts)
    Region,
}

impl Dimension {
    /// The group label a record contributes to under this dimension.
    /// Date labels use ISO-8601 format, so their lexicographic order is
    /// chronological.
    #[must_use]
    pub fn label_of(self, record: &TransactionRecord) -> String {
        match self {
            Dimension::Date => record.date.to_string(),
            Dimension::Category => record.category.clone(),
            Dimension::Region => record.region.clone(),
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Date => write!(f, "date"),
            Dimension::Category => write!(f, "category"),
            Dimension::Region => write!(f, "region"),
        }
    }
}

/// Numeric record attribute being summed per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Measure {
    Revenue,
    Profit,
    Cost,
    Units,
}

impl Measure {
    /// Extract this measure's value from a record.
    #[must_use]
    pub fn value_of(self, record: &TransactionRecord) -> f64 {
        match self {
            Measure::Revenue => record.revenue,
            Measure::Profit => record.profit,
            Measure::Cost => record.cost,
            Measure::Units => f64::from(record.units),
        }
    }

    /// How values of this measure are rendered for display.
    #[must_use]
    pub fn kind(self) -> MeasureKind {
        match self {
            Measure::Revenue | Measure::Profit | Measure::Cost => MeasureKind::Currency,
            Measure::Units => MeasureKind::Count,
        }
    }
}

impl std::fmt::Display for Measure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Measure::Revenue => write!(f, "revenue"),
            Measure::Profit => write!(f, "profit"),
            Measure::Cost => write!(f, "cost"),
            Measure::Units => write!(f, "units"),
        }
    }
}

/// One aggregated point of a chart series.
///
/// The core computes all the numbers; the frontend only renders.
/// Produced fresh per aggregation call, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeriesPoint {
    /// Group label: an ISO date, a category name, or a region name
    pub label: String,

    /// Sum of the chosen measure over the group's records
    pub value: f64,

    /// Number of contributing records; populated for region groupings
    /// only (feeds the "transactions" sub-label)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_count: Option<usize>,
}
