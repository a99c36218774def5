use serde::{Deserialize, Serialize};

/// The dashboard's key-performance-indicator card values, fully
/// determined by the record list they were computed from.
///
/// Ratios that can be undefined are `Option<f64>`: `None` is the
/// documented "no data" sentinel, used instead of NaN or a panic when
/// the denominator is zero or a baseline is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    /// Sum of revenue over all records
    pub total_sales: f64,

    /// Sum of profit over all records
    pub total_profit: f64,

    /// Number of records
    pub total_transactions: usize,

    /// total_profit / total_sales × 100; `None` when there are no sales
    pub profit_margin: Option<f64>,

    /// total_sales / total_transactions; `None` when there are no records
    pub avg_transaction_value: Option<f64>,

    /// Year-over-year revenue change in percent, comparing the calendar
    /// year of the latest record against the year before it; `None`
    /// without a positive prior-year baseline
    pub sales_growth: Option<f64>,

    /// Year-over-year profit change in percent; same baseline rule
    pub profit_growth: Option<f64>,

    /// Product with the highest summed revenue; ties go to the product
    /// encountered first in input order; `None` for an empty record list
    pub top_selling_product: Option<String>,
}

impl KpiSummary {
    /// Summary of an empty record list: zero totals, every ratio `None`.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_sales: 0.0,
            total_profit: 0.0,
            total_transactions: 0,
            profit_margin: None,
            avg_transaction_value: None,
            sales_growth: None,
            profit_growth: None,
            top_selling_product: None,
        }
    }
}

impl Default for KpiSummary {
    fn default() -> Self {
        Self::empty()
    }
}
