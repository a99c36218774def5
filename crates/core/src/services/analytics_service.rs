use chrono::Datelike;

use crate::models::kpi::KpiSummary;
use crate::models::record::TransactionRecord;

/// Computes the KPI card values from a (filtered) record list.
///
/// Every output is fully determined by the input; repeated calls with
/// equal input produce equal summaries. Degenerate input (empty list,
/// zero totals, missing baseline year) resolves to the `None` sentinels
/// documented on `KpiSummary`, never to a panic.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Compute the full KPI summary.
    #[must_use]
    pub fn summarize(&self, records: &[TransactionRecord]) -> KpiSummary {
        let total_sales: f64 = records.iter().map(|r| r.revenue).sum();
        let total_profit: f64 = records.iter().map(|r| r.profit).sum();
        let total_transactions = records.len();

        let profit_margin = if total_sales > 0.0 {
            Some(total_profit / total_sales * 100.0)
        } else {
            None
        };

        let avg_transaction_value = if total_transactions > 0 {
            Some(total_sales / total_transactions as f64)
        } else {
            None
        };

        let (sales_growth, profit_growth) = Self::year_over_year(records);

        KpiSummary {
            total_sales,
            total_profit,
            total_transactions,
            profit_margin,
            avg_transaction_value,
            sales_growth,
            profit_growth,
            top_selling_product: Self::top_product_by_revenue(records),
        }
    }

    /// Year-over-year revenue and profit change in percent.
    ///
    /// The "current year" is the calendar year of the latest record
    /// date, so the computation stays pure in the record list and needs
    /// no clock. Growth is `(curr - prev) / prev * 100`; a year with no
    /// positive baseline yields `None` rather than a division by zero.
    fn year_over_year(records: &[TransactionRecord]) -> (Option<f64>, Option<f64>) {
        let latest = match records.iter().map(|r| r.date).max() {
            Some(date) => date,
            None => return (None, None),
        };
        let current_year = latest.year();
        let prior_year = current_year - 1;

        let mut curr_sales = 0.0;
        let mut curr_profit = 0.0;
        let mut prev_sales = 0.0;
        let mut prev_profit = 0.0;

        for record in records {
            let year = record.date.year();
            if year == current_year {
                curr_sales += record.revenue;
                curr_profit += record.profit;
            } else if year == prior_year {
                prev_sales += record.revenue;
                prev_profit += record.profit;
            }
        }

        let growth = |curr: f64, prev: f64| {
            if prev > 0.0 {
                Some((curr - prev) / prev * 100.0)
            } else {
                None
            }
        };

        (
            growth(curr_sales, prev_sales),
            growth(curr_profit, prev_profit),
        )
    }

    /// Product with the highest summed revenue.
    ///
    /// Totals accumulate in first-encounter order and the winner is
    /// replaced only on a strictly greater total, so ties resolve to
    /// the product seen first in input order, reproducibly.
    fn top_product_by_revenue(records: &[TransactionRecord]) -> Option<String> {
        let mut totals: Vec<(&str, f64)> = Vec::new();

        for record in records {
            match totals.iter_mut().find(|(name, _)| *name == record.product) {
                Some((_, total)) => *total += record.revenue,
                None => totals.push((&record.product, record.revenue)),
            }
        }

        let mut best: Option<(&str, f64)> = None;
        for (name, total) in totals {
            match best {
                Some((_, best_total)) if total <= best_total => {}
                _ => best = Some((name, total)),
            }
        }

        best.map(|(name, _)| name.to_string())
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
