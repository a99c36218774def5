use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::chart::ChartSeriesPoint;
use super::filter::{FilterCriteria, FilterOptions};
use super::kpi::KpiSummary;

/// Everything one dashboard screen needs, computed in a single call.
///
/// Bundles the KPI cards, the chart series and the filter-option
/// universe for a given filter selection and evaluation date. The
/// applied criteria and date are echoed back so the presentation layer
/// can label the view without tracking them separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Evaluation date the relative date window was resolved against
    pub as_of: NaiveDate,

    /// The filter selection this snapshot was computed for
    pub filters: FilterCriteria,

    /// KPI card values over the filtered records
    pub kpis: KpiSummary,

    /// Revenue by date, chronological
    pub sales_trend: Vec<ChartSeriesPoint>,

    /// Units sold by date, chronological
    pub units_trend: Vec<ChartSeriesPoint>,

    /// Revenue by category, descending
    pub revenue_by_category: Vec<ChartSeriesPoint>,

    /// Profit by category, descending
    pub profit_by_category: Vec<ChartSeriesPoint>,

    /// Revenue by region, descending, with transaction counts
    pub revenue_by_region: Vec<ChartSeriesPoint>,

    /// Filter universe derived from the unfiltered record list
    pub options: FilterOptions,
}
