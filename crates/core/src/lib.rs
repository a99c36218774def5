pub mod errors;
pub mod models;
pub mod sample;
pub mod services;

use std::collections::HashSet;

use chrono::NaiveDate;

use errors::CoreError;
use models::{
    chart::{ChartSeriesPoint, Dimension, Measure, MeasureKind},
    filter::{FilterCriteria, FilterOptions},
    kpi::KpiSummary,
    record::{RecordSortOrder, TransactionRecord},
    snapshot::DashboardSnapshot,
};
use sample::generator::SampleDataGenerator;
use services::{
    analytics_service::AnalyticsService, chart_service::ChartService,
    filter_service::FilterService, format_service::FormatService,
    options_service::OptionsService,
};

/// Main entry point for the Retail Dashboard core library.
///
/// Holds the session's transaction records (immutable once loaded) and
/// the services that answer queries over them. Every query is a pure
/// function of `(records, criteria, as_of)`: no hidden state, identical
/// inputs give identical outputs, so the presentation layer may call on
/// every filter-control change and memoize freely.
#[must_use]
pub struct RetailDashboard {
    records: Vec<TransactionRecord>,
    filter_service: FilterService,
    chart_service: ChartService,
    analytics_service: AnalyticsService,
    options_service: OptionsService,
    format_service: FormatService,
}

impl std::fmt::Debug for RetailDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetailDashboard")
            .field("records", &self.records.len())
            .finish()
    }
}

impl RetailDashboard {
    /// Build a dashboard over an existing record list.
    ///
    /// Every record is validated and ids must be unique; the first
    /// violation is returned as an error and nothing is kept.
    pub fn from_records(records: Vec<TransactionRecord>) -> Result<Self, CoreError> {
        let mut seen = HashSet::new();
        for record in &records {
            record.validate()?;
            if !seen.insert(record.id) {
                return Err(CoreError::DuplicateRecordId(record.id.to_string()));
            }
        }
        Ok(Self::build(records))
    }

    /// Build a dashboard over freshly generated sample data.
    pub fn with_sample_data(count: usize) -> Self {
        Self::build(SampleDataGenerator::new().generate(count))
    }

    /// Build a dashboard over seeded sample data (reproducible).
    pub fn with_seeded_sample_data(count: usize, seed: u64) -> Self {
        Self::build(SampleDataGenerator::with_seed(seed).generate(count))
    }

    /// Build a dashboard from a JSON array of records (validated).
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let records: Vec<TransactionRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    // ── Record Access ───────────────────────────────────────────────

    /// The full record list, in load order.
    #[must_use]
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Number of records in the session.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Date of the earliest record, if any.
    #[must_use]
    pub fn earliest_record_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|r| r.date).min()
    }

    /// Date of the latest record, if any.
    #[must_use]
    pub fn latest_record_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|r| r.date).max()
    }

    // ── Filtering ───────────────────────────────────────────────────

    /// Records matching the criteria, with the relative date window
    /// resolved against `as_of`. Preserves load order.
    #[must_use]
    pub fn filter_records(
        &self,
        criteria: &FilterCriteria,
        as_of: NaiveDate,
    ) -> Vec<TransactionRecord> {
        self.filter_service.apply(&self.records, criteria, as_of)
    }

    /// Number of records matching the criteria.
    #[must_use]
    pub fn matching_record_count(&self, criteria: &FilterCriteria, as_of: NaiveDate) -> usize {
        self.filter_service
            .count_matches(&self.records, criteria, as_of)
    }

    /// The universe of selectable filter values. Derived from the full
    /// record list, independent of any current selection.
    #[must_use]
    pub fn filter_options(&self) -> FilterOptions {
        self.options_service.derive(&self.records)
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Chart series over the filtered records: group by `dimension`,
    /// sum `measure` per group.
    #[must_use]
    pub fn chart_series(
        &self,
        criteria: &FilterCriteria,
        dimension: Dimension,
        measure: Measure,
        as_of: NaiveDate,
    ) -> Vec<ChartSeriesPoint> {
        let subset = self.filter_service.apply(&self.records, criteria, as_of);
        self.chart_service.group_by(&subset, dimension, measure)
    }

    // ── Analytics ───────────────────────────────────────────────────

    /// KPI card values over the filtered records.
    #[must_use]
    pub fn kpi_summary(&self, criteria: &FilterCriteria, as_of: NaiveDate) -> KpiSummary {
        let subset = self.filter_service.apply(&self.records, criteria, as_of);
        self.analytics_service.summarize(&subset)
    }

    /// Everything one dashboard screen renders, in a single call:
    /// KPIs, the standard chart series and the filter universe.
    #[must_use]
    pub fn snapshot(&self, criteria: &FilterCriteria, as_of: NaiveDate) -> DashboardSnapshot {
        let subset = self.filter_service.apply(&self.records, criteria, as_of);

        DashboardSnapshot {
            as_of,
            filters: criteria.clone(),
            kpis: self.analytics_service.summarize(&subset),
            sales_trend: self
                .chart_service
                .group_by(&subset, Dimension::Date, Measure::Revenue),
            units_trend: self
                .chart_service
                .group_by(&subset, Dimension::Date, Measure::Units),
            revenue_by_category: self
                .chart_service
                .group_by(&subset, Dimension::Category, Measure::Revenue),
            profit_by_category: self
                .chart_service
                .group_by(&subset, Dimension::Category, Measure::Profit),
            revenue_by_region: self
                .chart_service
                .group_by(&subset, Dimension::Region, Measure::Revenue),
            options: self.options_service.derive(&self.records),
        }
    }

    /// Snapshot evaluated against today's date.
    #[must_use]
    pub fn current_snapshot(&self, criteria: &FilterCriteria) -> DashboardSnapshot {
        self.snapshot(criteria, chrono::Utc::now().date_naive())
    }

    // ── Formatting ──────────────────────────────────────────────────

    /// Format a value for display according to its semantic kind
    /// (fixed US-English locale).
    #[must_use]
    pub fn format_measure(&self, value: f64, kind: MeasureKind) -> String {
        self.format_service.format_measure(value, kind)
    }

    // ── Search & Sorting ────────────────────────────────────────────

    /// Records whose product, category, region or store contains the
    /// query (case-insensitive). Preserves load order.
    #[must_use]
    pub fn search_records(&self, query: &str) -> Vec<&TransactionRecord> {
        let q = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.product.to_lowercase().contains(&q)
                    || r.category.to_lowercase().contains(&q)
                    || r.region.to_lowercase().contains(&q)
                    || r.store.to_lowercase().contains(&q)
            })
            .collect()
    }

    /// Records in a specific listing order (for a data-table panel).
    #[must_use]
    pub fn records_sorted(&self, order: &RecordSortOrder) -> Vec<&TransactionRecord> {
        let mut records: Vec<&TransactionRecord> = self.records.iter().collect();
        match order {
            RecordSortOrder::DateDesc => records.sort_by(|a, b| b.date.cmp(&a.date)),
            RecordSortOrder::DateAsc => records.sort_by(|a, b| a.date.cmp(&b.date)),
            RecordSortOrder::RevenueDesc => records.sort_by(|a, b| {
                b.revenue
                    .partial_cmp(&a.revenue)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            RecordSortOrder::RevenueAsc => records.sort_by(|a, b| {
                a.revenue
                    .partial_cmp(&b.revenue)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            RecordSortOrder::ProductAsc => records.sort_by(|a, b| a.product.cmp(&b.product)),
            RecordSortOrder::ProductDesc => records.sort_by(|a, b| b.product.cmp(&a.product)),
        }
        records
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export all records as a JSON array.
    pub fn export_records_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.records)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize records: {e}")))
    }

    /// Export all records as CSV.
    /// Columns: id, date, product, category, region, store, revenue,
    /// units, profit, cost
    #[must_use]
    pub fn export_records_to_csv(&self) -> String {
        let mut csv =
            String::from("id,date,product,category,region,store,revenue,units,profit,cost\n");
        for record in &self.records {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{},{},{}\n",
                record.id,
                record.date,
                escape_csv_field(&record.product),
                escape_csv_field(&record.category),
                escape_csv_field(&record.region),
                escape_csv_field(&record.store),
                record.revenue,
                record.units,
                record.profit,
                record.cost,
            ));
        }
        csv
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(records: Vec<TransactionRecord>) -> Self {
        Self {
            records,
            filter_service: FilterService::new(),
            chart_service: ChartService::new(),
            analytics_service: AnalyticsService::new(),
            options_service: OptionsService::new(),
            format_service: FormatService::new(),
        }
    }
}

/// Quote a CSV field when it contains commas, quotes or newlines.
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
