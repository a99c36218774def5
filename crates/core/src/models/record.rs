use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreError;

/// A single sales transaction.
///
/// Records are created once (by the sample generator or an import) and
/// never mutated afterwards; every derived value is recomputed from the
/// record list on demand.
///
/// `category` and `region` come from small closed sets in practice, but
/// the engine treats them as arbitrary strings. Soft invariant, not
/// enforced: `profit ≈ revenue - cost`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Unique identifier
    pub id: Uuid,

    /// Transaction date (no time component — daily granularity)
    pub date: NaiveDate,

    /// Product display name (e.g., "Fitness Tracker")
    pub product: String,

    /// Product category (e.g., "Electronics")
    pub category: String,

    /// Sales region (e.g., "Europe")
    pub region: String,

    /// Store the sale was made at (e.g., "Berlin Store")
    pub store: String,

    /// Gross revenue of the transaction
    pub revenue: f64,

    /// Number of units sold
    pub units: u32,

    /// Profit (revenue minus cost)
    pub profit: f64,

    /// Cost of goods sold
    pub cost: f64,
}

impl TransactionRecord {
    /// Create a record with a fresh random id.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: NaiveDate,
        product: impl Into<String>,
        category: impl Into<String>,
        region: impl Into<String>,
        store: impl Into<String>,
        revenue: f64,
        units: u32,
        profit: f64,
        cost: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            product: product.into(),
            category: category.into(),
            region: region.into(),
            store: store.into(),
            revenue,
            units,
            profit,
            cost,
        }
    }

    /// Validate the record: display strings must be non-empty, numeric
    /// measures finite and non-negative.
    ///
    /// Only construction paths (`RetailDashboard::from_records`, JSON
    /// import) validate. The query path assumes well-formed records; a
    /// NaN slipping past a caller who skipped validation propagates
    /// into the affected sums without corrupting unrelated groups.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in [
            ("product", &self.product),
            ("category", &self.category),
            ("region", &self.region),
            ("store", &self.store),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::ValidationError(format!(
                    "record {}: '{field}' must not be empty",
                    self.id
                )));
            }
        }

        for (field, value) in [
            ("revenue", self.revenue),
            ("profit", self.profit),
            ("cost", self.cost),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::ValidationError(format!(
                    "record {}: '{field}' must be a non-negative finite number, got {value}",
                    self.id
                )));
            }
        }

        Ok(())
    }
}

/// Sort order for record listings (data-table panel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSortOrder {
    /// Newest date first (default for display)
    DateDesc,
    /// Oldest date first
    DateAsc,
    /// Largest revenue first
    RevenueDesc,
    /// Smallest revenue first
    RevenueAsc,
    /// Alphabetical by product name
    ProductAsc,
    /// Reverse alphabetical by product name
    ProductDesc,
}
