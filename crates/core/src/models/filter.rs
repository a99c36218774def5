use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Relative date window for filtering, always interpreted against the
/// evaluation date passed into the query (never a stored timestamp).
/// Callers inject a fixed date in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateWindow {
    /// No date constraint
    #[default]
    All,
    /// Last 7 days up to the evaluation date
    Last7Days,
    /// Last 30 days
    Last30Days,
    /// Last 90 days
    Last90Days,
    /// Last 365 days
    LastYear,
}

impl DateWindow {
    /// Earliest date (inclusive) a record may carry to pass the window,
    /// or `None` when the window is unbounded.
    #[must_use]
    pub fn cutoff(self, as_of: NaiveDate) -> Option<NaiveDate> {
        let days = match self {
            DateWindow::All => return None,
            DateWindow::Last7Days => 7,
            DateWindow::Last30Days => 30,
            DateWindow::Last90Days => 90,
            DateWindow::LastYear => 365,
        };
        Some(as_of - Duration::days(days))
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateWindow::All => write!(f, "all"),
            DateWindow::Last7Days => write!(f, "7d"),
            DateWindow::Last30Days => write!(f, "30d"),
            DateWindow::Last90Days => write!(f, "90d"),
            DateWindow::LastYear => write!(f, "1y"),
        }
    }
}

/// The active filter selection, owned by the presentation layer and
/// passed by reference into every query. The engine holds no filter
/// state of its own.
///
/// Each constraint is either absent (no restriction) or an exact-match
/// string; active constraints combine with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Exact category match, if set
    pub category: Option<String>,

    /// Exact region match, if set
    pub region: Option<String>,

    /// Exact store match, if set
    pub store: Option<String>,

    /// Relative date window (default: unbounded)
    #[serde(default)]
    pub date_window: DateWindow,
}

impl FilterCriteria {
    /// Criteria with no constraints (matches every record).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience builders for common selections
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    #[must_use]
    pub fn with_store(mut self, store: impl Into<String>) -> Self {
        self.store = Some(store.into());
        self
    }

    #[must_use]
    pub fn with_date_window(mut self, window: DateWindow) -> Self {
        self.date_window = window;
        self
    }

    /// `true` when no constraint is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.region.is_none()
            && self.store.is_none()
            && self.date_window == DateWindow::All
    }
}

/// Inclusive date range covered by a record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// The universe of selectable filter values, derived from the full
/// (unfiltered) record list so the filter UI always offers every choice
/// regardless of the current selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Distinct categories, sorted alphabetically
    pub categories: Vec<String>,

    /// Distinct regions, sorted alphabetically
    pub regions: Vec<String>,

    /// Distinct stores, sorted alphabetically
    pub stores: Vec<String>,

    /// Earliest and latest record date; `None` for an empty record list
    pub date_span: Option<DateSpan>,
}
