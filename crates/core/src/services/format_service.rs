use crate::models::chart::MeasureKind;

/// Pure display formatting for KPI and chart values.
///
/// Locale is fixed to US English: `$` currency symbol, `,` thousands
/// separator, `.` decimal point. Currency renders with zero decimal
/// places, percentages with one, counts as grouped integers.
pub struct FormatService;

impl FormatService {
    pub fn new() -> Self {
        Self
    }

    /// Format a value according to its semantic kind.
    ///
    /// Non-finite input (NaN, infinities) renders the "no data"
    /// placeholder `N/A` instead of panicking or printing `NaN`.
    #[must_use]
    pub fn format_measure(&self, value: f64, kind: MeasureKind) -> String {
        if !value.is_finite() {
            return "N/A".to_string();
        }

        match kind {
            MeasureKind::Currency => {
                let grouped = Self::group_thousands(value.abs().round() as u64);
                if value < 0.0 {
                    format!("-${grouped}")
                } else {
                    format!("${grouped}")
                }
            }
            MeasureKind::Percentage => format!("{value:.1}%"),
            MeasureKind::Count => {
                let grouped = Self::group_thousands(value.abs().round() as u64);
                if value < 0.0 {
                    format!("-{grouped}")
                } else {
                    grouped
                }
            }
        }
    }

    /// Insert `,` separators between groups of three digits.
    fn group_thousands(value: u64) -> String {
        let digits = value.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

        for (i, digit) in digits.chars().enumerate() {
            let remaining = digits.len() - i;
            if i > 0 && remaining % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        grouped
    }
}

impl Default for FormatService {
    fn default() -> Self {
        Self::new()
    }
}
