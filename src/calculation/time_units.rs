//! Time-unit normalization.
//!
//! Contribution time arrives from callers as a scalar plus a unit tag that
//! may be missing or ambiguous. This module converts such values to a
//! canonical month count and formats month counts back into a year/month
//! breakdown for display.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A time unit tag for contribution-time scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    /// The scalar is a year count.
    Years,
    /// The scalar is a month count.
    Months,
}

impl FromStr for TimeUnit {
    type Err = EngineError;

    /// Parses a unit tag. Accepts Portuguese and English spellings, singular
    /// or plural.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ano" | "anos" | "year" | "years" => Ok(TimeUnit::Years),
            "mes" | "meses" | "month" | "months" => Ok(TimeUnit::Months),
            _ => Err(EngineError::UnknownTimeUnit {
                value: s.to_string(),
            }),
        }
    }
}

/// Threshold for the ambiguous-unit heuristic.
///
/// When no unit tag is supplied, a value above this threshold is treated as
/// already being a month count, and anything at or below it as a year count.
/// This heuristic is inherited from the original engine (no real
/// contribution history exceeds 50 years, while month counts routinely do);
/// it is documented behavior, not something to silently redesign.
pub const AMBIGUOUS_MONTHS_THRESHOLD: u32 = 50;

/// Converts a scalar with an optional unit tag to a canonical month count.
///
/// Years are multiplied by 12; months pass through unchanged. A missing
/// unit falls back to the [`AMBIGUOUS_MONTHS_THRESHOLD`] heuristic.
///
/// # Examples
///
/// ```
/// use benefit_engine::calculation::{to_months, TimeUnit};
///
/// assert_eq!(to_months(27, Some(TimeUnit::Years)), 324);
/// assert_eq!(to_months(324, Some(TimeUnit::Months)), 324);
///
/// // Ambiguous: 27 is below the threshold, so it is read as years.
/// assert_eq!(to_months(27, None), 324);
/// // Ambiguous: 324 is above the threshold, so it is already months.
/// assert_eq!(to_months(324, None), 324);
/// ```
pub fn to_months(value: u32, unit: Option<TimeUnit>) -> u32 {
    match unit {
        Some(TimeUnit::Years) => value * 12,
        Some(TimeUnit::Months) => value,
        None => {
            if value > AMBIGUOUS_MONTHS_THRESHOLD {
                value
            } else {
                value * 12
            }
        }
    }
}

/// A month count split into whole years and remaining months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthsBreakdown {
    /// Whole years.
    pub years: u32,
    /// Remaining months (0..12).
    pub months: u32,
    /// Human-readable rendering, omitting zero components.
    pub display: String,
}

/// Splits a month count into years and months and renders it for display.
///
/// The display string omits a component that is zero ("27 years",
/// "5 months", "27 years and 3 months"). A total of zero renders as
/// "0 months".
///
/// # Examples
///
/// ```
/// use benefit_engine::calculation::format_months;
///
/// let breakdown = format_months(327);
/// assert_eq!(breakdown.years, 27);
/// assert_eq!(breakdown.months, 3);
/// assert_eq!(breakdown.display, "27 years and 3 months");
///
/// assert_eq!(format_months(324).display, "27 years");
/// assert_eq!(format_months(5).display, "5 months");
/// assert_eq!(format_months(0).display, "0 months");
/// ```
pub fn format_months(total_months: u32) -> MonthsBreakdown {
    let years = total_months / 12;
    let months = total_months % 12;

    let display = match (years, months) {
        (0, 0) => "0 months".to_string(),
        (y, 0) => format!("{} {}", y, plural(y, "year")),
        (0, m) => format!("{} {}", m, plural(m, "month")),
        (y, m) => format!(
            "{} {} and {} {}",
            y,
            plural(y, "year"),
            m,
            plural(m, "month")
        ),
    };

    MonthsBreakdown {
        years,
        months,
        display,
    }
}

fn plural(n: u32, unit: &str) -> String {
    if n == 1 {
        unit.to_string()
    } else {
        format!("{}s", unit)
    }
}
