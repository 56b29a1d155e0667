//! Grace-period evaluation.
//!
//! After the last contribution, an insured person retains benefit-eligible
//! status for a statutory grace window (365 days). The subsistence rural
//! worker ("segurado especial") is exempt: their status never lapses through
//! elapsed time alone.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::InsuredCategory;

/// The result of classifying an insured person's grace-period status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GracePeriodResult {
    /// The category evaluated.
    pub category: InsuredCategory,
    /// Whether insured status is retained.
    pub valid: bool,
    /// Days elapsed since the last contribution.
    pub elapsed_days: i64,
    /// Days left in the grace window (zero once expired). `None` for the
    /// rural-pure category, which has no window.
    pub remaining_days: Option<i64>,
}

/// Classifies whether an insured person retains benefit-eligible status.
///
/// This is a pure classification, not a validation gate: it never fails.
/// `today` is an explicit parameter so the result is deterministic.
///
/// # Examples
///
/// ```
/// use benefit_engine::calculation::evaluate_grace_period;
/// use benefit_engine::models::InsuredCategory;
/// use chrono::NaiveDate;
///
/// let last = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// let today = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
///
/// let result = evaluate_grace_period(InsuredCategory::Urban, last, today, 365);
/// assert!(result.valid);
/// assert_eq!(result.elapsed_days, 184);
/// assert_eq!(result.remaining_days, Some(181));
/// ```
pub fn evaluate_grace_period(
    category: InsuredCategory,
    last_contribution: NaiveDate,
    today: NaiveDate,
    window_days: i64,
) -> GracePeriodResult {
    let elapsed_days = (today - last_contribution).num_days();

    if category == InsuredCategory::RuralPure {
        // Special insured status has no day limit.
        return GracePeriodResult {
            category,
            valid: true,
            elapsed_days,
            remaining_days: None,
        };
    }

    GracePeriodResult {
        category,
        valid: elapsed_days <= window_days,
        elapsed_days,
        remaining_days: Some((window_days - elapsed_days).max(0)),
    }
}
