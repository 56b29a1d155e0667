//! Hazardous-exposure time conversion.
//!
//! Hazardous-occupation contribution time ("tempo especial") converts to
//! common contribution time via a sex-dependent multiplier: 1.4 for men,
//! 1.2 for women. The statutory computation floors the converted value,
//! never rounds it. Exposure periods outside the statutory bounds are
//! flagged as advisory warnings, not rejected.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::config::HazardTable;
use crate::models::EvaluationWarning;

/// Returns the hazardous-time conversion multiplier for men (1.4).
pub fn male_conversion_multiplier() -> Decimal {
    Decimal::new(14, 1)
}

/// Returns the hazardous-time conversion multiplier for women (1.2).
pub fn female_conversion_multiplier() -> Decimal {
    Decimal::new(12, 1)
}

/// Advisory validation of exposure-period bounds.
///
/// All flags are informational: the conversion always completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardValidation {
    /// Hazard months exceed the statutory limit (strictly greater than;
    /// exactly at the limit is not flagged).
    pub exceeds_month_limit: bool,
    /// The exposure period starts before the regime threshold date, so a
    /// different legal regime applies to part of it.
    pub starts_before_regime_threshold: bool,
    /// The exposure start date is in the future.
    pub starts_in_future: bool,
    /// Human-readable alerts for each flagged condition.
    pub alerts: Vec<EvaluationWarning>,
}

/// The result of converting hazardous-exposure time to common time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardConversionResult {
    /// Rural contribution time in months, unchanged.
    pub rural_months: u32,
    /// Urban contribution time in months, unchanged.
    pub urban_months: u32,
    /// Hazardous-exposure time in months, before conversion.
    pub hazard_months: u32,
    /// floor(hazard × 1.4).
    pub hazard_months_converted_male: u32,
    /// floor(hazard × 1.2).
    pub hazard_months_converted_female: u32,
    /// rural + urban + converted, for a man.
    pub total_male: u32,
    /// rural + urban + converted, for a woman.
    pub total_female: u32,
    /// Calendar months between the exposure start date and today, when a
    /// start date was supplied. Negative when the start date is in the
    /// future. Informational only.
    pub exposure_months: Option<i32>,
    /// Advisory validation of the exposure period.
    pub validation: HazardValidation,
}

/// Calendar months between two dates, adjusted downward when the day of
/// month has not yet been reached.
///
/// # Examples
///
/// ```
/// use benefit_engine::calculation::months_between;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2020, 3, 15).unwrap();
/// let end = NaiveDate::from_ymd_opt(2021, 3, 15).unwrap();
/// assert_eq!(months_between(start, end), 12);
///
/// let not_quite = NaiveDate::from_ymd_opt(2021, 3, 14).unwrap();
/// assert_eq!(months_between(start, not_quite), 11);
/// ```
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let mut months =
        (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    if end.day() < start.day() {
        months -= 1;
    }
    months
}

/// Converts hazardous-exposure time and combines contribution totals.
///
/// Applies the sex-dependent multipliers with statutory flooring and sums
/// the rural, urban and converted components per sex. When `hazard_start`
/// is supplied, the elapsed exposure in calendar months is reported and the
/// start date is validated against the statutory bounds in `table`.
///
/// Pure function of its inputs; `today` is an explicit parameter so the
/// computation is deterministic.
///
/// # Examples
///
/// ```
/// use benefit_engine::calculation::convert_hazard_time;
/// use benefit_engine::config::RuleConfig;
/// use chrono::NaiveDate;
///
/// let config = RuleConfig::default();
/// let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
///
/// let result = convert_hazard_time(120, 60, 100, None, today, &config.hazard);
/// assert_eq!(result.hazard_months_converted_male, 140);
/// assert_eq!(result.hazard_months_converted_female, 120);
/// assert_eq!(result.total_male, 320);
/// assert_eq!(result.total_female, 300);
/// ```
pub fn convert_hazard_time(
    rural_months: u32,
    urban_months: u32,
    hazard_months: u32,
    hazard_start: Option<NaiveDate>,
    today: NaiveDate,
    table: &HazardTable,
) -> HazardConversionResult {
    let converted_male = floor_multiply(hazard_months, male_conversion_multiplier());
    let converted_female = floor_multiply(hazard_months, female_conversion_multiplier());

    let validation = validate_hazard_limits(hazard_months, hazard_start, today, table);
    let exposure_months = hazard_start.map(|start| months_between(start, today));

    HazardConversionResult {
        rural_months,
        urban_months,
        hazard_months,
        hazard_months_converted_male: converted_male,
        hazard_months_converted_female: converted_female,
        total_male: rural_months + urban_months + converted_male,
        total_female: rural_months + urban_months + converted_female,
        exposure_months,
        validation,
    }
}

/// Flags exposure periods outside the statutory bounds.
///
/// Never rejects: the engine reports, it does not adjudicate.
fn validate_hazard_limits(
    hazard_months: u32,
    hazard_start: Option<NaiveDate>,
    today: NaiveDate,
    table: &HazardTable,
) -> HazardValidation {
    let mut alerts = Vec::new();

    let exceeds_month_limit = hazard_months > table.month_limit;
    if exceeds_month_limit {
        alerts.push(EvaluationWarning {
            code: "HAZARD_EXCEEDS_LIMIT".to_string(),
            message: format!(
                "Hazardous exposure of {} months exceeds the {}-month statutory limit",
                hazard_months, table.month_limit
            ),
            severity: "medium".to_string(),
        });
    }

    let starts_before_regime_threshold =
        hazard_start.is_some_and(|start| start < table.regime_threshold);
    if starts_before_regime_threshold {
        alerts.push(EvaluationWarning {
            code: "HAZARD_BEFORE_REGIME_THRESHOLD".to_string(),
            message: format!(
                "Exposure starting before {} falls under a different legal regime",
                table.regime_threshold
            ),
            severity: "medium".to_string(),
        });
    }

    let starts_in_future = hazard_start.is_some_and(|start| start > today);
    if starts_in_future {
        alerts.push(EvaluationWarning {
            code: "HAZARD_START_IN_FUTURE".to_string(),
            message: "Exposure start date is in the future".to_string(),
            severity: "low".to_string(),
        });
    }

    HazardValidation {
        exceeds_month_limit,
        starts_before_regime_threshold,
        starts_in_future,
        alerts,
    }
}

/// floor(months × multiplier), computed in decimal arithmetic.
fn floor_multiply(months: u32, multiplier: Decimal) -> u32 {
    (Decimal::from(months) * multiplier)
        .floor()
        .to_u32()
        .unwrap_or(u32::MAX)
}
