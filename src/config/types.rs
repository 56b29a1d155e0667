//! Configuration types for the transition-rule tables.
//!
//! These are the strongly-typed structures deserialized from the rules YAML
//! file. The `Default` implementation carries the canonical table: the later,
//! progressive-points revision of EC 103/2019, which is the legally accurate
//! one (the earlier fixed 99/89 table is intentionally not used).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Sex;

/// A pair of sex-dependent values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerSex<T> {
    /// The value applied to male insured persons.
    pub male: T,
    /// The value applied to female insured persons.
    pub female: T,
}

impl<T: Copy> PerSex<T> {
    /// Returns the value for the given sex.
    pub fn get(&self, sex: Sex) -> T {
        match sex {
            Sex::Male => self.male,
            Sex::Female => self.female,
        }
    }
}

/// Thresholds for the points rule (Art. 15).
///
/// The points requirement rises by one point per calendar year from
/// `base_year` until it reaches the cap (105 for men in 2028, 100 for women
/// in 2033).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsRuleTable {
    /// Year the base points values took effect.
    pub base_year: i32,
    /// Points required in `base_year`.
    pub base_points: PerSex<u32>,
    /// Cap on the yearly increasing points requirement.
    pub cap_points: PerSex<u32>,
    /// Minimum contribution time in months (35/30 years).
    pub minimum_months: PerSex<u32>,
}

impl PointsRuleTable {
    /// Returns the points required for the given sex in the given year.
    pub fn required_points(&self, sex: Sex, year: i32) -> u32 {
        let base = self.base_points.get(sex);
        let cap = self.cap_points.get(sex);
        if year <= self.base_year {
            return base;
        }
        let raised = base.saturating_add((year - self.base_year) as u32);
        raised.min(cap)
    }
}

/// Thresholds for the general rule (Art. 19).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralRuleTable {
    /// Minimum age in years (65/62).
    pub minimum_age: PerSex<u32>,
    /// Minimum contribution time in months (240/180, i.e. 20/15 years).
    pub minimum_months: PerSex<u32>,
}

/// Thresholds for a toll rule (Art. 17 or Art. 20).
///
/// Both toll rules share the pre-reform contribution requirement (420/360
/// months, i.e. 35/30 years) and differ in minimum age and toll factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TollRuleTable {
    /// Minimum age in years.
    pub minimum_age: PerSex<u32>,
    /// Pre-reform contribution requirement in months.
    pub pre_reform_months: PerSex<u32>,
}

/// Statutory bounds for hazardous-exposure validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardTable {
    /// Exposure beyond this many months (25 years) is flagged.
    pub month_limit: u32,
    /// Exposure starting before this date falls under a different regime
    /// and is flagged.
    pub regime_threshold: NaiveDate,
}

/// The complete transition-rule configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// The reform cutoff date the toll rules measure shortfall against.
    pub cutoff_date: NaiveDate,
    /// Points rule thresholds.
    pub points: PointsRuleTable,
    /// General rule thresholds.
    pub general: GeneralRuleTable,
    /// 50% toll rule thresholds.
    pub toll_50: TollRuleTable,
    /// 100% toll rule thresholds.
    pub toll_100: TollRuleTable,
    /// Hazardous-exposure validation bounds.
    pub hazard: HazardTable,
    /// Grace window in days for non-rural insured persons.
    pub grace_window_days: i64,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            cutoff_date: NaiveDate::from_ymd_opt(2019, 11, 13).expect("valid statutory date"),
            points: PointsRuleTable {
                base_year: 2019,
                base_points: PerSex {
                    male: 96,
                    female: 86,
                },
                cap_points: PerSex {
                    male: 105,
                    female: 100,
                },
                minimum_months: PerSex {
                    male: 420,
                    female: 360,
                },
            },
            general: GeneralRuleTable {
                minimum_age: PerSex {
                    male: 65,
                    female: 62,
                },
                minimum_months: PerSex {
                    male: 240,
                    female: 180,
                },
            },
            toll_50: TollRuleTable {
                minimum_age: PerSex {
                    male: 61,
                    female: 56,
                },
                pre_reform_months: PerSex {
                    male: 420,
                    female: 360,
                },
            },
            toll_100: TollRuleTable {
                minimum_age: PerSex {
                    male: 60,
                    female: 57,
                },
                pre_reform_months: PerSex {
                    male: 420,
                    female: 360,
                },
            },
            hazard: HazardTable {
                month_limit: 300,
                regime_threshold: NaiveDate::from_ymd_opt(1991, 7, 24)
                    .expect("valid statutory date"),
            },
            grace_window_days: 365,
        }
    }
}
