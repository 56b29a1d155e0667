//! Contribution profile model and related types.
//!
//! This module defines the input entity for transition-rule evaluation and
//! the sex / insured-category enumerations used across the engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The sex of the insured person, as used by the statutory rule tables.
///
/// Thresholds (required points, minimum ages, minimum contribution time and
/// hazard-time multipliers) are all sex-dependent under EC 103/2019.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male insured person.
    Male,
    /// Female insured person.
    Female,
}

impl FromStr for Sex {
    type Err = EngineError;

    /// Parses a sex tag. Accepts the Portuguese tags used by upstream
    /// callers ("masculino"/"feminino") as well as English spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "masculino" | "male" | "m" => Ok(Sex::Male),
            "feminino" | "female" | "f" => Ok(Sex::Female),
            _ => Err(EngineError::UnknownSex {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// The category of insured person for grace-period purposes.
///
/// The subsistence rural worker ("segurado especial", rural-pure) never
/// loses insured status through elapsed time; every other category is
/// subject to the 365-day grace window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsuredCategory {
    /// Subsistence rural worker; grace period never expires.
    RuralPure,
    /// Mixed rural and urban contribution history.
    Hybrid,
    /// Urban contributor.
    Urban,
}

impl FromStr for InsuredCategory {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rural_pura" | "rural_pure" => Ok(InsuredCategory::RuralPure),
            "hibrida" | "hybrid" => Ok(InsuredCategory::Hybrid),
            "urbano" | "urban" => Ok(InsuredCategory::Urban),
            _ => Err(EngineError::UnknownCategory {
                value: s.to_string(),
            }),
        }
    }
}

/// The input entity for transition-rule evaluation.
///
/// Time fields are month counts; ages are whole years. All quantities are
/// unsigned, so negative time or age values are unrepresentable at the type
/// level rather than rejected at run time.
///
/// `contribution_months_at_cutoff` is the contribution time already accrued
/// at the reform cutoff date (2019-11-13). A value larger than
/// `total_contribution_months` is implausible; the engine flags it on the
/// report as a warning rather than rejecting the evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionProfile {
    /// The sex of the insured person.
    pub sex: Sex,
    /// Current age in whole years.
    pub current_age: u32,
    /// Total contribution time accrued to date, in months.
    pub total_contribution_months: u32,
    /// Contribution time already accrued at the reform cutoff date, in months.
    pub contribution_months_at_cutoff: u32,
}

impl ContributionProfile {
    /// Returns true when the cutoff-date contribution exceeds the current
    /// total, which cannot happen for a real contribution history.
    pub fn cutoff_exceeds_total(&self) -> bool {
        self.contribution_months_at_cutoff > self.total_contribution_months
    }
}
