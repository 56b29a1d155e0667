//! Core data models for the Benefit Eligibility Rule Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod profile;
mod report;

pub use profile::{ContributionProfile, InsuredCategory, Sex};
pub use report::{EligibilityReport, EvaluationWarning, RuleId, RuleVerdict, VerdictStatus};
