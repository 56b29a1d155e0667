//! Rule-table configuration for the Benefit Eligibility Rule Engine.
//!
//! Thresholds (required points, minimum ages, contribution minimums, toll
//! parameters, statutory dates) are configuration constants, not user input.
//! The canonical table ships as [`RuleConfig::default`]; a YAML file with the
//! same shape can be loaded with [`RuleConfig::load`] to override it.

mod loader;
mod types;

pub use types::{GeneralRuleTable, HazardTable, PerSex, PointsRuleTable, RuleConfig, TollRuleTable};
