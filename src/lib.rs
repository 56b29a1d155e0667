//! Benefit Eligibility Rule Engine for the EC 103/2019 pension reform.
//!
//! This crate evaluates a person's eligibility for retirement under the four
//! mutually exclusive transition rules introduced by the Brazilian pension
//! reform (EC 103/2019), and provides the time-unit normalization layer the
//! evaluation depends on: month/year conversion, hazardous-exposure time
//! conversion with sex-dependent multipliers, and grace-period day counting.
//!
//! The engine is synchronous, stateless and side-effect free. Every function
//! that needs "today" takes it as an explicit parameter, so evaluations are
//! deterministic and safe to run concurrently.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
