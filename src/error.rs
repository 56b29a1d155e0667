//! Error types for the Benefit Eligibility Rule Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during rule evaluation.
//!
//! Advisory conditions (hazard time over the statutory limit, implausible
//! cutoff-date contribution amounts, exposure dates outside plausible legal
//! ranges) are deliberately *not* errors: they surface as warnings on the
//! result so the computation always completes. The engine reports, it does
//! not adjudicate.

use thiserror::Error;

/// The main error type for the Benefit Eligibility Rule Engine.
///
/// All fallible operations in the engine return this error type. The caller
/// (typically an API layer) is responsible for translating invalid-input
/// variants into user-facing responses.
///
/// # Example
///
/// ```
/// use benefit_engine::error::EngineError;
///
/// let error = EngineError::UnknownSex {
///     value: "other".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown sex tag: other");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A sex tag could not be recognized.
    #[error("Unknown sex tag: {value}")]
    UnknownSex {
        /// The tag that could not be parsed.
        value: String,
    },

    /// An insured-category tag could not be recognized.
    #[error("Unknown insured category: {value}")]
    UnknownCategory {
        /// The tag that could not be parsed.
        value: String,
    },

    /// A time-unit tag could not be recognized.
    #[error("Unknown time unit: {value}")]
    UnknownTimeUnit {
        /// The tag that could not be parsed.
        value: String,
    },

    /// The rule selector received an empty verdict set.
    ///
    /// The engine always evaluates exactly four rules, so this indicates a
    /// caller bug rather than bad user input.
    #[error("Cannot select a best verdict from an empty verdict set")]
    EmptyVerdictSet,
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
