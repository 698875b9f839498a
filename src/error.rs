//! Error types for the deduction engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation core itself never fails — malformed identifiers and
//! unknown categories fall back to defensive defaults — so these errors
//! only arise at the configuration and request boundaries.

use thiserror::Error;

/// The main error type for the deduction engine.
///
/// # Example
///
/// ```
/// use daywage_engine::error::EngineError;
///
/// let error = EngineError::RateTableNotFound { year: 2019 };
/// assert_eq!(error.to_string(), "No rate table for year 2019");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file or directory was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No rate table is registered for the requested year.
    #[error("No rate table for year {year}")]
    RateTableNotFound {
        /// The year for which a rate table was requested.
        year: i32,
    },

    /// The requested payroll period does not denote a real calendar month.
    #[error("Invalid payroll period {year}-{month:02}")]
    InvalidPeriod {
        /// The requested year.
        year: i32,
        /// The requested month (must be 1-12).
        month: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
