//! Error types for the Payroll Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating input or
//! loading the payroll configuration. The calculation core itself performs
//! no I/O, so every runtime error is an input error the caller can recover
//! from locally.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::LoanType;

/// The main error type for the Payroll Calculation Engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidDuration { months: 0 };
/// assert_eq!(
///     error.to_string(),
///     "Invalid loan duration: 0 months (must be at least 1)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An input field was negative, out of its allowed range, or inconsistent.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A loan repayment was requested over zero or a negative number of months.
    #[error("Invalid loan duration: {months} months (must be at least 1)")]
    InvalidDuration {
        /// The rejected duration.
        months: i64,
    },

    /// A KPI score fell outside the 0 to 100 scale.
    #[error("KPI value {value} is out of range (expected 0 to 100)")]
    OutOfRange {
        /// The rejected KPI value.
        value: Decimal,
    },

    /// The requested loan type is not offered by the loan catalog.
    #[error("Loan type not found in catalog: {loan_type}")]
    LoanTypeNotFound {
        /// The loan type that was requested.
        loan_type: LoanType,
    },

    /// A loan request could not be granted.
    #[error("Loan '{loan_type}' not available: {}", reasons.join("; "))]
    LoanNotAvailable {
        /// The loan type that was requested.
        loan_type: LoanType,
        /// Why the request was refused.
        reasons: Vec<String>,
    },

    /// Configuration file was not found at the specified path.
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
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// Largest monetary amount or quantity accepted on input (one trillion).
///
/// Keeps every product and sum the calculators form within `Decimal` range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Fails with [`EngineError::InvalidInput`] when `value` is negative or
/// larger than [`MAX_AMOUNT`].
pub(crate) fn ensure_amount(field: &str, value: Decimal) -> EngineResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::invalid_input(
            field,
            format!("must not be negative (got {})", value),
        ));
    }
    if value > MAX_AMOUNT {
        return Err(EngineError::invalid_input(
            field,
            format!("must not exceed {} (got {})", MAX_AMOUNT, value),
        ));
    }
    Ok(())
}

/// Maps a failed checked operation to [`EngineError::InvalidInput`].
pub(crate) fn overflow(field: &str) -> EngineError {
    EngineError::invalid_input(field, "result is too large to represent")
}
