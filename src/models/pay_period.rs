//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type that bounds a payslip.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents a pay period with its inclusive date range.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let pay_period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
/// };
///
/// assert!(pay_period.validate().is_ok());
/// assert_eq!(pay_period.days(), 28);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Number of calendar days in the period, counting both ends.
    ///
    /// Informational only: no-pay deductions always use a 30-day divisor.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Fails with [`EngineError::InvalidInput`] if the period ends before it starts.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_date < self.start_date {
            return Err(EngineError::invalid_input(
                "pay_period",
                format!(
                    "end date {} is before start date {}",
                    self.end_date, self.start_date
                ),
            ));
        }
        Ok(())
    }
}
