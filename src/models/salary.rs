//! Salary input and result models.
//!
//! This module defines [`SalaryComponents`], the figures a payroll officer
//! enters for one employee and month, and [`SalaryResult`], the breakdown
//! produced by the salary calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult, ensure_amount};

/// The largest number of no-pay days accepted for a single salary period.
pub const MAX_NO_PAY_DAYS: u32 = 31;

/// The monthly pay components of a single employee.
///
/// Every field defaults to zero when it is absent from the incoming record.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SalaryComponents;
///
/// let components: SalaryComponents =
///     serde_json::from_str(r#"{"basic_salary": "5000", "no_pay_days": 2}"#).unwrap();
/// assert_eq!(components.basic_salary.to_string(), "5000");
/// assert!(components.ot_hours.is_zero());
/// assert_eq!(components.no_pay_days, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SalaryComponents {
    /// The base monthly wage before overtime, bonus, or deductions.
    pub basic_salary: Decimal,
    /// Overtime hours worked in the period.
    pub ot_hours: Decimal,
    /// Amount paid per overtime hour.
    pub ot_rate: Decimal,
    /// One-off bonus for the period.
    pub bonus_amount: Decimal,
    /// Salary increment granted for the period.
    pub increment_amount: Decimal,
    /// Unpaid absence days in the period.
    pub no_pay_days: u32,
}

impl SalaryComponents {
    /// Checks that every amount is non-negative and at most [`MAX_AMOUNT`],
    /// and that `no_pay_days` does not exceed [`MAX_NO_PAY_DAYS`].
    ///
    /// [`compute_salary`](crate::calculation::compute_salary) cannot
    /// overflow on components that pass this check.
    ///
    /// [`MAX_AMOUNT`]: crate::error::MAX_AMOUNT
    pub fn validate(&self) -> EngineResult<()> {
        ensure_amount("basic_salary", self.basic_salary)?;
        ensure_amount("ot_hours", self.ot_hours)?;
        ensure_amount("ot_rate", self.ot_rate)?;
        ensure_amount("bonus_amount", self.bonus_amount)?;
        ensure_amount("increment_amount", self.increment_amount)?;

        if self.no_pay_days > MAX_NO_PAY_DAYS {
            return Err(EngineError::invalid_input(
                "no_pay_days",
                format!(
                    "must be between 0 and {} (got {})",
                    MAX_NO_PAY_DAYS, self.no_pay_days
                ),
            ));
        }

        Ok(())
    }
}

/// The computed salary breakdown for one employee and period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryResult {
    /// The basic salary carried over from the input.
    pub basic_salary: Decimal,
    /// Overtime pay (`ot_hours * ot_rate`).
    pub ot_pay: Decimal,
    /// The bonus carried over from the input.
    pub bonus_amount: Decimal,
    /// The increment carried over from the input.
    pub increment_amount: Decimal,
    /// Deduction for unpaid absence days.
    pub no_pay_deduction: Decimal,
    /// Sum of all earnings less the no-pay deduction. May be negative.
    pub total_salary: Decimal,
    /// `total_salary` clamped at zero.
    pub net_payable: Decimal,
}
