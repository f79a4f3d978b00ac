//! Monthly salary calculation.
//!
//! This module turns the [`SalaryComponents`] entered for an employee into
//! a [`SalaryResult`]: overtime pay, no-pay deduction, total salary, and the
//! net payable amount.

use rust_decimal::Decimal;

use crate::models::{SalaryComponents, SalaryResult};

/// Days used to prorate the basic salary for no-pay deductions.
///
/// The divisor is fixed at 30 regardless of the calendar length of the
/// month being paid.
pub const NO_PAY_DAY_DIVISOR: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Computes the salary breakdown for one employee and period.
///
/// - `ot_pay = ot_hours * ot_rate`
/// - `no_pay_deduction = no_pay_days * (basic_salary / 30)`
/// - `total_salary = basic_salary + ot_pay + bonus_amount + increment_amount - no_pay_deduction`
/// - `net_payable = max(total_salary, 0)`
///
/// A negative total is clamped in `net_payable` rather than rejected, and no
/// rounding is applied.
///
/// # Panics
///
/// Components that fail [`SalaryComponents::validate`] may overflow
/// `Decimal`; validate untrusted input first.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_salary;
/// use payroll_engine::models::SalaryComponents;
/// use rust_decimal::Decimal;
///
/// let result = compute_salary(&SalaryComponents {
///     basic_salary: Decimal::from(5000),
///     ot_hours: Decimal::from(10),
///     ot_rate: Decimal::from(50),
///     bonus_amount: Decimal::from(1000),
///     increment_amount: Decimal::ZERO,
///     no_pay_days: 0,
/// });
///
/// assert_eq!(result.ot_pay, Decimal::from(500));
/// assert_eq!(result.total_salary, Decimal::from(6500));
/// assert_eq!(result.net_payable, Decimal::from(6500));
/// ```
pub fn compute_salary(input: &SalaryComponents) -> SalaryResult {
    let ot_pay = input.ot_hours * input.ot_rate;
    let daily_rate = input.basic_salary / NO_PAY_DAY_DIVISOR;
    let no_pay_deduction = Decimal::from(input.no_pay_days) * daily_rate;

    let total_salary = input.basic_salary + ot_pay + input.bonus_amount + input.increment_amount
        - no_pay_deduction;
    let net_payable = total_salary.max(Decimal::ZERO);

    SalaryResult {
        basic_salary: input.basic_salary,
        ot_pay,
        bonus_amount: input.bonus_amount,
        increment_amount: input.increment_amount,
        no_pay_deduction,
        total_salary,
        net_payable,
    }
}
