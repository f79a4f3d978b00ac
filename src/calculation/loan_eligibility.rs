//! Loan eligibility rules.
//!
//! Each loan type caps the amount an employee may borrow at a multiple of
//! their basic salary. Disqualifying conditions are all evaluated and their
//! reasons accumulate; none of them short-circuits the others.

use rust_decimal::Decimal;

use crate::models::{LoanCatalog, LoanEligibilityInput, LoanEligibilityResult, LoanType};

/// Minimum basic salary required for a home loan.
pub const HOME_LOAN_MINIMUM_SALARY: Decimal = Decimal::from_parts(50000, 0, 0, false, 0);

/// Reason recorded when the employee may apply.
pub const REASON_ELIGIBLE: &str = "Eligible";

/// Reason recorded when a home loan applicant earns too little.
pub const REASON_SALARY_BELOW_MINIMUM: &str = "Salary below minimum requirement";

/// Reason recorded for every loan type while the employee is on probation.
pub const REASON_ON_PROBATION: &str = "Employee on probation";

/// Returns the multiple of basic salary that caps a loan of this type.
///
/// | type | multiple |
/// |------|----------|
/// | staff | 3 |
/// | home | 60 |
/// | emergency | 2 |
/// | vehicle | 24 |
/// | other | 3 |
pub fn salary_multiple(loan_type: LoanType) -> Decimal {
    match loan_type {
        LoanType::StaffLoan => Decimal::from(3),
        LoanType::HomeLoan => Decimal::from(60),
        LoanType::EmergencyLoan => Decimal::from(2),
        LoanType::VehicleLoan => Decimal::from(24),
        LoanType::Other => Decimal::from(3),
    }
}

/// Checks whether an employee may apply for a single loan type.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::check_loan_eligibility;
/// use payroll_engine::models::{LoanEligibilityInput, LoanType};
/// use rust_decimal::Decimal;
///
/// let employee = LoanEligibilityInput {
///     basic_salary: Decimal::from(40000),
///     employment_role: "staff".to_string(),
/// };
///
/// let staff = check_loan_eligibility(&employee, LoanType::StaffLoan);
/// assert!(staff.eligible);
/// assert_eq!(staff.max_amount, Decimal::from(120000));
/// assert_eq!(staff.reasons, vec!["Eligible".to_string()]);
///
/// let home = check_loan_eligibility(&employee, LoanType::HomeLoan);
/// assert!(!home.eligible);
/// assert!(home.reasons.contains(&"Salary below minimum requirement".to_string()));
/// ```
pub fn check_loan_eligibility(
    input: &LoanEligibilityInput,
    loan_type: LoanType,
) -> LoanEligibilityResult {
    let mut reasons = Vec::new();

    if loan_type == LoanType::HomeLoan && input.basic_salary < HOME_LOAN_MINIMUM_SALARY {
        reasons.push(REASON_SALARY_BELOW_MINIMUM.to_string());
    }

    if input.is_on_probation() {
        reasons.push(REASON_ON_PROBATION.to_string());
    }

    let eligible = reasons.is_empty();
    let max_amount = if eligible {
        // Saturates instead of overflowing for salaries near `Decimal::MAX`.
        input.basic_salary.saturating_mul(salary_multiple(loan_type))
    } else {
        Decimal::ZERO
    };

    if eligible {
        reasons.push(REASON_ELIGIBLE.to_string());
    }

    LoanEligibilityResult {
        loan_type,
        eligible,
        max_amount,
        reasons,
    }
}

/// Checks eligibility for every loan in the catalog, in catalog order.
pub fn check_eligibility(
    input: &LoanEligibilityInput,
    catalog: &LoanCatalog,
) -> Vec<LoanEligibilityResult> {
    catalog
        .loans
        .iter()
        .map(|entry| check_loan_eligibility(input, entry.loan_type))
        .collect()
}
