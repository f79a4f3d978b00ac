//! Payroll Calculation Engine
//!
//! This crate provides the deterministic payroll formulas of an HR back
//! office: salary totals with overtime, bonus and no-pay deductions, EPF and
//! ETF statutory contributions, staff loan eligibility and repayment, and KPI
//! banding. An HTTP adapter exposes the calculators to the UI layer.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
