//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::LoanCatalog;

/// Metadata about the company running payroll.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyMetadata {
    /// The company's registered name.
    pub name: String,
    /// ISO 4217 code of the currency salaries are paid in.
    pub currency: String,
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    metadata: CompanyMetadata,
    loan_catalog: LoanCatalog,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(metadata: CompanyMetadata, loan_catalog: LoanCatalog) -> Self {
        Self {
            metadata,
            loan_catalog,
        }
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        &self.metadata
    }

    /// Returns the loan products on offer.
    pub fn loan_catalog(&self) -> &LoanCatalog {
        &self.loan_catalog
    }
}
