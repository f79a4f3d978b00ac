//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{LoanCatalog, LoanCatalogEntry, LoanType};

use super::types::{CompanyMetadata, PayrollConfig};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── company.yaml       # Company name and currency
/// └── loan_catalog.yaml  # Loan products on offer
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::LoanType;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let staff_loan = loader.get_loan(LoanType::StaffLoan).unwrap();
/// println!("{} at {}%", staff_loan.name, staff_loan.interest_rate_percent);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Fails if either file is missing or malformed, or if the loan catalog
    /// is empty.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let company_path = path.join("company.yaml");
        let metadata = Self::load_yaml::<CompanyMetadata>(&company_path)?;

        let catalog_path = path.join("loan_catalog.yaml");
        let loan_catalog = Self::load_yaml::<LoanCatalog>(&catalog_path)?;

        if loan_catalog.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: catalog_path.display().to_string(),
                message: "loan catalog has no entries".to_string(),
            });
        }

        debug!(
            company = %metadata.name,
            loans = loan_catalog.loans.len(),
            path = %path.display(),
            "Loaded payroll configuration"
        );

        Ok(Self {
            config: PayrollConfig::new(metadata, loan_catalog),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        self.config.company()
    }

    /// Returns the loan catalog.
    pub fn loan_catalog(&self) -> &LoanCatalog {
        self.config.loan_catalog()
    }

    /// Gets a catalog entry by loan type.
    ///
    /// Returns [`EngineError::LoanTypeNotFound`] if the type is not offered.
    pub fn get_loan(&self, loan_type: LoanType) -> EngineResult<&LoanCatalogEntry> {
        self.loan_catalog().entry(loan_type)
    }
}
