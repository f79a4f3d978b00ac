//! Configuration loading and management for the Payroll Calculation Engine.
//!
//! This module loads the company's payroll configuration from YAML files:
//! company metadata and the loan catalog that loan eligibility is checked
//! against.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Payroll for: {}", config.company().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CompanyMetadata, PayrollConfig};
