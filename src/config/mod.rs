//! Reference data for the ravvedimento engine.
//!
//! This module provides the legal interest rate table and the F24 tax-code
//! catalog, either compiled in or loaded from YAML files so a data store can
//! override them without touching the engine.
//!
//! # Example
//!
//! ```no_run
//! use ravvedimento_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/it").unwrap();
//! println!("Rates loaded for {:?}", config.rate_table().years());
//! ```

mod builtin;
mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EngineConfig, InterestRate, InterestRateTable, InterestRatesConfig, TaxCategory, TaxCode,
    TaxCodesConfig,
};
