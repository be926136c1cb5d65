//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the interest
//! rate table and tax-code catalog from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::builtin;
use super::types::{
    EngineConfig, InterestRateTable, InterestRatesConfig, TaxCode, TaxCodesConfig,
};

/// Loads and provides access to the engine's reference data.
///
/// # Directory Structure
///
/// ```text
/// config/it/
/// ├── interest_rates.yaml  # Legal interest rate per calendar year
/// └── tax_codes.yaml       # F24 tax-code catalog
/// ```
///
/// # Example
///
/// ```no_run
/// use ravvedimento_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/it").unwrap();
/// let rate = loader.rate_table().rate_for_year(2024).unwrap();
/// println!("2024 legal rate: {}%", rate.rate_percent);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML, or
    /// the rate table repeats a year.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rates_path = path.join("interest_rates.yaml");
        let rates = Self::load_yaml::<InterestRatesConfig>(&rates_path)?;
        let rate_table = InterestRateTable::new(rates.interest_rates)?;

        let tax_codes_path = path.join("tax_codes.yaml");
        let tax_codes = Self::load_yaml::<TaxCodesConfig>(&tax_codes_path)?;

        debug!(
            path = %path.display(),
            rate_years = rate_table.len(),
            tax_codes = tax_codes.tax_codes.len(),
            "Loaded configuration"
        );

        Ok(Self {
            config: EngineConfig::new(rate_table, tax_codes.tax_codes),
        })
    }

    /// Returns a loader over the compiled-in tables.
    pub fn builtin() -> Self {
        Self {
            config: EngineConfig::new(InterestRateTable::builtin().clone(), builtin::tax_codes()),
        }
    }

    /// Wraps an already assembled configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
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

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the interest rate table.
    pub fn rate_table(&self) -> &InterestRateTable {
        self.config.rate_table()
    }

    /// Returns the full tax-code catalog.
    pub fn tax_codes(&self) -> &[TaxCode] {
        self.config.tax_codes()
    }

    /// Gets a tax code by its F24 code.
    ///
    /// # Example
    ///
    /// ```
    /// use ravvedimento_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::builtin();
    /// let code = loader.get_tax_code("4001")?;
    /// assert_eq!(code.name, "IRPEF saldo");
    /// # Ok::<(), ravvedimento_engine::error::EngineError>(())
    /// ```
    pub fn get_tax_code(&self, code: &str) -> EngineResult<&TaxCode> {
        self.config
            .tax_codes()
            .iter()
            .find(|t| t.code == code)
            .ok_or_else(|| EngineError::TaxCodeNotFound {
                code: code.to_string(),
            })
    }
}
