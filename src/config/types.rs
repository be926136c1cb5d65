//! Configuration types for ravvedimento calculations.
//!
//! This module contains the strongly-typed reference data the engine reads:
//! the legal interest rate table and the tax-code catalog. Both are
//! deserialized from YAML configuration files or built from the compiled-in
//! defaults in [`super::builtin`].

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The statutory legal interest rate for one calendar year.
///
/// # Example
///
/// ```
/// use ravvedimento_engine::config::InterestRate;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rate = InterestRate {
///     year: 2024,
///     rate_percent: Decimal::new(250, 2),
///     effective_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     effective_to: Some(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()),
///     legal_reference: "D.M. 29 novembre 2023".to_string(),
///     gazette: None,
///     notes: None,
/// };
/// assert_eq!(rate.rate_percent.to_string(), "2.50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestRate {
    /// The calendar year the rate applies to.
    pub year: i32,
    /// The annual rate as a percentage (2.50 means 2.5%).
    pub rate_percent: Decimal,
    /// First day the rate is in force.
    pub effective_from: NaiveDate,
    /// Last day the rate is in force, if already superseded.
    #[serde(default)]
    pub effective_to: Option<NaiveDate>,
    /// The decree that set the rate.
    pub legal_reference: String,
    /// Official gazette publication, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gazette: Option<String>,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Year-indexed table of legal interest rates.
///
/// Entries are kept sorted by year and are unique by year. The engine only
/// ever reads from a table; overrides are made by building a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InterestRateTable {
    entries: Vec<InterestRate>,
}

impl InterestRateTable {
    /// Builds a table from unordered entries.
    ///
    /// Returns [`EngineError::DuplicateRateYear`] when two entries share a year.
    pub fn new(entries: Vec<InterestRate>) -> EngineResult<Self> {
        let mut entries = entries;
        entries.sort_by_key(|e| e.year);

        if let Some(pair) = entries.windows(2).find(|w| w[0].year == w[1].year) {
            return Err(EngineError::DuplicateRateYear { year: pair[0].year });
        }

        Ok(Self { entries })
    }

    /// Wraps entries already sorted and unique by year.
    pub(super) fn from_sorted(entries: Vec<InterestRate>) -> Self {
        Self { entries }
    }

    /// Returns the compiled-in historical table (2000 to 2026).
    pub fn builtin() -> &'static InterestRateTable {
        super::builtin::interest_rate_table()
    }

    /// Returns all entries, oldest first.
    pub fn entries(&self) -> &[InterestRate] {
        &self.entries
    }

    /// Returns the number of years in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the entry for a calendar year.
    pub fn rate_for_year(&self, year: i32) -> Option<&InterestRate> {
        self.entries
            .binary_search_by_key(&year, |e| e.year)
            .ok()
            .map(|idx| &self.entries[idx])
    }

    /// Returns the rate in force on `today`.
    ///
    /// Falls back to the most recent entry when the table does not yet cover
    /// `today`'s year. Returns `None` only for an empty table.
    pub fn current_rate(&self, today: NaiveDate) -> Option<&InterestRate> {
        self.rate_for_year(today.year())
            .or_else(|| self.entries.last())
    }

    /// Returns the first and last covered years.
    pub fn years(&self) -> Option<(i32, i32)> {
        match (self.entries.first(), self.entries.last()) {
            (Some(first), Some(last)) => Some((first.year, last.year)),
            _ => None,
        }
    }
}

/// Structure of `interest_rates.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct InterestRatesConfig {
    /// The rate entries, in any order.
    pub interest_rates: Vec<InterestRate>,
}

/// Category a tax code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaxCategory {
    /// Personal income tax.
    Irpef,
    /// Value added tax.
    Iva,
    /// Regional tax on productive activities.
    Irap,
    /// Municipal property tax.
    Imu,
    /// Social security contributions.
    Inps,
    /// Anything else.
    Altro,
}

/// A payable tax code as it appears on the F24 form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCode {
    /// The F24 tax code (e.g. "4001").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Tax category.
    pub category: TaxCategory,
    /// Optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// F24 section the code is paid in (ERARIO, REGIONI, ...).
    pub f24_section: String,
    /// Whether the code is still in use.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Structure of `tax_codes.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxCodesConfig {
    /// Catalog entries.
    pub tax_codes: Vec<TaxCode>,
}

/// The reference data the engine and its HTTP surface work from.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    rate_table: InterestRateTable,
    tax_codes: Vec<TaxCode>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(rate_table: InterestRateTable, tax_codes: Vec<TaxCode>) -> Self {
        Self {
            rate_table,
            tax_codes,
        }
    }

    /// Returns the interest rate table.
    pub fn rate_table(&self) -> &InterestRateTable {
        &self.rate_table
    }

    /// Returns the tax-code catalog.
    pub fn tax_codes(&self) -> &[TaxCode] {
        &self.tax_codes
    }
}
