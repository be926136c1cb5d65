//! Request types for the ravvedimento API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ConfigLoader;
use crate::models::CalculationInput;

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The tax originally owed.
    pub original_amount: Decimal,
    /// The date the tax was due.
    pub due_date: NaiveDate,
    /// The date the tax is paid.
    pub payment_date: NaiveDate,
    /// Optional F24 tax code.
    #[serde(default)]
    pub tax_code: Option<String>,
    /// Optional tax name; filled from the catalog when omitted.
    #[serde(default)]
    pub tax_name: Option<String>,
}

impl CalculationRequest {
    /// Converts the request into engine input.
    ///
    /// A known `tax_code` without a `tax_name` gets its name from the
    /// catalog. Unknown codes pass through unchanged.
    pub fn into_input(self, config: &ConfigLoader) -> CalculationInput {
        let tax_name = match (&self.tax_code, self.tax_name) {
            (_, Some(name)) => Some(name),
            (Some(code), None) => config.get_tax_code(code).ok().map(|t| t.name.clone()),
            (None, None) => None,
        };

        CalculationInput {
            original_amount: self.original_amount,
            due_date: self.due_date,
            payment_date: self.payment_date,
            tax_code: self.tax_code,
            tax_name,
        }
    }
}
