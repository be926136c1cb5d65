//! Calculation input model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A late payment to remediate.
///
/// Validation (positive amount, payment strictly after the due date) happens
/// in [`crate::calculation::compute_remediation`], not on construction.
///
/// # Example
///
/// ```
/// use ravvedimento_engine::models::CalculationInput;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = CalculationInput {
///     original_amount: Decimal::new(100000, 2),
///     due_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     payment_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
///     tax_code: Some("4001".to_string()),
///     tax_name: None,
/// };
/// assert_eq!(input.delay_days(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// The tax originally owed.
    pub original_amount: Decimal,
    /// The date the tax was due.
    pub due_date: NaiveDate,
    /// The date the tax is actually paid.
    pub payment_date: NaiveDate,
    /// F24 tax code, for display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,
    /// Tax name, for display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_name: Option<String>,
}

impl CalculationInput {
    /// Whole days between the due date and the payment date.
    ///
    /// Negative or zero when the payment is not late.
    pub fn delay_days(&self) -> i64 {
        (self.payment_date - self.due_date).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_input(due: NaiveDate, payment: NaiveDate) -> CalculationInput {
        CalculationInput {
            original_amount: Decimal::from_str("1000").unwrap(),
            due_date: due,
            payment_date: payment,
            tax_code: None,
            tax_name: None,
        }
    }

    #[test]
    fn test_delay_days_within_year() {
        let input = create_input(date(2024, 1, 10), date(2024, 1, 20));
        assert_eq!(input.delay_days(), 10);
    }

    #[test]
    fn test_delay_days_across_leap_year() {
        let input = create_input(date(2024, 1, 1), date(2025, 1, 1));
        assert_eq!(input.delay_days(), 366);
    }

    #[test]
    fn test_delay_days_non_positive() {
        assert_eq!(create_input(date(2024, 3, 1), date(2024, 3, 1)).delay_days(), 0);
        assert_eq!(create_input(date(2024, 3, 1), date(2024, 2, 28)).delay_days(), -2);
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = r#"{
            "original_amount": "1500.00",
            "due_date": "2024-06-17",
            "payment_date": "2024-07-01"
        }"#;

        let input: CalculationInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.original_amount, Decimal::from_str("1500.00").unwrap());
        assert_eq!(input.due_date, date(2024, 6, 17));
        assert!(input.tax_code.is_none());
        assert!(input.tax_name.is_none());
    }

    #[test]
    fn test_serialize_skips_missing_tax_fields() {
        let input = create_input(date(2024, 1, 10), date(2024, 1, 20));
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"original_amount\":\"1000\""));
        assert!(json.contains("\"due_date\":\"2024-01-10\""));
        assert!(!json.contains("tax_code"));
    }
}
