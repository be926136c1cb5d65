//! Calculation result models for the ravvedimento engine.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures: the remediation kind, the per-year interest breakdown and the
//! warnings attached when reference data is incomplete.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CalculationInput;

/// The remediation bracket a delay falls into.
///
/// # Example
///
/// ```
/// use ravvedimento_engine::models::RemediationKind;
///
/// let kind = RemediationKind::VeryLong;
/// assert_eq!(serde_json::to_string(&kind).unwrap(), "\"very_long\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemediationKind {
    /// Paid within 15 days.
    Sprint,
    /// Paid within 90 days.
    Short,
    /// Paid within one year.
    Intermediate,
    /// Paid within two years.
    Long,
    /// Paid after more than two years.
    VeryLong,
}

impl std::fmt::Display for RemediationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemediationKind::Sprint => write!(f, "sprint"),
            RemediationKind::Short => write!(f, "short"),
            RemediationKind::Intermediate => write!(f, "intermediate"),
            RemediationKind::Long => write!(f, "long"),
            RemediationKind::VeryLong => write!(f, "very_long"),
        }
    }
}

/// Interest accrued during one calendar year of the delay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyInterestEntry {
    /// The calendar year.
    pub year: i32,
    /// Days of the delay falling in this year.
    pub days_in_year: u32,
    /// The amount interest accrues on.
    pub principal: Decimal,
    /// The year's legal rate as a percentage (0 when the table has no entry).
    pub rate_percent: Decimal,
    /// Interest for the year, rounded to 6 decimal places.
    pub interest_amount: Decimal,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete result of a ravvedimento calculation.
///
/// Produced once by [`crate::calculation::compute_remediation`] and never
/// modified afterwards. Two results for the same input and rate table differ
/// only in `computed_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The input the result was computed from.
    pub input: CalculationInput,
    /// Whole days between due date and payment date.
    pub delay_days: u32,
    /// The remediation bracket.
    pub remediation_kind: RemediationKind,
    /// Display name of the bracket.
    pub remediation_name: String,
    /// Statutory basis of the reduction.
    pub legal_reference: String,
    /// The unreduced penalty: 30% of the original amount.
    pub base_penalty: Decimal,
    /// Fraction of the base penalty owed (e.g. 1/10).
    pub reduction_fraction: Decimal,
    /// The reduced penalty as a percentage of the original amount.
    pub reduced_penalty_percent: Decimal,
    /// The reduced penalty amount.
    pub reduced_penalty_amount: Decimal,
    /// Per-year interest breakdown, oldest year first.
    pub yearly_interest: Vec<YearlyInterestEntry>,
    /// Total legal interest, rounded to 2 decimal places.
    pub total_interest: Decimal,
    /// Original amount plus reduced penalty plus interest, rounded to 2 decimal places.
    pub total_payable: Decimal,
    /// Human-readable breakdown of the calculation.
    pub explanatory_notes: Vec<String>,
    /// Data-completeness warnings.
    pub warnings: Vec<AuditWarning>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// When the calculation was performed.
    pub computed_at: DateTime<Utc>,
}
