//! Calculation logic for the ravvedimento engine.
//!
//! This module contains the pure calculation functions: classification of a
//! delay into its penalty bracket, year-by-year legal interest accrual, and
//! the orchestration that turns a late payment into a [`CalculationResult`].
//!
//! [`CalculationResult`]: crate::models::CalculationResult

mod interest_accrual;
mod penalty_bracket;
mod remediation;
mod rounding;

pub use interest_accrual::{DAY_COUNT_BASIS, InterestAccrual, accrue_interest};
pub use penalty_bracket::{
    PENALTY_BRACKETS, PenaltyBracket, SANCTION_REGIME, base_penalty_percent, classify,
    regime_valid_from,
};
pub use remediation::{
    MISSING_INTEREST_RATE, compute_remediation, compute_remediation_with_builtin_rates,
};
pub use rounding::{CURRENCY_DP, INTEREST_ENTRY_DP, round_currency, round_interest_entry};
