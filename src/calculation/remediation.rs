//! Ravvedimento computation.
//!
//! Validates the late payment, classifies the delay, accrues legal interest
//! and assembles the immutable [`CalculationResult`].

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::config::InterestRateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditWarning, CalculationInput, CalculationResult};

use super::interest_accrual::accrue_interest;
use super::penalty_bracket::{base_penalty_percent, classify};
use super::rounding::round_currency;

/// Warning code attached when a spanned year has no legal interest rate.
pub const MISSING_INTEREST_RATE: &str = "MISSING_INTEREST_RATE";

const REGIME_NOTE: &str = "Regime sanzionatorio: post D.Lgs. 87/2024 (vigente dal 01/09/2024)";

/// Computes the ravvedimento owed for a late payment.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when the payment date is not
/// strictly after the due date, the original amount is not positive, or the
/// amount is so large that the penalty or interest overflows `Decimal`.
/// Missing years in `rate_table` are not errors: they accrue at 0% and are
/// reported in [`CalculationResult::warnings`].
///
/// # Example
///
/// ```
/// use ravvedimento_engine::calculation::compute_remediation;
/// use ravvedimento_engine::config::InterestRateTable;
/// use ravvedimento_engine::models::{CalculationInput, RemediationKind};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = CalculationInput {
///     original_amount: Decimal::from(1000),
///     due_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     payment_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
///     tax_code: None,
///     tax_name: None,
/// };
///
/// let result = compute_remediation(&input, InterestRateTable::builtin())?;
/// assert_eq!(result.remediation_kind, RemediationKind::Sprint);
/// assert_eq!(result.total_payable, Decimal::from_str("1030.68").unwrap());
/// # Ok::<(), ravvedimento_engine::error::EngineError>(())
/// ```
pub fn compute_remediation(
    input: &CalculationInput,
    rate_table: &InterestRateTable,
) -> EngineResult<CalculationResult> {
    let delay = input.delay_days();
    if delay <= 0 {
        return Err(EngineError::invalid_input(
            "payment_date",
            format!(
                "payment date {} must be after due date {}",
                input.payment_date, input.due_date
            ),
        ));
    }

    if input.original_amount <= Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "original_amount",
            format!("amount must be greater than zero, got {}", input.original_amount),
        ));
    }

    let delay_days = u32::try_from(delay).map_err(|_| {
        EngineError::invalid_input("payment_date", format!("delay of {} days is out of range", delay))
    })?;

    let amount = input.original_amount;
    let bracket = classify(delay_days);

    let base_penalty = percent_of(amount, base_penalty_percent())?;
    let reduced_penalty_percent = bracket.reduced_penalty_percent();
    let reduced_penalty_amount = percent_of(amount, reduced_penalty_percent)?;

    let accrual = accrue_interest(amount, input.due_date, input.payment_date, rate_table)?;

    let total_payable = amount
        .checked_add(reduced_penalty_amount)
        .and_then(|sum| sum.checked_add(accrual.total_interest))
        .map(round_currency)
        .ok_or_else(EngineError::amount_out_of_range)?;

    let mut explanatory_notes = vec![
        format!("Sanzione base: 30% = € {}", euro(base_penalty)),
        format!(
            "Riduzione applicata: {} ({})",
            bracket.reduction_description, bracket.display_name
        ),
        format!(
            "Sanzione ridotta: {}% = € {}",
            reduced_penalty_percent.round_dp(4),
            euro(reduced_penalty_amount)
        ),
        format!(
            "Interessi legali: € {} calcolati su € {} per {} giorni",
            euro(accrual.total_interest),
            euro(amount),
            delay_days
        ),
    ];
    explanatory_notes.extend(accrual.entries.iter().map(|entry| {
        format!(
            "Interessi {}: {} giorni al {}% = € {}",
            entry.year, entry.days_in_year, entry.rate_percent, entry.interest_amount
        )
    }));
    explanatory_notes.push(format!("Base normativa: {}", bracket.legal_reference));
    explanatory_notes.push(REGIME_NOTE.to_string());

    let mut warnings = Vec::new();
    for year in &accrual.missing_years {
        warn!(year, "Remediation computed with missing legal interest rate");
        explanatory_notes.push(format!(
            "Attenzione: tasso legale non disponibile per il {}, interessi calcolati allo 0%",
            year
        ));
        warnings.push(AuditWarning {
            code: MISSING_INTEREST_RATE.to_string(),
            message: format!("No legal interest rate configured for {}; accrued at 0%", year),
            severity: "medium".to_string(),
        });
    }

    info!(
        delay_days,
        remediation_kind = %bracket.kind,
        total_interest = %accrual.total_interest,
        total_payable = %total_payable,
        "Remediation computed"
    );

    Ok(CalculationResult {
        input: input.clone(),
        delay_days,
        remediation_kind: bracket.kind,
        remediation_name: bracket.display_name.to_string(),
        legal_reference: bracket.legal_reference.to_string(),
        base_penalty,
        reduction_fraction: bracket.reduction_fraction(),
        reduced_penalty_percent,
        reduced_penalty_amount,
        yearly_interest: accrual.entries,
        total_interest: accrual.total_interest,
        total_payable,
        explanatory_notes,
        warnings,
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        computed_at: Utc::now(),
    })
}

/// Computes the ravvedimento against the compiled-in rate table.
pub fn compute_remediation_with_builtin_rates(
    input: &CalculationInput,
) -> EngineResult<CalculationResult> {
    compute_remediation(input, InterestRateTable::builtin())
}

/// `amount` x `percent` / 100, rejecting overflow.
fn percent_of(amount: Decimal, percent: Decimal) -> EngineResult<Decimal> {
    amount
        .checked_mul(percent)
        .and_then(|product| product.checked_div(Decimal::ONE_HUNDRED))
        .ok_or_else(EngineError::amount_out_of_range)
}

/// Formats an amount with exactly two decimals.
fn euro(amount: Decimal) -> String {
    format!("{:.2}", round_currency(amount))
}
