//! Legal interest accrual.
//!
//! Splits the delay into calendar-year sub-intervals and accrues simple
//! interest on each at that year's legal rate, ACT/365 fixed (leap years
//! included).

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::InterestRateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::YearlyInterestEntry;

use super::rounding::{round_currency, round_interest_entry};

/// Day-count denominator, applied to every year.
pub const DAY_COUNT_BASIS: u32 = 365;

/// The outcome of an interest accrual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterestAccrual {
    /// One entry per calendar year touched by the interval, oldest first.
    pub entries: Vec<YearlyInterestEntry>,
    /// Sum of the unrounded yearly amounts, rounded to 2 decimal places.
    pub total_interest: Decimal,
    /// Years the rate table had no entry for; they accrued at 0%.
    pub missing_years: Vec<i32>,
}

/// Accrues legal interest on `principal` over `[due_date, payment_date)`.
///
/// Each sub-interval runs from the later of the cursor and January 1 up to
/// the earlier of the next January 1 and `payment_date`, so the days of all
/// entries add up to the whole delay. A year absent from `rate_table` is still
/// emitted, with a zero rate, and reported in
/// [`InterestAccrual::missing_years`].
///
/// Returns no entries when `payment_date <= due_date`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] on `original_amount` when the
/// interest overflows `Decimal`.
///
/// # Example
///
/// ```
/// use ravvedimento_engine::calculation::accrue_interest;
/// use ravvedimento_engine::config::InterestRateTable;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let accrual = accrue_interest(
///     Decimal::from(1000),
///     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
///     InterestRateTable::builtin(),
/// )?;
///
/// assert_eq!(accrual.entries.len(), 1);
/// assert_eq!(accrual.entries[0].interest_amount, Decimal::from_str("0.684932").unwrap());
/// assert_eq!(accrual.total_interest, Decimal::from_str("0.68").unwrap());
/// # Ok::<(), ravvedimento_engine::error::EngineError>(())
/// ```
pub fn accrue_interest(
    principal: Decimal,
    due_date: NaiveDate,
    payment_date: NaiveDate,
    rate_table: &InterestRateTable,
) -> EngineResult<InterestAccrual> {
    let mut entries = Vec::new();
    let mut missing_years = Vec::new();
    let mut unrounded_total = Decimal::ZERO;

    let mut cursor = due_date;
    while cursor < payment_date {
        let year = cursor.year();
        let (Some(year_start), Some(next_year_start)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year + 1, 1, 1),
        ) else {
            break;
        };

        let period_start = cursor.max(year_start);
        let period_end = next_year_start.min(payment_date);
        let days = (period_end - period_start).num_days();

        if days > 0 {
            let rate_percent = match rate_table.rate_for_year(year) {
                Some(rate) => rate.rate_percent,
                None => {
                    warn!(year, "No legal interest rate configured, accruing at 0%");
                    missing_years.push(year);
                    Decimal::ZERO
                }
            };

            let interest = year_interest(principal, rate_percent, days)
                .ok_or_else(EngineError::amount_out_of_range)?;
            unrounded_total = unrounded_total
                .checked_add(interest)
                .ok_or_else(EngineError::amount_out_of_range)?;

            debug!(
                year,
                days,
                rate_percent = %rate_percent,
                interest = %interest,
                "Accrued legal interest for year"
            );

            entries.push(YearlyInterestEntry {
                year,
                days_in_year: days as u32,
                principal,
                rate_percent,
                interest_amount: round_interest_entry(interest),
            });
        }

        cursor = next_year_start;
    }

    Ok(InterestAccrual {
        entries,
        total_interest: round_currency(unrounded_total),
        missing_years,
    })
}

/// principal x rate% x days / 365, or `None` on overflow.
fn year_interest(principal: Decimal, rate_percent: Decimal, days: i64) -> Option<Decimal> {
    principal
        .checked_mul(rate_percent)?
        .checked_div(Decimal::ONE_HUNDRED)?
        .checked_mul(Decimal::from(days))?
        .checked_div(Decimal::from(DAY_COUNT_BASIS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InterestRate;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn builtin() -> &'static InterestRateTable {
        InterestRateTable::builtin()
    }

    fn table_with(years: &[(i32, &str)]) -> InterestRateTable {
        InterestRateTable::new(
            years
                .iter()
                .map(|&(year, percent)| InterestRate {
                    year,
                    rate_percent: dec(percent),
                    effective_from: date(year, 1, 1),
                    effective_to: None,
                    legal_reference: "test".to_string(),
                    gazette: None,
                    notes: None,
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_same_year_produces_single_entry() {
        let accrual = accrue_interest(
            dec("1000"),
            date(2024, 1, 10),
            date(2024, 1, 20),
            builtin(),
        )
        .unwrap();

        assert_eq!(accrual.entries.len(), 1);
        let entry = &accrual.entries[0];
        assert_eq!(entry.year, 2024);
        assert_eq!(entry.days_in_year, 10);
        assert_eq!(entry.rate_percent, dec("2.50"));
        assert_eq!(entry.interest_amount, dec("0.684932"));
        assert_eq!(accrual.total_interest, dec("0.68"));
        assert!(accrual.missing_years.is_empty());
    }

    #[test]
    fn test_interval_spanning_two_years() {
        let accrual = accrue_interest(
            dec("1000"),
            date(2023, 12, 1),
            date(2024, 2, 1),
            builtin(),
        )
        .unwrap();

        assert_eq!(accrual.entries.len(), 2);

        assert_eq!(accrual.entries[0].year, 2023);
        assert_eq!(accrual.entries[0].days_in_year, 31);
        assert_eq!(accrual.entries[0].rate_percent, dec("5.00"));
        // 1000 x 5% x 31/365
        assert_eq!(accrual.entries[0].interest_amount, dec("4.246575"));

        assert_eq!(accrual.entries[1].year, 2024);
        assert_eq!(accrual.entries[1].days_in_year, 31);
        assert_eq!(accrual.entries[1].rate_percent, dec("2.50"));
        // 1000 x 2.5% x 31/365
        assert_eq!(accrual.entries[1].interest_amount, dec("2.123288"));

        // 4.2465753... + 2.1232876... = 6.3698630...
        assert_eq!(accrual.total_interest, dec("6.37"));
    }

    #[test]
    fn test_payment_on_january_first_does_not_emit_empty_year() {
        let accrual = accrue_interest(
            dec("1000"),
            date(2023, 12, 31),
            date(2024, 1, 1),
            builtin(),
        )
        .unwrap();

        assert_eq!(accrual.entries.len(), 1);
        assert_eq!(accrual.entries[0].year, 2023);
        assert_eq!(accrual.entries[0].days_in_year, 1);
    }

    #[test]
    fn test_leap_year_uses_365_day_basis() {
        let table = table_with(&[(2024, "3.65")]);
        let accrual =
            accrue_interest(dec("1000"), date(2024, 1, 1), date(2025, 1, 1), &table).unwrap();

        // 366 days at 3.65% on an ACT/365 basis: 1000 x 0.0365 x 366/365 = 36.60
        let entry = &accrual.entries[0];
        assert_eq!(entry.days_in_year, 366);
        assert_eq!(entry.interest_amount, dec("36.6"));
        assert_eq!(accrual.total_interest, dec("36.60"));
    }

    #[test]
    fn test_missing_year_accrues_zero_and_is_reported() {
        let table = table_with(&[(2024, "2.50")]);
        let accrual =
            accrue_interest(dec("1000"), date(2023, 12, 1), date(2024, 2, 1), &table).unwrap();

        assert_eq!(accrual.entries.len(), 2);
        assert_eq!(accrual.entries[0].year, 2023);
        assert_eq!(accrual.entries[0].rate_percent, Decimal::ZERO);
        assert_eq!(accrual.entries[0].interest_amount, Decimal::ZERO);
        assert_eq!(accrual.missing_years, vec![2023]);
        assert_eq!(accrual.total_interest, dec("2.12"));
    }

    #[test]
    fn test_total_is_rounded_from_unrounded_entries() {
        let table = table_with(&[(2022, "3.65"), (2023, "3.65")]);
        let accrual = accrue_interest(
            dec("24.9975"),
            date(2022, 12, 31),
            date(2023, 1, 2),
            &table,
        )
        .unwrap();

        // Each year accrues 0.00249975, shown as 0.002500
        assert_eq!(accrual.entries[0].interest_amount, dec("0.0025"));
        assert_eq!(accrual.entries[1].interest_amount, dec("0.0025"));

        // Summing the shown entries would give 0.005 -> 0.01; the true total is 0.0049995
        assert_eq!(accrual.total_interest, dec("0.00"));
    }

    #[test]
    fn test_empty_interval_produces_no_entries() {
        let accrual = accrue_interest(
            dec("1000"),
            date(2024, 5, 1),
            date(2024, 5, 1),
            builtin(),
        )
        .unwrap();
        assert!(accrual.entries.is_empty());
        assert_eq!(accrual.total_interest, Decimal::ZERO);
    }

    #[test]
    fn test_multi_year_entries_are_chronological() {
        let accrual = accrue_interest(
            dec("1000"),
            date(2019, 7, 1),
            date(2023, 3, 15),
            builtin(),
        )
        .unwrap();

        let years: Vec<i32> = accrual.entries.iter().map(|e| e.year).collect();
        assert_eq!(years, vec![2019, 2020, 2021, 2022, 2023]);
        assert_eq!(accrual.entries[1].days_in_year, 366);
    }

    #[test]
    fn test_overflowing_interest_is_rejected() {
        let table = table_with(&[(2024, "1000000")]);
        let principal = dec("10000000000000000000000000");

        match accrue_interest(principal, date(2024, 1, 10), date(2024, 1, 20), &table) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "original_amount"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn prop_days_sum_to_delay(start in 0i64..9_000, delay in 1i64..3_000) {
            let due = date(2000, 1, 1) + chrono::Duration::days(start);
            let payment = due + chrono::Duration::days(delay);

            let accrual =
                accrue_interest(dec("1000"), due, payment, builtin()).unwrap();
            let total_days: i64 = accrual.entries.iter().map(|e| e.days_in_year as i64).sum();

            prop_assert_eq!(total_days, delay);
            prop_assert!(accrual.entries.windows(2).all(|w| w[0].year + 1 == w[1].year));
            prop_assert!(accrual.entries.iter().all(|e| e.days_in_year > 0));
        }
    }
}
