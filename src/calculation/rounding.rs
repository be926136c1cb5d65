//! Rounding policy for monetary amounts.
//!
//! Amounts round half away from zero, which for the positive amounts the
//! engine handles is the usual commercial half-up rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on per-year interest amounts.
pub const INTEREST_ENTRY_DP: u32 = 6;

/// Decimal places kept on totals.
pub const CURRENCY_DP: u32 = 2;

/// Rounds a total to euro cents.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a per-year interest amount to six decimal places.
pub fn round_interest_entry(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(INTEREST_ENTRY_DP, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_currency_half_up() {
        assert_eq!(round_currency(dec("0.685")), dec("0.69"));
        assert_eq!(round_currency(dec("0.684932")), dec("0.68"));
        assert_eq!(round_currency(dec("1030.675")), dec("1030.68"));
    }

    #[test]
    fn test_round_currency_does_not_use_bankers_rounding() {
        // Banker's rounding would give 0.62
        assert_eq!(round_currency(dec("0.625")), dec("0.63"));
    }

    #[test]
    fn test_round_interest_entry() {
        assert_eq!(
            round_interest_entry(dec("0.6849315068493150684931506849")),
            dec("0.684932")
        );
        assert_eq!(round_interest_entry(dec("0.0000005")), dec("0.000001"));
    }
}
