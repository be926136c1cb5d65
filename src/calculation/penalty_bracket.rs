//! Penalty bracket classification.
//!
//! Maps a delay in days to the reduction of the statutory penalty granted by
//! art. 13 D.Lgs. 472/1997 as amended by D.Lgs. 87/2024 (in force from
//! 1 September 2024).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::RemediationKind;

/// Tag identifying the sanction regime the brackets belong to.
pub const SANCTION_REGIME: &str = "post_2024";

/// Returns the statutory base penalty as a percentage of the unpaid tax.
pub fn base_penalty_percent() -> Decimal {
    Decimal::new(30, 0)
}

/// Returns the first day the modeled regime applies to.
pub fn regime_valid_from() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2024, 9, 1)
}

/// A contiguous delay range and the penalty reduction it earns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PenaltyBracket {
    /// The bracket.
    pub kind: RemediationKind,
    /// Display name.
    pub display_name: &'static str,
    /// First delay day covered (inclusive).
    pub days_from: u32,
    /// Last delay day covered (inclusive), `None` when unbounded.
    pub days_to: Option<u32>,
    /// The reduction is 1/`reduction_denominator` of the base penalty.
    pub reduction_denominator: u32,
    /// Human-readable reduction.
    pub reduction_description: &'static str,
    /// Statutory basis.
    pub legal_reference: &'static str,
}

impl PenaltyBracket {
    /// Returns true when `delay_days` falls inside the bracket.
    pub fn contains(&self, delay_days: u32) -> bool {
        delay_days >= self.days_from && self.days_to.is_none_or(|to| delay_days <= to)
    }

    /// The fraction of the base penalty owed.
    pub fn reduction_fraction(&self) -> Decimal {
        Decimal::ONE / Decimal::from(self.reduction_denominator)
    }

    /// The reduced penalty as a percentage of the unpaid tax.
    ///
    /// Computed as 30 / denominator so that 1/9 keeps full precision.
    pub fn reduced_penalty_percent(&self) -> Decimal {
        base_penalty_percent() / Decimal::from(self.reduction_denominator)
    }
}

/// The brackets, contiguous and exhaustive over delays of one day or more.
pub static PENALTY_BRACKETS: [PenaltyBracket; 5] = [
    PenaltyBracket {
        kind: RemediationKind::Sprint,
        display_name: "Ravvedimento Sprint (entro 15 giorni)",
        days_from: 1,
        days_to: Some(15),
        reduction_denominator: 10,
        reduction_description: "1/10 del minimo (3%)",
        legal_reference: "Art. 13, c. 1, lett. a-bis) D.Lgs. 472/1997",
    },
    PenaltyBracket {
        kind: RemediationKind::Short,
        display_name: "Ravvedimento Breve (16-90 giorni)",
        days_from: 16,
        days_to: Some(90),
        reduction_denominator: 9,
        reduction_description: "1/9 del minimo (3,33%)",
        legal_reference: "Art. 13, c. 1, lett. a-bis) D.Lgs. 472/1997",
    },
    PenaltyBracket {
        kind: RemediationKind::Intermediate,
        display_name: "Ravvedimento Intermedio (91 gg - 1 anno)",
        days_from: 91,
        days_to: Some(365),
        reduction_denominator: 8,
        reduction_description: "1/8 del minimo (3,75%)",
        legal_reference: "Art. 13, c. 1, lett. b) D.Lgs. 472/1997",
    },
    PenaltyBracket {
        kind: RemediationKind::Long,
        display_name: "Ravvedimento Lungo (1-2 anni)",
        days_from: 366,
        days_to: Some(730),
        reduction_denominator: 6,
        reduction_description: "1/6 del minimo (5%)",
        legal_reference: "Art. 13, c. 1, lett. b-bis) D.Lgs. 472/1997",
    },
    PenaltyBracket {
        kind: RemediationKind::VeryLong,
        display_name: "Ravvedimento Lunghissimo (oltre 2 anni)",
        days_from: 731,
        days_to: None,
        reduction_denominator: 5,
        reduction_description: "1/5 del minimo (6%)",
        legal_reference: "Art. 13, c. 1, lett. b-ter) D.Lgs. 472/1997",
    },
];

/// Classifies a delay into its penalty bracket.
///
/// Callers guarantee `delay_days >= 1`; a zero delay lands in the sprint
/// bracket.
///
/// # Example
///
/// ```
/// use ravvedimento_engine::calculation::classify;
/// use ravvedimento_engine::models::RemediationKind;
///
/// assert_eq!(classify(15).kind, RemediationKind::Sprint);
/// assert_eq!(classify(16).kind, RemediationKind::Short);
/// assert_eq!(classify(731).kind, RemediationKind::VeryLong);
/// ```
pub fn classify(delay_days: u32) -> &'static PenaltyBracket {
    let last = &PENALTY_BRACKETS[PENALTY_BRACKETS.len() - 1];
    PENALTY_BRACKETS
        .iter()
        .find(|b| b.days_to.is_none_or(|to| delay_days <= to))
        .unwrap_or(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_bracket_boundaries() {
        let cases = [
            (1, RemediationKind::Sprint),
            (15, RemediationKind::Sprint),
            (16, RemediationKind::Short),
            (90, RemediationKind::Short),
            (91, RemediationKind::Intermediate),
            (365, RemediationKind::Intermediate),
            (366, RemediationKind::Long),
            (730, RemediationKind::Long),
            (731, RemediationKind::VeryLong),
            (10_000, RemediationKind::VeryLong),
        ];

        for (days, expected) in cases {
            assert_eq!(classify(days).kind, expected, "delay of {} days", days);
        }
    }

    #[test]
    fn test_reduced_penalty_percent_per_bracket() {
        assert_eq!(classify(10).reduced_penalty_percent(), dec("3"));
        assert_eq!(classify(100).reduced_penalty_percent(), dec("3.75"));
        assert_eq!(classify(400).reduced_penalty_percent(), dec("5"));
        assert_eq!(classify(731).reduced_penalty_percent(), dec("6"));

        let short = classify(62).reduced_penalty_percent();
        assert_eq!(short.round_dp(4), dec("3.3333"));
    }

    #[test]
    fn test_reduction_fraction() {
        assert_eq!(classify(1).reduction_fraction(), dec("0.1"));
        assert_eq!(classify(731).reduction_fraction(), dec("0.2"));
        assert_eq!(classify(100).reduction_fraction(), dec("0.125"));
    }

    #[test]
    fn test_brackets_are_contiguous() {
        for pair in PENALTY_BRACKETS.windows(2) {
            let upper = pair[0].days_to.unwrap();
            assert_eq!(pair[1].days_from, upper + 1);
        }
        assert_eq!(PENALTY_BRACKETS[0].days_from, 1);
        assert!(PENALTY_BRACKETS[4].days_to.is_none());
    }

    #[test]
    fn test_zero_delay_falls_back_to_sprint() {
        assert_eq!(classify(0).kind, RemediationKind::Sprint);
    }

    #[test]
    fn test_regime_valid_from() {
        assert_eq!(regime_valid_from(), NaiveDate::from_ymd_opt(2024, 9, 1));
        assert_eq!(SANCTION_REGIME, "post_2024");
    }

    #[test]
    fn test_bracket_serialization() {
        let json = serde_json::to_string(&PENALTY_BRACKETS[4]).unwrap();
        assert!(json.contains("\"kind\":\"very_long\""));
        assert!(json.contains("\"days_to\":null"));
    }

    proptest! {
        #[test]
        fn prop_exactly_one_bracket_matches(days in 1u32..5_000) {
            let matching = PENALTY_BRACKETS.iter().filter(|b| b.contains(days)).count();
            prop_assert_eq!(matching, 1);
            prop_assert!(classify(days).contains(days));
        }

        #[test]
        fn prop_first_fifteen_days_are_sprint(days in 1u32..=15) {
            let bracket = classify(days);
            prop_assert_eq!(bracket.kind, RemediationKind::Sprint);
            prop_assert_eq!(bracket.reduction_fraction(), dec("0.1"));
        }
    }
}
