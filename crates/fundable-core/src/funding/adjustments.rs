use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::history::IncomeTable;
use super::policy::{DECLINE_PENALTY_MULTIPLIER, TOTAL_PERIOD_END, VOWEL_BONUS_MULTIPLIER};
use crate::{types::*, FundableResult};

/// A post-adjustment applied to the special fundable amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Adjustment {
    /// Company name starts with a vowel.
    VowelName,
    /// Income in the final year fell below the prior year.
    IncomeDecline,
}

/// Adjustments in application order. Each is a multiplication, so the order
/// does not change the result.
pub const ADJUSTMENTS: [Adjustment; 2] = [Adjustment::VowelName, Adjustment::IncomeDecline];

impl Adjustment {
    pub fn multiplier(self) -> Rate {
        match self {
            Self::VowelName => VOWEL_BONUS_MULTIPLIER,
            Self::IncomeDecline => DECLINE_PENALTY_MULTIPLIER,
        }
    }

    pub fn applies(self, name: &str, incomes: &IncomeTable) -> FundableResult<bool> {
        match self {
            Self::VowelName => Ok(starts_with_vowel(name)),
            Self::IncomeDecline => income_declined(incomes),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedAdjustment {
    pub adjustment: Adjustment,
    pub multiplier: Rate,
}

/// ASCII case-insensitive test of the first character against `a e i o u`.
/// An empty name never matches.
pub fn starts_with_vowel(name: &str) -> bool {
    matches!(
        name.chars().next().map(|c| c.to_ascii_lowercase()),
        Some('a' | 'e' | 'i' | 'o' | 'u')
    )
}

/// Whether the final year's income is strictly below the year before.
///
/// Both years must be present; a missing year is a caller bug and is
/// reported as [`crate::FundableError::MissingYear`].
pub fn income_declined(incomes: &IncomeTable) -> FundableResult<bool> {
    let last = incomes.require(TOTAL_PERIOD_END)?;
    let prior = incomes.require(TOTAL_PERIOD_END - 1)?;
    Ok(last < prior)
}

/// Apply every matching adjustment to `amount` while it remains positive.
pub fn apply_adjustments(
    amount: Money,
    name: &str,
    incomes: &IncomeTable,
) -> FundableResult<(Money, Vec<AppliedAdjustment>)> {
    let mut special = amount;
    let mut applied = Vec::new();

    for adjustment in ADJUSTMENTS {
        if special <= Decimal::ZERO {
            break;
        }
        if adjustment.applies(name, incomes)? {
            let multiplier = adjustment.multiplier();
            special *= multiplier;
            applied.push(AppliedAdjustment {
                adjustment,
                multiplier,
            });
        }
    }

    Ok((special, applied))
}
