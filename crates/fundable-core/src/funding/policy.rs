//! Fixed funding policy. These values are part of the programme rules and
//! are deliberately not configurable at runtime.

use rust_decimal_macros::dec;
use std::ops::RangeInclusive;

use crate::types::{Money, Rate, Year};

/// First year of the period in which every year must carry an income record.
pub const TOTAL_PERIOD_START: Year = 2018;
/// Last year of the total period (inclusive).
pub const TOTAL_PERIOD_END: Year = 2022;
/// Number of trailing years of the total period that must show positive income.
pub const POSITIVE_PERIOD_LENGTH: Year = 2;

pub const LARGE_INCOME_THRESHOLD: Money = dec!(10_000_000_000);
pub const LARGE_INCOME_RATE: Rate = dec!(0.1233);
pub const STANDARD_INCOME_RATE: Rate = dec!(0.2151);

pub const VOWEL_BONUS_MULTIPLIER: Rate = dec!(1.15);
pub const DECLINE_PENALTY_MULTIPLIER: Rate = dec!(0.75);

/// `[TOTAL_PERIOD_START, TOTAL_PERIOD_END]`
pub fn total_period() -> RangeInclusive<Year> {
    TOTAL_PERIOD_START..=TOTAL_PERIOD_END
}

/// The last `POSITIVE_PERIOD_LENGTH` years of the total period.
pub fn positive_period() -> RangeInclusive<Year> {
    (TOTAL_PERIOD_END - POSITIVE_PERIOD_LENGTH + 1)..=TOTAL_PERIOD_END
}

/// Policy summary attached to every computation envelope.
pub fn policy_assumptions() -> serde_json::Value {
    serde_json::json!({
        "total_period": [TOTAL_PERIOD_START, TOTAL_PERIOD_END],
        "positive_period": [TOTAL_PERIOD_END - POSITIVE_PERIOD_LENGTH + 1, TOTAL_PERIOD_END],
        "large_income_threshold": LARGE_INCOME_THRESHOLD.to_string(),
        "large_income_rate": LARGE_INCOME_RATE.to_string(),
        "standard_income_rate": STANDARD_INCOME_RATE.to_string(),
        "vowel_bonus_multiplier": VOWEL_BONUS_MULTIPLIER.to_string(),
        "decline_penalty_multiplier": DECLINE_PENALTY_MULTIPLIER.to_string(),
        "threshold_comparison": "peak income >= threshold uses the large income rate",
    })
}
