use serde::{Deserialize, Serialize};

use super::policy::{LARGE_INCOME_RATE, LARGE_INCOME_THRESHOLD, STANDARD_INCOME_RATE};
use crate::types::{Money, Rate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateTier {
    /// Peak income at or above the large-income threshold.
    Large,
    Standard,
}

impl RateTier {
    /// The threshold comparison is inclusive: a peak equal to the threshold is `Large`.
    pub fn for_peak(peak_income: Money) -> Self {
        if peak_income >= LARGE_INCOME_THRESHOLD {
            Self::Large
        } else {
            Self::Standard
        }
    }

    pub fn rate(self) -> Rate {
        match self {
            Self::Large => LARGE_INCOME_RATE,
            Self::Standard => STANDARD_INCOME_RATE,
        }
    }
}

impl std::fmt::Display for RateTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Large => write!(f, "Large income"),
            Self::Standard => write!(f, "Standard income"),
        }
    }
}

/// Rate tier chosen from the peak income of the total period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSelection {
    pub peak_income: Money,
    pub tier: RateTier,
    pub rate: Rate,
}

impl RateSelection {
    pub fn for_peak(peak_income: Money) -> Self {
        let tier = RateTier::for_peak(peak_income);
        Self {
            peak_income,
            tier,
            rate: tier.rate(),
        }
    }

    /// `peak_income * rate`
    pub fn standard_fundable_amount(&self) -> Money {
        self.peak_income * self.rate
    }
}
