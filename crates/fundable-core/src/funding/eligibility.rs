use serde::{Deserialize, Serialize};
use tracing::debug;

use super::history::IncomeTable;
use super::policy::{positive_period, total_period};
use crate::types::Year;

/// Outcome of the funding eligibility test.
///
/// Ineligibility is a normal business outcome, not an error: the company
/// simply receives no funding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Eligibility {
    Eligible,
    /// At least one year of the total period has no income record.
    IncompleteHistory { missing_years: Vec<Year> },
    /// At least one year of the positive period reported zero or a loss.
    NonPositiveRecentIncome { years: Vec<Year> },
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible)
    }
}

impl std::fmt::Display for Eligibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eligible => write!(f, "Eligible"),
            Self::IncompleteHistory { missing_years } => {
                write!(f, "Ineligible: no income reported for {}", join_years(missing_years))
            }
            Self::NonPositiveRecentIncome { years } => write!(
                f,
                "Ineligible: income not strictly positive in {}",
                join_years(years)
            ),
        }
    }
}

/// Run the completeness gate, then the recent-positivity gate.
pub fn assess_eligibility(table: &IncomeTable) -> Eligibility {
    let missing_years = table.missing_in_range(total_period());
    if !missing_years.is_empty() {
        debug!(?missing_years, "income history incomplete");
        return Eligibility::IncompleteHistory { missing_years };
    }

    let years = table.non_positive_in_range(positive_period());
    if !years.is_empty() {
        debug!(?years, "recent income not positive");
        return Eligibility::NonPositiveRecentIncome { years };
    }

    Eligibility::Eligible
}

fn join_years(years: &[Year]) -> String {
    years
        .iter()
        .map(|y| y.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
