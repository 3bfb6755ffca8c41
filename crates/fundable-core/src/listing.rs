use serde::{Deserialize, Serialize};

use crate::funding::batch::compute_fundings_where;
use crate::funding::{CompanyHistory, FundingResult};
use crate::FundableResult;

/// Optional filter on the first letter of a company name, ignoring case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_with: Option<char>,
}

impl NameFilter {
    pub fn any() -> Self {
        Self { starts_with: None }
    }

    pub fn starts_with(initial: char) -> Self {
        Self {
            starts_with: Some(initial),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match self.starts_with {
            None => true,
            Some(initial) => name
                .chars()
                .next()
                .is_some_and(|first| first.to_uppercase().eq(initial.to_uppercase())),
        }
    }
}

impl From<Option<char>> for NameFilter {
    fn from(starts_with: Option<char>) -> Self {
        Self { starts_with }
    }
}

/// Companies accepted by `filter`, with their fundable amounts, in input order.
pub fn list_fundings(
    histories: &[CompanyHistory],
    filter: NameFilter,
) -> FundableResult<Vec<FundingResult>> {
    compute_fundings_where(histories, |history| filter.matches(&history.name))
}
