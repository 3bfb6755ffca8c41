//! Evaluating many companies at once.
//!
//! Each company is independent of every other, so with the `parallel`
//! feature the work is spread across the rayon thread pool. Output order
//! always matches input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::calculator::{compute_funding, FundingResult};
use super::history::CompanyHistory;
use crate::FundableResult;

/// Compute funding for every company in `histories`.
///
/// Stops at the first history that violates the one-record-per-year
/// precondition.
pub fn compute_fundings(histories: &[CompanyHistory]) -> FundableResult<Vec<FundingResult>> {
    compute_fundings_where(histories, |_| true)
}

/// Compute funding for the companies accepted by `keep`, in input order.
pub fn compute_fundings_where<F>(
    histories: &[CompanyHistory],
    keep: F,
) -> FundableResult<Vec<FundingResult>>
where
    F: Fn(&CompanyHistory) -> bool + Sync,
{
    #[cfg(feature = "parallel")]
    {
        histories
            .par_iter()
            .filter(|history| keep(*history))
            .map(compute_funding)
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        histories
            .iter()
            .filter(|history| keep(*history))
            .map(compute_funding)
            .collect()
    }
}
