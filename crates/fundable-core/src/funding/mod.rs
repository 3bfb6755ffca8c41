pub mod adjustments;
pub mod batch;
pub mod calculator;
pub mod eligibility;
pub mod history;
pub mod policy;
pub mod rate;

pub use adjustments::{Adjustment, AppliedAdjustment};
pub use batch::{compute_fundings, compute_fundings_where};
pub use calculator::{
    assess_funding, calculate_funding, compute_funding, FundingAssessment, FundingResult,
};
pub use eligibility::Eligibility;
pub use history::{CompanyHistory, IncomeRecord, IncomeTable};
pub use rate::{RateSelection, RateTier};
