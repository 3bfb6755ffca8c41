use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use super::adjustments::{apply_adjustments, AppliedAdjustment};
use super::eligibility::{assess_eligibility, Eligibility};
use super::history::CompanyHistory;
use super::policy::{policy_assumptions, total_period, TOTAL_PERIOD_START};
use super::rate::RateSelection;
use crate::{types::*, FundableError, FundableResult};

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Fundable amounts for one company.
///
/// Both amounts are non-negative, and the special amount is zero whenever
/// the standard amount is zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingResult {
    pub id: i64,
    pub name: String,
    pub standard_fundable_amount: Money,
    pub special_fundable_amount: Money,
}

impl FundingResult {
    fn zero(history: &CompanyHistory) -> Self {
        Self {
            id: history.id,
            name: history.name.clone(),
            standard_fundable_amount: Decimal::ZERO,
            special_fundable_amount: Decimal::ZERO,
        }
    }
}

/// A [`FundingResult`] together with how it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingAssessment {
    #[serde(flatten)]
    pub funding: FundingResult,
    pub eligibility: Eligibility,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<RateSelection>,
    #[serde(default)]
    pub adjustments: Vec<AppliedAdjustment>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the standard and special fundable amounts for one company.
///
/// Pure and deterministic. Fails only when the history breaks the
/// one-record-per-year precondition.
pub fn compute_funding(history: &CompanyHistory) -> FundableResult<FundingResult> {
    assess_funding(history).map(|assessment| assessment.funding)
}

/// Same as [`compute_funding`] but keeps the eligibility outcome, the
/// selected rate tier and the adjustments that were applied.
pub fn assess_funding(history: &CompanyHistory) -> FundableResult<FundingAssessment> {
    let incomes = history.income_table()?;

    let eligibility = assess_eligibility(&incomes);
    if !eligibility.is_eligible() {
        debug!(id = history.id, name = %history.name, %eligibility, "no funding");
        return Ok(FundingAssessment {
            funding: FundingResult::zero(history),
            eligibility,
            rate: None,
            adjustments: Vec::new(),
        });
    }

    // Completeness guarantees every year of the total period is present.
    let peak_income = incomes
        .peak_in_range(total_period())
        .ok_or(FundableError::MissingYear {
            year: TOTAL_PERIOD_START,
        })?;
    let rate = RateSelection::for_peak(peak_income);
    let standard = rate.standard_fundable_amount();

    let (special, adjustments) = apply_adjustments(standard, &history.name, &incomes)?;

    debug!(
        id = history.id,
        name = %history.name,
        %peak_income,
        tier = %rate.tier,
        %standard,
        %special,
        "funding computed"
    );

    Ok(FundingAssessment {
        funding: FundingResult {
            id: history.id,
            name: history.name.clone(),
            standard_fundable_amount: standard,
            special_fundable_amount: special,
        },
        eligibility,
        rate: Some(rate),
        adjustments,
    })
}

/// Assess one company and wrap the outcome in the standard output envelope.
///
/// Ineligibility is reported as a warning, not an error.
pub fn calculate_funding(
    history: &CompanyHistory,
) -> FundableResult<ComputationOutput<FundingAssessment>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let assessment = assess_funding(history)?;

    if !assessment.eligibility.is_eligible() {
        warnings.push(assessment.eligibility.to_string());
    }
    if history.name.is_empty() {
        warnings.push("Company name is empty; the vowel bonus cannot apply.".to_string());
    }

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Fundable amount: peak 2018-2022 net income x rate tier, with vowel-name bonus and decline penalty",
        &policy_assumptions(),
        warnings,
        elapsed,
        assessment,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
