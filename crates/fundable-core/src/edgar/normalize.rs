use std::collections::BTreeMap;
use tracing::warn;

use super::facts::{EdgarCompanyFacts, UnitFact};
use crate::funding::{CompanyHistory, IncomeRecord};
use crate::{types::*, FundableError, FundableResult};

/// Only annual reports feed the funding calculation.
pub const ANNUAL_REPORT_FORM: &str = "10-K";

const ANNUAL_FRAME_PREFIX: &str = "CY";

/// Parse an annual frame tag (`CY` followed by exactly four digits).
///
/// ```
/// use fundable_core::edgar::parse_annual_frame;
/// assert_eq!(parse_annual_frame("CY2021").unwrap(), 2021);
/// assert!(parse_annual_frame("CY2021Q4I").is_err());
/// ```
pub fn parse_annual_frame(frame: &str) -> FundableResult<Year> {
    let digits = frame
        .strip_prefix(ANNUAL_FRAME_PREFIX)
        .filter(|rest| rest.len() == 4 && rest.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| FundableError::InvalidFrame(frame.to_string()))?;
    digits
        .parse()
        .map_err(|_| FundableError::InvalidFrame(frame.to_string()))
}

/// The year of a fact if it comes from a 10-K with an annual frame.
fn annual_year(fact: &UnitFact) -> Option<Year> {
    if fact.form.as_deref() != Some(ANNUAL_REPORT_FORM) {
        return None;
    }
    parse_annual_frame(fact.frame.as_deref()?).ok()
}

/// Build the calculator input for one company.
///
/// Facts that are not 10-K or not tagged with an annual frame are dropped.
/// If EDGAR reports the same year more than once, the last value wins and a
/// warning is logged, so the resulting history always has unique years.
pub fn normalize_company_facts(facts: &EdgarCompanyFacts, id: i64) -> CompanyHistory {
    let mut by_year: BTreeMap<Year, Money> = BTreeMap::new();

    for fact in facts.net_income_usd() {
        let Some(year) = annual_year(fact) else {
            continue;
        };
        if let Some(previous) = by_year.insert(year, fact.val) {
            warn!(
                cik = facts.cik,
                year,
                %previous,
                replacement = %fact.val,
                "duplicate annual net income, keeping the last value"
            );
        }
    }

    let incomes = by_year
        .into_iter()
        .map(|(year, value)| IncomeRecord::new(year, value))
        .collect();

    CompanyHistory::new(id, facts.entity_name.clone(), incomes).with_cik(facts.cik)
}

/// Deserialise a company-facts JSON document.
pub fn parse_company_facts(json: &str) -> FundableResult<EdgarCompanyFacts> {
    Ok(serde_json::from_str(json)?)
}
