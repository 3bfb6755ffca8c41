use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;

use fundable_core::funding::CompanyHistory;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Funding
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_funding(input_json: String) -> NapiResult<String> {
    let input: CompanyHistory = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fundable_core::funding::compute_funding(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_funding(input_json: String) -> NapiResult<String> {
    let input: CompanyHistory = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fundable_core::funding::calculate_funding(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[derive(Deserialize)]
struct ListInput {
    companies: Vec<CompanyHistory>,
    #[serde(default)]
    starts_with: Option<char>,
}

#[napi]
pub fn list_fundings(input_json: String) -> NapiResult<String> {
    let input: ListInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fundable_core::listing::list_fundings(&input.companies, input.starts_with.into())
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// EDGAR
// ---------------------------------------------------------------------------

#[napi]
pub fn normalize_company_facts(facts_json: String, id: i64) -> NapiResult<String> {
    let facts =
        fundable_core::edgar::parse_company_facts(&facts_json).map_err(to_napi_error)?;
    let history = fundable_core::edgar::normalize_company_facts(&facts, id);
    serde_json::to_string(&history).map_err(to_napi_error)
}
