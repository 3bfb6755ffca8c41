//! SEC EDGAR "company facts" ingestion.
//!
//! Turns the `api/xbrl/companyfacts` JSON document of one company into a
//! [`CompanyHistory`](crate::funding::CompanyHistory) of annual net income,
//! keeping only 10-K filings tagged with a calendar-year frame.

pub mod facts;
pub mod normalize;

pub use facts::EdgarCompanyFacts;
pub use normalize::{normalize_company_facts, parse_annual_frame, parse_company_facts};

/// CIKs are published zero-padded to ten digits.
pub fn format_cik(cik: u64) -> String {
    format!("{cik:010}")
}

/// File name EDGAR uses for a company-facts document, e.g. `CIK0000320193.json`.
pub fn facts_file_name(cik: u64) -> String {
    format!("CIK{}.json", format_cik(cik))
}

/// Path of the company-facts document relative to `https://data.sec.gov/`.
pub fn facts_url_path(cik: u64) -> String {
    format!("api/xbrl/companyfacts/{}", facts_file_name(cik))
}
