use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::{types::*, FundableError, FundableResult};

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Net income (or loss, when negative) reported for one fiscal year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub year: Year,
    pub value: Money,
}

impl IncomeRecord {
    pub fn new(year: Year, value: Money) -> Self {
        Self { year, value }
    }
}

/// One company's identity plus its full annual income history.
///
/// `incomes` is unordered. Each year may appear at most once; a history
/// with duplicate years is rejected by [`CompanyHistory::validate`] and by
/// every calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyHistory {
    pub id: i64,
    pub name: String,
    /// SEC Central Index Key. Carried for bookkeeping, never used by the calculation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cik: Option<u64>,
    #[serde(default)]
    pub incomes: Vec<IncomeRecord>,
}

impl CompanyHistory {
    pub fn new(id: i64, name: impl Into<String>, incomes: Vec<IncomeRecord>) -> Self {
        Self {
            id,
            name: name.into(),
            cik: None,
            incomes,
        }
    }

    pub fn with_cik(mut self, cik: u64) -> Self {
        self.cik = Some(cik);
        self
    }

    /// Build the year-indexed view used by the calculator.
    pub fn income_table(&self) -> FundableResult<IncomeTable> {
        IncomeTable::from_records(&self.incomes)
    }

    /// Check the one-record-per-year precondition.
    pub fn validate(&self) -> FundableResult<()> {
        self.income_table().map(|_| ())
    }
}

// ---------------------------------------------------------------------------
// Year-indexed lookups
// ---------------------------------------------------------------------------

/// Mapping from fiscal year to income, built once per calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomeTable {
    by_year: BTreeMap<Year, Money>,
}

impl IncomeTable {
    pub fn from_records(records: &[IncomeRecord]) -> FundableResult<Self> {
        let mut by_year = BTreeMap::new();
        for record in records {
            match by_year.entry(record.year) {
                Entry::Vacant(slot) => {
                    slot.insert(record.value);
                }
                Entry::Occupied(_) => {
                    return Err(FundableError::DuplicateYear { year: record.year });
                }
            }
        }
        Ok(Self { by_year })
    }

    pub fn contains(&self, year: Year) -> bool {
        self.by_year.contains_key(&year)
    }

    pub fn get(&self, year: Year) -> Option<Money> {
        self.by_year.get(&year).copied()
    }

    /// Value for a year the caller has already established must exist.
    pub fn require(&self, year: Year) -> FundableResult<Money> {
        self.get(year).ok_or(FundableError::MissingYear { year })
    }

    /// Highest income recorded in `years`, or `None` if none of them are present.
    pub fn peak_in_range(&self, years: RangeInclusive<Year>) -> Option<Money> {
        self.by_year.range(years).map(|(_, value)| *value).max()
    }

    /// Years in `years` that have no record.
    pub fn missing_in_range(&self, years: RangeInclusive<Year>) -> Vec<Year> {
        years.filter(|year| !self.contains(*year)).collect()
    }

    /// Years in `years` whose value is absent, zero or negative.
    pub fn non_positive_in_range(&self, years: RangeInclusive<Year>) -> Vec<Year> {
        years
            .filter(|year| self.get(*year).map_or(true, |v| v <= Decimal::ZERO))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
