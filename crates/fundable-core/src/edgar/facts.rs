use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The subset of an EDGAR company-facts document used for funding.
///
/// Every level below the company identity is optional: many filers have
/// no `us-gaap` facts, or no `NetIncomeLoss` concept, or no USD units.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgarCompanyFacts {
    #[serde(default)]
    pub cik: u64,
    #[serde(default)]
    pub entity_name: String,
    #[serde(default)]
    pub facts: Option<FactGroups>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactGroups {
    #[serde(rename = "us-gaap", default)]
    pub us_gaap: Option<UsGaapFacts>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsGaapFacts {
    #[serde(rename = "NetIncomeLoss", default)]
    pub net_income_loss: Option<Concept>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Concept {
    #[serde(default)]
    pub units: Option<ConceptUnits>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConceptUnits {
    #[serde(rename = "USD", default)]
    pub usd: Option<Vec<UnitFact>>,
}

/// One reported value of a concept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitFact {
    /// Filing form, e.g. `10-K`, `10-Q`, `8-K`, `20-F`.
    #[serde(default)]
    pub form: Option<String>,
    /// Period tag. Annual values use `CY` plus the year, e.g. `CY2021`;
    /// quarterly and instant values use longer tags such as `CY2021Q4I`.
    #[serde(default)]
    pub frame: Option<String>,
    pub val: Decimal,
}

impl EdgarCompanyFacts {
    /// USD net income facts, or an empty slice when any level is absent.
    pub fn net_income_usd(&self) -> &[UnitFact] {
        self.facts
            .as_ref()
            .and_then(|f| f.us_gaap.as_ref())
            .and_then(|g| g.net_income_loss.as_ref())
            .and_then(|c| c.units.as_ref())
            .and_then(|u| u.usd.as_deref())
            .unwrap_or(&[])
    }
}
