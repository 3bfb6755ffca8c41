use fundable_core::edgar::{facts_file_name, normalize_company_facts, parse_company_facts};
use fundable_core::funding::policy::{
    DECLINE_PENALTY_MULTIPLIER, LARGE_INCOME_RATE, VOWEL_BONUS_MULTIPLIER,
};
use fundable_core::funding::{compute_funding, IncomeRecord};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Trimmed-down company-facts document in the shape EDGAR publishes.
const APPLE_FACTS: &str = r#"{
  "cik": 320193,
  "entityName": "Apple Inc.",
  "facts": {
    "dei": {},
    "us-gaap": {
      "NetIncomeLoss": {
        "label": "Net Income (Loss) Attributable to Parent",
        "units": {
          "USD": [
            {"end": "2018-09-29", "val": 59531000000, "fy": 2018, "fp": "FY", "form": "10-K", "frame": "CY2018"},
            {"end": "2019-09-28", "val": 55256000000, "fy": 2019, "fp": "FY", "form": "10-K", "frame": "CY2019"},
            {"end": "2019-12-28", "val": 22236000000, "fy": 2020, "fp": "Q1", "form": "10-Q", "frame": "CY2019Q4"},
            {"end": "2020-09-26", "val": 57411000000, "fy": 2020, "fp": "FY", "form": "10-K", "frame": "CY2020"},
            {"end": "2021-09-25", "val": 94680000000, "fy": 2021, "fp": "FY", "form": "10-K", "frame": "CY2021"},
            {"end": "2021-09-25", "val": 20551000000, "fy": 2021, "fp": "FY", "form": "10-K", "frame": "CY2021Q3"},
            {"end": "2022-09-24", "val": 99803000000, "fy": 2022, "fp": "FY", "form": "10-K", "frame": "CY2022"},
            {"end": "2022-09-24", "val": 1, "fy": 2022, "fp": "FY", "form": "10-K"},
            {"end": "2022-09-24", "val": 2, "fy": 2022, "fp": "FY", "form": "8-K", "frame": "CY2022"}
          ]
        }
      }
    }
  }
}"#;

#[test]
fn test_filters_to_annual_10k_frames() {
    let facts = parse_company_facts(APPLE_FACTS).unwrap();
    let history = normalize_company_facts(&facts, 1);

    assert_eq!(history.id, 1);
    assert_eq!(history.cik, Some(320193));
    assert_eq!(history.name, "Apple Inc.");
    assert_eq!(
        history.incomes,
        vec![
            IncomeRecord::new(2018, dec!(59_531_000_000)),
            IncomeRecord::new(2019, dec!(55_256_000_000)),
            IncomeRecord::new(2020, dec!(57_411_000_000)),
            IncomeRecord::new(2021, dec!(94_680_000_000)),
            IncomeRecord::new(2022, dec!(99_803_000_000)),
        ]
    );
}

#[test]
fn test_normalised_history_feeds_calculator() {
    let facts = parse_company_facts(APPLE_FACTS).unwrap();
    let result = compute_funding(&normalize_company_facts(&facts, 1)).unwrap();

    let standard = dec!(99_803_000_000) * LARGE_INCOME_RATE;
    assert_eq!(result.standard_fundable_amount, standard);
    assert_eq!(result.special_fundable_amount, standard * VOWEL_BONUS_MULTIPLIER);
}

#[test]
fn test_duplicate_years_keep_last_value() {
    let json = r#"{
      "cik": 7,
      "entityName": "Ion Corp",
      "facts": {"us-gaap": {"NetIncomeLoss": {"units": {"USD": [
        {"val": 10, "form": "10-K", "frame": "CY2018"},
        {"val": 10, "form": "10-K", "frame": "CY2019"},
        {"val": 10, "form": "10-K", "frame": "CY2020"},
        {"val": 10, "form": "10-K", "frame": "CY2021"},
        {"val": 12, "form": "10-K", "frame": "CY2022"},
        {"val": 8, "form": "10-K", "frame": "CY2022"}
      ]}}}}
    }"#;
    let history = normalize_company_facts(&parse_company_facts(json).unwrap(), 3);
    assert_eq!(history.incomes.len(), 5);
    assert_eq!(history.incomes[4], IncomeRecord::new(2022, dec!(8)));

    let result = compute_funding(&history).unwrap();
    assert_eq!(
        result.special_fundable_amount,
        result.standard_fundable_amount * VOWEL_BONUS_MULTIPLIER * DECLINE_PENALTY_MULTIPLIER
    );
}

#[test]
fn test_company_without_net_income_is_ineligible() {
    let json = r#"{"cik": 1750, "entityName": "AAR CORP", "facts": {"dei": {}}}"#;
    let history = normalize_company_facts(&parse_company_facts(json).unwrap(), 4);
    assert!(history.incomes.is_empty());

    let result = compute_funding(&history).unwrap();
    assert_eq!(result.standard_fundable_amount, Decimal::ZERO);
    assert_eq!(result.special_fundable_amount, Decimal::ZERO);
}

#[test]
fn test_malformed_document_is_an_error() {
    assert!(parse_company_facts("{\"cik\": \"not a number\"").is_err());
}

#[test]
fn test_facts_file_name_matches_edgar_layout() {
    assert_eq!(facts_file_name(320193), "CIK0000320193.json");
}
