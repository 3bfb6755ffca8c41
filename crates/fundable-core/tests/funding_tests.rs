use fundable_core::funding::policy::{
    DECLINE_PENALTY_MULTIPLIER, LARGE_INCOME_RATE, LARGE_INCOME_THRESHOLD, STANDARD_INCOME_RATE,
    VOWEL_BONUS_MULTIPLIER,
};
use fundable_core::funding::{
    calculate_funding, compute_funding, CompanyHistory, Eligibility, FundingResult, IncomeRecord,
};
use fundable_core::listing::{list_fundings, NameFilter};
use fundable_core::{FundableError, Money};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Helpers
// ===========================================================================

fn company(id: i64, name: &str, incomes: &[(i32, Money)]) -> CompanyHistory {
    CompanyHistory::new(
        id,
        name,
        incomes
            .iter()
            .map(|(year, value)| IncomeRecord::new(*year, *value))
            .collect(),
    )
}

fn growing(name: &str) -> CompanyHistory {
    company(
        1,
        name,
        &[
            (2018, dec!(5_000_000_000)),
            (2019, dec!(5_500_000_000)),
            (2020, dec!(6_000_000_000)),
            (2021, dec!(6_500_000_000)),
            (2022, dec!(7_000_000_000)),
        ],
    )
}

fn assert_zero(result: &FundingResult) {
    assert_eq!(result.standard_fundable_amount, Decimal::ZERO);
    assert_eq!(result.special_fundable_amount, Decimal::ZERO);
}

// ===========================================================================
// Scenarios
// ===========================================================================

#[test]
fn test_scenario_a_large_income_no_adjustments() {
    let history = company(
        10,
        "Zebra Inc",
        &[
            (2018, dec!(10_000_000_000)),
            (2019, dec!(12_000_000_000)),
            (2020, dec!(14_000_000_000)),
            (2021, dec!(15_000_000_000)),
            (2022, dec!(16_000_000_000)),
        ],
    );
    let result = compute_funding(&history).unwrap();

    let expected = dec!(16_000_000_000) * LARGE_INCOME_RATE;
    assert_eq!(
        result,
        FundingResult {
            id: 10,
            name: "Zebra Inc".to_string(),
            standard_fundable_amount: expected,
            special_fundable_amount: expected,
        }
    );
}

#[test]
fn test_scenario_b_vowel_bonus_and_decline_penalty() {
    let history = company(
        2,
        "Apple Inc",
        &[
            (2018, dec!(5_000_000_000)),
            (2019, dec!(6_000_000_000)),
            (2020, dec!(7_000_000_000)),
            (2021, dec!(8_000_000_000)),
            (2022, dec!(7_000_000_000)),
        ],
    );
    let result = compute_funding(&history).unwrap();

    let standard = dec!(8_000_000_000) * STANDARD_INCOME_RATE;
    assert_eq!(result.standard_fundable_amount, standard);
    assert_eq!(
        result.special_fundable_amount,
        standard * VOWEL_BONUS_MULTIPLIER * DECLINE_PENALTY_MULTIPLIER
    );
}

#[test]
fn test_scenario_c_missing_first_year() {
    let history = company(
        3,
        "Apple Inc",
        &[
            (2019, dec!(6_000_000_000)),
            (2020, dec!(7_000_000_000)),
            (2021, dec!(8_000_000_000)),
            (2022, dec!(9_000_000_000)),
        ],
    );
    assert_zero(&compute_funding(&history).unwrap());
}

#[test]
fn test_scenario_d_zero_income_in_positive_period() {
    let history = company(
        4,
        "Apple Inc",
        &[
            (2018, dec!(5_000_000_000)),
            (2019, dec!(6_000_000_000)),
            (2020, dec!(7_000_000_000)),
            (2021, dec!(0)),
            (2022, dec!(8_000_000_000)),
        ],
    );
    assert_zero(&compute_funding(&history).unwrap());
}

// ===========================================================================
// Eligibility gates
// ===========================================================================

#[test]
fn test_any_missing_year_disqualifies() {
    for missing in 2018..=2022 {
        let incomes: Vec<(i32, Money)> = (2018..=2022)
            .filter(|y| *y != missing)
            .map(|y| (y, dec!(20_000_000_000)))
            .collect();
        let result = compute_funding(&company(1, "Apple", &incomes)).unwrap();
        assert_zero(&result);
    }
}

#[test]
fn test_negative_final_year_disqualifies() {
    let history = company(
        1,
        "Apple",
        &[
            (2018, dec!(1_000)),
            (2019, dec!(1_000)),
            (2020, dec!(1_000)),
            (2021, dec!(1_000)),
            (2022, dec!(-1)),
        ],
    );
    assert_zero(&compute_funding(&history).unwrap());
}

#[test]
fn test_losses_before_positive_period_are_allowed() {
    let history = company(
        1,
        "Zebra",
        &[
            (2018, dec!(-9_000)),
            (2019, dec!(0)),
            (2020, dec!(-1)),
            (2021, dec!(100)),
            (2022, dec!(200)),
        ],
    );
    let result = compute_funding(&history).unwrap();
    assert_eq!(result.standard_fundable_amount, dec!(200) * STANDARD_INCOME_RATE);
}

#[test]
fn test_years_outside_total_period_are_ignored_for_peak() {
    let mut history = growing("Zebra Corp");
    history.incomes.push(IncomeRecord::new(2017, dec!(90_000_000_000)));
    history.incomes.push(IncomeRecord::new(2023, dec!(90_000_000_000)));
    let result = compute_funding(&history).unwrap();
    assert_eq!(
        result.standard_fundable_amount,
        dec!(7_000_000_000) * STANDARD_INCOME_RATE
    );
}

#[test]
fn test_peak_can_come_from_an_early_year() {
    let history = company(
        1,
        "Zebra",
        &[
            (2018, dec!(12_000_000_000)),
            (2019, dec!(1)),
            (2020, dec!(1)),
            (2021, dec!(1)),
            (2022, dec!(2)),
        ],
    );
    let result = compute_funding(&history).unwrap();
    assert_eq!(
        result.standard_fundable_amount,
        dec!(12_000_000_000) * LARGE_INCOME_RATE
    );
}

// ===========================================================================
// Rate tiers
// ===========================================================================

#[test]
fn test_threshold_equality_uses_large_rate() {
    let incomes: Vec<(i32, Money)> = (2018..=2022).map(|y| (y, LARGE_INCOME_THRESHOLD)).collect();
    let result = compute_funding(&company(1, "Zebra Inc", &incomes)).unwrap();
    assert_eq!(
        result.standard_fundable_amount,
        LARGE_INCOME_THRESHOLD * LARGE_INCOME_RATE
    );
}

#[test]
fn test_below_threshold_uses_standard_rate() {
    let result = compute_funding(&growing("Zebra Inc")).unwrap();
    assert_eq!(
        result.standard_fundable_amount,
        dec!(7_000_000_000) * STANDARD_INCOME_RATE
    );
}

// ===========================================================================
// Adjustments
// ===========================================================================

#[test]
fn test_vowel_bonus_without_decline() {
    for name in ["Apple Inc", "orange Corp", "Uber Systems", "Intel Ltd", "ebay Industries"] {
        let result = compute_funding(&growing(name)).unwrap();
        assert_eq!(
            result.special_fundable_amount,
            result.standard_fundable_amount * VOWEL_BONUS_MULTIPLIER,
            "{name}"
        );
    }
}

#[test]
fn test_consonant_names_get_no_bonus() {
    for name in ["Zebra Corp", "microsoft Inc", "Google LLC", "Facebook Inc", "netflix Corp"] {
        let result = compute_funding(&growing(name)).unwrap();
        assert_eq!(result.special_fundable_amount, result.standard_fundable_amount);
    }
}

#[test]
fn test_changing_first_letter_drops_bonus() {
    let vowel = compute_funding(&growing("Apex")).unwrap();
    let consonant = compute_funding(&growing("Bpex")).unwrap();
    assert_eq!(vowel.standard_fundable_amount, consonant.standard_fundable_amount);
    assert!(vowel.special_fundable_amount > consonant.special_fundable_amount);
    assert_eq!(
        consonant.special_fundable_amount,
        consonant.standard_fundable_amount
    );
}

#[test]
fn test_empty_name_gets_no_bonus() {
    let output = calculate_funding(&growing("")).unwrap();
    let funding = &output.result.funding;
    assert_eq!(funding.special_fundable_amount, funding.standard_fundable_amount);
    assert_eq!(output.warnings.len(), 1);
}

#[test]
fn test_decline_penalty_only() {
    let history = company(
        1,
        "Zebra Inc",
        &[
            (2018, dec!(5_000_000_000)),
            (2019, dec!(6_000_000_000)),
            (2020, dec!(7_000_000_000)),
            (2021, dec!(8_000_000_000)),
            (2022, dec!(7_500_000_000)),
        ],
    );
    let result = compute_funding(&history).unwrap();
    let standard = dec!(8_000_000_000) * STANDARD_INCOME_RATE;
    assert_eq!(result.standard_fundable_amount, standard);
    assert_eq!(result.special_fundable_amount, standard * DECLINE_PENALTY_MULTIPLIER);
}

#[test]
fn test_flat_final_year_is_not_a_decline() {
    let history = company(
        1,
        "Zebra Inc",
        &[
            (2018, dec!(5_000_000_000)),
            (2019, dec!(6_000_000_000)),
            (2020, dec!(7_000_000_000)),
            (2021, dec!(8_000_000_000)),
            (2022, dec!(8_000_000_000)),
        ],
    );
    let result = compute_funding(&history).unwrap();
    assert_eq!(result.special_fundable_amount, result.standard_fundable_amount);
}

// ===========================================================================
// Contract and determinism
// ===========================================================================

#[test]
fn test_duplicate_year_is_rejected() {
    let mut history = growing("Apple");
    history.incomes.push(IncomeRecord::new(2021, dec!(1)));
    let err = compute_funding(&history).unwrap_err();
    assert!(matches!(err, FundableError::DuplicateYear { year: 2021 }));
}

#[test]
fn test_record_order_does_not_matter() {
    let forward = growing("Apple");
    let mut reversed = forward.clone();
    reversed.incomes.reverse();
    assert_eq!(
        compute_funding(&forward).unwrap(),
        compute_funding(&reversed).unwrap()
    );
}

#[test]
fn test_repeated_calls_are_identical() {
    let history = growing("Orbit Ltd");
    let first = compute_funding(&history).unwrap();
    let second = compute_funding(&history).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_envelope_reports_eligibility() {
    let output = calculate_funding(&company(9, "Apple", &[(2022, dec!(5))])).unwrap();
    assert_eq!(
        output.result.eligibility,
        Eligibility::IncompleteHistory {
            missing_years: vec![2018, 2019, 2020, 2021]
        }
    );
    assert_eq!(output.metadata.precision, "rust_decimal_128bit");
}

// ===========================================================================
// Listing
// ===========================================================================

#[test]
fn test_listing_by_initial() {
    let companies = vec![
        growing("Apple Inc"),
        company(2, "Boeing", &[(2022, dec!(1))]),
        company(3, "alphabet", &[(2022, dec!(1))]),
    ];
    let listed = list_fundings(&companies, NameFilter::starts_with('a')).unwrap();
    let names: Vec<&str> = listed.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Apple Inc", "alphabet"]);

    let everything = list_fundings(&companies, NameFilter::any()).unwrap();
    assert_eq!(everything.len(), 3);
}

#[test]
fn test_deserialise_history_from_json() {
    let history: CompanyHistory = serde_json::from_str(
        r#"{
            "id": 5,
            "name": "Exxon",
            "incomes": [
                {"year": 2018, "value": "100"},
                {"year": 2019, "value": 100},
                {"year": 2020, "value": "100"},
                {"year": 2021, "value": "100"},
                {"year": 2022, "value": "50"}
            ]
        }"#,
    )
    .unwrap();
    let result = compute_funding(&history).unwrap();
    let standard = dec!(100) * STANDARD_INCOME_RATE;
    assert_eq!(result.standard_fundable_amount, standard);
    assert_eq!(
        result.special_fundable_amount,
        standard * VOWEL_BONUS_MULTIPLIER * DECLINE_PENALTY_MULTIPLIER
    );
}
