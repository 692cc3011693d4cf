use sasmodels_core::numerics::special::SpecialFunction;
use sasmodels_core::numerics::{
    NUMERIC_TOLERANCE_POLICY_PATH, NumericTolerancePolicy, compare_with_policy_tolerance,
    load_numeric_tolerance_policy,
};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

fn workspace_root() -> PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

#[derive(Debug, Deserialize)]
struct SpecialFunctionFixtures {
    cases: Vec<SpecialFunctionCase>,
}

#[derive(Debug, Deserialize)]
struct SpecialFunctionCase {
    id: String,
    function: String,
    category: String,
    arguments: Vec<f64>,
    expected: Vec<f64>,
}

fn load_fixtures() -> (SpecialFunctionFixtures, NumericTolerancePolicy) {
    let root = workspace_root();
    let fixture_path = root.join("tasks/special-function-reference-fixtures.json");
    let source = fs::read_to_string(&fixture_path).expect("special function fixtures should exist");
    let fixtures = serde_json::from_str(&source).expect("special function fixtures should parse");
    let policy = load_numeric_tolerance_policy(root.join(NUMERIC_TOLERANCE_POLICY_PATH))
        .expect("tolerance policy should load");
    (fixtures, policy)
}

#[test]
fn special_functions_match_high_precision_references() {
    let (fixtures, policy) = load_fixtures();
    assert!(!fixtures.cases.is_empty());

    for case in &fixtures.cases {
        let function = SpecialFunction::from_name(&case.function)
            .unwrap_or_else(|| panic!("{}: unknown function '{}'", case.id, case.function));
        let tolerance = policy
            .tolerance_for_category(&case.category)
            .unwrap_or_else(|| panic!("{}: missing category '{}'", case.id, case.category));
        assert_eq!(case.arguments.len(), case.expected.len(), "{}", case.id);

        for (&x, &expected) in case.arguments.iter().zip(&case.expected) {
            let actual = function.evaluate(x);
            let comparison = compare_with_policy_tolerance(expected, actual, tolerance);
            assert!(
                comparison.passes,
                "{} x={x}: expected {expected:e}, got {actual:e} (abs {:e}, rel {:e})",
                case.id,
                comparison.abs_diff,
                comparison.rel_diff
            );
        }
    }
}

#[test]
fn every_named_function_has_reference_coverage() {
    let (fixtures, _) = load_fixtures();
    for function in SpecialFunction::ALL {
        if function == SpecialFunction::LnGamma {
            continue;
        }
        assert!(
            fixtures
                .cases
                .iter()
                .any(|case| case.function == function.as_str()),
            "no reference case for {function}"
        );
    }
}
