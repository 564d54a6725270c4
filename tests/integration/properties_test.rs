use proptest::prelude::*;

use shortre::semantics::cost::{naive_cost, CostMetric};
use shortre::validation::{check_exactness, generate_near_misses, NearMissConfig};
use shortre::{synthesize, synthesize_with_config, SynthConfig, NEVER_MATCH};

/// Small alphabets make shared affixes common, which is where factoring happens.
fn value_strategy() -> impl Strategy<Value = String> {
    "[abé.]{0,5}"
}

fn set_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(value_strategy(), 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn test_pattern_matches_exactly(values in set_strategy(), seed in any::<u64>()) {
        let pattern = synthesize(&values);
        let probes = generate_near_misses(&values, &NearMissConfig::default().with_seed(seed));
        let outcome = check_exactness(&pattern, &values, &probes);
        prop_assert!(outcome.is_ok(), "{:?} -> {}: {:?}", values, pattern, outcome);
    }

    #[test]
    fn test_duplicates_do_not_change_output(values in set_strategy()) {
        let doubled: Vec<String> = values.iter().chain(values.iter()).cloned().collect();
        prop_assert_eq!(synthesize(&values), synthesize(&doubled));
    }

    #[test]
    fn test_output_independent_of_input_order(
        (values, shuffled) in set_strategy().prop_flat_map(|v| {
            let original = v.clone();
            (Just(original), Just(v).prop_shuffle())
        })
    ) {
        prop_assert_eq!(synthesize(&values), synthesize(&shuffled));
    }

    #[test]
    fn test_cost_never_exceeds_naive(values in set_strategy()) {
        let result = synthesize_with_config(&values, &SynthConfig::default());
        prop_assert!(result.cost <= result.naive_cost);
        prop_assert!(result.cost_savings() >= 0);
    }

    #[test]
    fn test_char_metric_patterns_are_exact(values in set_strategy()) {
        let config = SynthConfig::default()
            .with_cost_metric(CostMetric::Chars)
            .with_min_affix_len(1);
        let result = synthesize_with_config(&values, &config);
        let probes = generate_near_misses(&values, &NearMissConfig::default().with_seed(3));
        prop_assert!(check_exactness(&result.pattern, &values, &probes).is_ok());
    }
}

#[test]
fn test_empty_set_never_matches() {
    let empty: [&str; 0] = [];
    assert_eq!(synthesize(&empty), NEVER_MATCH);
    let probes = ["", "a", "$.^"];
    assert!(check_exactness(NEVER_MATCH, &empty, &probes).is_ok());
}

#[test]
fn test_naive_cost_counts_escapes_and_separators() {
    assert_eq!(naive_cost(&["a.b", "c"], CostMetric::Bytes), 4 + 1 + 1);
}
