//! Property-based tests for entropy, gain and induction.

use proptest::prelude::*;

use id3tree::testing::{RandomSpec, random_categorical, single_outcome};
use id3tree::training::{
    ConflictPolicy, ConflictRegistry, ConflictResolution, NullSink, OutcomeCounts, TreeConfig,
    build_tree, entropy, information_gain,
};
use id3tree::{DecisionNode, DecisionTree, Prediction};

// =============================================================================
// Strategies
// =============================================================================

fn arb_spec() -> impl Strategy<Value = RandomSpec> {
    (1usize..40, 1usize..5, 1usize..5, 1usize..4)
        .prop_map(|(rows, attributes, values, outcomes)| {
            RandomSpec::new(rows, attributes, values, outcomes)
        })
}

fn arb_policy() -> impl Strategy<Value = ConflictPolicy> {
    prop_oneof![Just(ConflictPolicy::FallbackLabel), Just(ConflictPolicy::MostCommon)]
}

fn depth_bound_holds(node: &DecisionNode, remaining: usize) -> bool {
    match node {
        DecisionNode::Leaf { .. } => true,
        DecisionNode::Split { .. } => {
            remaining > 0 && node.children().all(|(_, c)| depth_bound_holds(c, remaining - 1))
        }
    }
}

fn no_attribute_repeats(node: &DecisionNode, seen: &mut Vec<String>) -> bool {
    let Some(attribute) = node.attribute() else {
        return true;
    };
    if seen.iter().any(|a| a == attribute) {
        return false;
    }
    seen.push(attribute.to_string());
    let ok = node.children().all(|(_, c)| no_attribute_repeats(c, seen));
    seen.pop();
    ok
}

fn train(spec: RandomSpec, seed: u64, policy: ConflictPolicy) -> (id3tree::Dataset, DecisionTree) {
    let ds = random_categorical(spec, seed);
    let resolution = ConflictResolution::new(ConflictRegistry::detect(&ds), policy);
    let tree = build_tree(&ds, &TreeConfig::default(), &resolution, &mut NullSink);
    (ds, tree)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn entropy_is_bounded_by_log2_of_outcome_count(spec in arb_spec(), seed in any::<u64>()) {
        let ds = random_categorical(spec, seed);
        let h = entropy(ds.records());
        let k = OutcomeCounts::from_rows(ds.records()).n_outcomes() as f64;
        prop_assert!(h >= 0.0);
        prop_assert!(h <= k.log2() + 1e-9);
    }

    #[test]
    fn information_gain_is_never_negative(spec in arb_spec(), seed in any::<u64>()) {
        let ds = random_categorical(spec, seed);
        let parent = entropy(ds.records());
        for a in 0..ds.n_attributes() {
            let gain = information_gain(ds.records(), a, ds.attribute_name(a), &mut NullSink);
            prop_assert!(gain >= 0.0);
            prop_assert!(gain <= parent + 1e-9);
        }
    }

    #[test]
    fn single_outcome_dataset_is_one_leaf(
        rows in 1usize..30,
        attributes in 1usize..5,
        seed in any::<u64>(),
    ) {
        let ds = single_outcome(rows, attributes, 3, "Yes", seed);
        let resolution = ConflictResolution::default();
        let tree = build_tree(&ds, &TreeConfig::default(), &resolution, &mut NullSink);
        prop_assert_eq!(tree.root(), &DecisionNode::leaf("Yes"));
    }

    #[test]
    fn depth_never_exceeds_attribute_count(
        spec in arb_spec(),
        seed in any::<u64>(),
        policy in arb_policy(),
    ) {
        let (ds, tree) = train(spec, seed, policy);
        prop_assert!(depth_bound_holds(tree.root(), ds.n_attributes()));
        prop_assert!(no_attribute_repeats(tree.root(), &mut Vec::new()));
    }

    #[test]
    fn building_twice_is_deterministic(
        spec in arb_spec(),
        seed in any::<u64>(),
        policy in arb_policy(),
    ) {
        let (_, first) = train(spec, seed, policy);
        let (_, second) = train(spec, seed, policy);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn training_rows_never_predict_unknown(
        spec in arb_spec(),
        seed in any::<u64>(),
        policy in arb_policy(),
    ) {
        let (ds, tree) = train(spec, seed, policy);
        for record in ds.records() {
            prop_assert_ne!(tree.predict(record), Prediction::Unknown);
        }
    }
}
