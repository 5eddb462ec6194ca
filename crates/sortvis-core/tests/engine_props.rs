//! Property tests for the step-sequence engine.
//!
//! Every canonical algorithm, over every distribution, must end sorted,
//! conserve the value multiset in each step, and count comparisons only on
//! steps that highlight one.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sortvis_core::{
    AlgorithmId, Canonical, Distribution, ElementState, Step, generate, generate_with, run,
};

fn algorithm() -> impl Strategy<Value = AlgorithmId> {
    prop::sample::select(Canonical::ALL.map(Canonical::algorithm).to_vec())
}

fn distribution() -> impl Strategy<Value = Distribution> {
    prop::sample::select(Distribution::ALL.to_vec())
}

fn sorted_values(step: &Step) -> Vec<u32> {
    let mut v = step.values();
    v.sort_unstable();
    v
}

fn check_run(id: AlgorithmId, distribution: Distribution, size: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let initial = generate_with(size, distribution, &mut rng);
    let expected: Vec<u32> = (1..=size as u32).collect();

    let mut prev = 0u64;
    let mut last = None;
    for step in run(id, &initial) {
        assert_eq!(sorted_values(&step), expected, "{id} lost or duplicated a value");
        let delta = step.comparisons() - prev;
        assert!(delta <= 1, "{id} counted {delta} comparisons in one step");
        if delta == 1 {
            assert!(
                step.elements().iter().any(|e| e.state == ElementState::Comparing),
                "{id} counted a comparison without highlighting it"
            );
        }
        prev = step.comparisons();
        last = Some(step);
    }

    let last = last.expect("a run always yields a final step");
    assert_eq!(last.values(), expected, "{id} on {distribution} ended unsorted");
    assert!(last.is_all_sorted());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_run_sorts_and_conserves(
        id in algorithm(),
        dist in distribution(),
        size in 10usize..=64,
        seed in any::<u64>(),
    ) {
        check_run(id, dist, size, seed);
    }

    #[test]
    fn generated_sequences_are_permutations(
        dist in distribution(),
        size in 0usize..=200,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let initial = generate_with(size, dist, &mut rng);
        prop_assert_eq!(initial.len(), size);
        prop_assert!(initial.iter().all(|e| e.state == ElementState::Default));
        let mut values: Vec<u32> = initial.iter().map(|e| e.value).collect();
        values.sort_unstable();
        prop_assert_eq!(values, (1..=size as u32).collect::<Vec<_>>());
    }

    #[test]
    fn aliases_match_their_implementation(
        dist in distribution(),
        size in 10usize..=32,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let initial = generate_with(size, dist, &mut rng);
        for id in AlgorithmId::ALL.into_iter().filter(|id| id.is_alias()) {
            let alias: Vec<Step> = run(id, &initial).collect();
            let canonical: Vec<Step> = run(id.canonical().algorithm(), &initial).collect();
            prop_assert_eq!(alias, canonical, "{}", id);
        }
    }
}

#[test]
fn largest_size_sorts_for_every_algorithm() {
    for canonical in Canonical::ALL {
        check_run(canonical.algorithm(), Distribution::Random, 200, 0x5eed);
        check_run(canonical.algorithm(), Distribution::DescendingHalves, 200, 0);
    }
}

#[test]
fn ascending_input_stays_put_through_bubble() {
    let initial = generate(20, Distribution::Ascending);
    for step in run(AlgorithmId::Bubble, &initial) {
        assert_eq!(step.values(), (1..=20).collect::<Vec<_>>());
    }
}

#[test]
fn insertion_on_sorted_input_is_linear() {
    let initial = generate(50, Distribution::Ascending);
    let last = run(AlgorithmId::Insertion, &initial).last().unwrap();
    assert_eq!(last.comparisons(), 49);
}

#[test]
fn merge_beats_bubble_on_random_input() {
    let mut rng = StdRng::seed_from_u64(7);
    let initial = generate_with(100, Distribution::Random, &mut rng);
    let bubble = run(AlgorithmId::Bubble, &initial).last().unwrap().comparisons();
    let merge = run(AlgorithmId::Merge, &initial).last().unwrap().comparisons();
    assert_eq!(bubble, 100 * 99 / 2);
    assert!(merge < bubble);
}

#[test]
fn halves_layouts() {
    let values = |d| generate(6, d).iter().map(|e| e.value).collect::<Vec<_>>();
    assert_eq!(values(Distribution::AscendingHalves), vec![4, 5, 6, 1, 2, 3]);
    assert_eq!(values(Distribution::DescendingHalves), vec![3, 2, 1, 6, 5, 4]);
    let odd = |d| generate(7, d).iter().map(|e| e.value).collect::<Vec<_>>();
    assert_eq!(odd(Distribution::AscendingHalves), vec![5, 6, 7, 1, 2, 3, 4]);
    assert_eq!(odd(Distribution::DescendingHalves), vec![3, 2, 1, 7, 6, 5, 4]);
    assert_eq!(values(Distribution::Descending), vec![6, 5, 4, 3, 2, 1]);
}
