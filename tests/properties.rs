//! Randomized checks of the invariants of the tree algorithms.
use ginitree::prelude::*;
use ginitree::{best_split, build_tree, class_counts, gini, partition};

use rand::prelude::*;
use rand::rngs::StdRng;

use std::collections::HashMap;

const N_TRIALS: usize = 200;
const COLORS: [&str; 3] = ["Green", "Red", "Yellow"];
const LABELS: [&str; 3] = ["Apple", "Grape", "Lemon"];


fn random_rows(rng: &mut StdRng) -> Vec<Row> {
    let n_rows = rng.gen_range(1..=30);
    (0..n_rows).map(|_| {
            let color = COLORS[rng.gen_range(0..COLORS.len())];
            let diameter = rng.gen_range(0..6) as f64;
            let label = LABELS[rng.gen_range(0..LABELS.len())];
            row![color, diameter, label]
        })
        .collect()
}


#[test]
fn partition_is_complete_and_disjoint() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..N_TRIALS {
        let rows = random_rows(&mut rng);
        let refs = rows.iter().collect::<Vec<_>>();
        let question = if rng.gen_bool(0.5) {
            Question::new(0, COLORS[rng.gen_range(0..COLORS.len())])
        } else {
            Question::new(1, rng.gen_range(0..6) as f64)
        };

        let (matched, unmatched) = partition(&refs, &question).unwrap();
        assert_eq!(matched.len() + unmatched.len(), rows.len());
        assert!(matched.iter().all(|r| question.matches(r).unwrap()));
        assert!(unmatched.iter().all(|r| !question.matches(r).unwrap()));
    }
}


#[test]
fn gini_is_bounded() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..N_TRIALS {
        let rows = random_rows(&mut rng);
        let refs = rows.iter().collect::<Vec<_>>();

        let k = class_counts(&refs).unwrap().len() as f64;
        let g = gini(&refs).unwrap();
        assert!(g >= 0f64, "gini = {g}");
        assert!(g <= 1f64 - 1f64 / k + 1e-12, "gini = {g}, k = {k}");
        assert_eq!(g == 0f64, k == 1f64, "gini = {g}, k = {k}");
    }
}


#[test]
fn best_gain_is_non_negative() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..N_TRIALS {
        let rows = random_rows(&mut rng);
        let refs = rows.iter().collect::<Vec<_>>();

        for tie_break in [TieBreak::Last, TieBreak::First] {
            let split = best_split(&refs, tie_break).unwrap();
            assert!(split.gain >= 0f64);
            assert_eq!(split.gain > 0f64, split.question.is_some());
            if rows.len() == 1 {
                assert!(split.question.is_none());
            }
        }
    }
}


#[test]
fn leaves_reproduce_the_training_rows() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..N_TRIALS {
        let rows = random_rows(&mut rng);
        let refs = rows.iter().collect::<Vec<_>>();
        let root = build_tree(&refs, TieBreak::Last).unwrap();

        // Route every training row and rebuild each leaf's histogram.
        let mut routed: HashMap<*const ClassCounts, ClassCounts> = HashMap::new();
        for row in &rows {
            let leaf = root.classify(row).unwrap();
            assert!(leaf.total() >= 1);
            assert!(leaf.contains(row.label().unwrap()));

            routed.entry(leaf as *const ClassCounts)
                .or_default()
                .increment(row.label().unwrap());
        }

        let leaves = root.leaves();
        let total = leaves.iter().map(|c| c.total()).sum::<usize>();
        assert_eq!(total, rows.len());
        for leaf in leaves {
            let rebuilt = routed.get(&(leaf as *const ClassCounts)).unwrap();
            assert_eq!(rebuilt, leaf);
        }
    }
}


#[test]
fn single_label_never_splits() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..N_TRIALS {
        let rows = random_rows(&mut rng)
            .into_iter()
            .map(|row| {
                let mut values = row.features().to_vec();
                values.push(Value::from("Apple"));
                Row::new(values)
            })
            .collect::<Vec<_>>();
        let refs = rows.iter().collect::<Vec<_>>();
        let root = build_tree(&refs, TieBreak::Last).unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.leaves()[0].total(), rows.len());
    }
}
