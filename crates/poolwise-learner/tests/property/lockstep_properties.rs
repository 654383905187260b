//! Property tests for poolwise-learner: partition lockstep and conservation.

use std::collections::{BTreeMap, HashSet};

use proptest::prelude::*;

use poolwise_core::config::LearnerConfig;
use poolwise_core::models::{ExampleId, Label};
use poolwise_core::traits::IExampleStore;
use poolwise_dataset::Dataset;
use poolwise_learner::Learner;
use test_fixtures::{multi_space_pools, CentroidClassifier};

const MINORITY: usize = 4;
const MAJORITY: usize = 8;
const POOL: u64 = (MINORITY + MAJORITY) as u64;

#[derive(Debug, Clone)]
enum Op {
    Label(Vec<u64>),
    Unlabel(Vec<u64>),
    Assume(Vec<u64>, bool),
    Random(usize),
    Bootstrap(usize),
}

fn ids_strategy() -> impl Strategy<Value = Vec<u64>> {
    // Includes ids outside the pool, which must be ignored.
    prop::collection::vec(0..POOL + 3, 0..6)
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        ids_strategy().prop_map(Op::Label),
        ids_strategy().prop_map(Op::Unlabel),
        (ids_strategy(), any::<bool>()).prop_map(|(ids, positive)| Op::Assume(ids, positive)),
        (0..5usize).prop_map(Op::Random),
        (0..3usize).prop_map(Op::Bootstrap),
    ]
}

fn apply(learner: &mut Learner<CentroidClassifier>, op: &Op) {
    let to_ids = |raw: &[u64]| raw.iter().copied().map(ExampleId).collect::<Vec<_>>();
    match op {
        Op::Label(raw) => {
            learner.label_instances_in_all_datasets(&to_ids(raw));
        }
        Op::Unlabel(raw) => {
            learner.unlabel_instances(&to_ids(raw));
        }
        Op::Assume(raw, positive) => {
            let label = if *positive { Label::POSITIVE } else { Label::NEGATIVE };
            learner.assume_labels(&to_ids(raw), label);
        }
        Op::Random(k) => {
            let ids = learner.get_random_unlabeled_ids(*k);
            learner.label_instances_in_all_datasets(&ids);
        }
        Op::Bootstrap(k) => {
            let _ = learner.pick_balanced_initial_training_set(*k);
        }
    }
}

fn id_set(store: &Dataset) -> HashSet<ExampleId> {
    store.ids().into_iter().collect()
}

fn labels_by_id(store: &Dataset) -> BTreeMap<ExampleId, (Label, bool)> {
    store
        .examples()
        .iter()
        .map(|e| (e.id, (e.label, e.synthetic_label)))
        .collect()
}

// =============================================================================
// Every space holds the same labeled ids, and nothing is lost or duplicated
// =============================================================================
proptest! {
    #[test]
    fn partitions_stay_in_lockstep(
        ops in prop::collection::vec(op_strategy(), 0..25),
        seed in any::<u64>(),
    ) {
        let config = LearnerConfig { seed: Some(seed), ..LearnerConfig::default() };
        let mut learner =
            Learner::with_config(CentroidClassifier, multi_space_pools(MINORITY, MAJORITY, 3), config).unwrap();

        for op in &ops {
            apply(&mut learner, op);

            let labeled = id_set(learner.labeled(0).unwrap());
            let unlabeled = id_set(learner.unlabeled(0).unwrap());
            prop_assert!(labeled.is_disjoint(&unlabeled));
            prop_assert_eq!(labeled.len() + unlabeled.len(), POOL as usize);
            prop_assert_eq!(learner.labeled(0).unwrap().len(), labeled.len());

            for space in 1..3 {
                prop_assert_eq!(&id_set(learner.labeled(space).unwrap()), &labeled);
                prop_assert_eq!(&id_set(learner.unlabeled(space).unwrap()), &unlabeled);
                prop_assert_eq!(
                    labels_by_id(learner.labeled(space).unwrap()),
                    labels_by_id(learner.labeled(0).unwrap())
                );
            }
        }
    }
}

// =============================================================================
// Unlabeled examples always carry their ground-truth label
// =============================================================================
proptest! {
    #[test]
    fn unlabeled_examples_carry_true_labels(
        ops in prop::collection::vec(op_strategy(), 0..25),
    ) {
        let config = LearnerConfig { seed: Some(17), ..LearnerConfig::default() };
        let mut learner =
            Learner::with_config(CentroidClassifier, multi_space_pools(MINORITY, MAJORITY, 2), config).unwrap();

        for op in &ops {
            apply(&mut learner, op);
        }

        for space in 0..2 {
            for e in learner.unlabeled(space).unwrap().examples() {
                prop_assert_eq!(e.label, e.true_label);
                prop_assert!(!e.synthetic_label);
            }
        }
    }
}

// =============================================================================
// Undersampling never touches the live partitions
// =============================================================================
proptest! {
    #[test]
    fn undersampling_is_side_effect_free(
        labeled in prop::collection::vec(0..POOL, 1..12),
        k in prop::option::of(0..12usize),
    ) {
        let config = LearnerConfig { seed: Some(3), ..LearnerConfig::default() };
        let mut learner =
            Learner::with_config(CentroidClassifier, multi_space_pools(MINORITY, MAJORITY, 2), config).unwrap();
        let ids: Vec<ExampleId> = labeled.into_iter().map(ExampleId).collect();
        learner.label_instances_in_all_datasets(&ids);
        let before = id_set(learner.labeled(0).unwrap());

        let copies = learner.undersample_labeled_datasets(k).unwrap();

        prop_assert_eq!(&id_set(learner.labeled(0).unwrap()), &before);
        prop_assert_eq!(id_set(&copies[0]), id_set(&copies[1]));
        prop_assert!(id_set(&copies[0]).is_subset(&before));
        prop_assert!(copies[0].len() <= before.len());
    }
}
