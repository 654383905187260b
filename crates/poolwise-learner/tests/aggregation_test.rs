use poolwise_core::config::{AggregationPolicy, LearnerConfig};
use poolwise_core::models::{FeatureVector, Label};
use poolwise_dataset::Dataset;
use poolwise_learner::{CautiousVote, Learner};
use test_fixtures::{multi_space_pools, ConstantClassifier, ConstantParams};

/// A learner whose spaces vote exactly `votes`, in order.
fn scripted(votes: &[Label], aggregation: AggregationPolicy) -> Learner<ConstantClassifier, Dataset> {
    let config = LearnerConfig {
        aggregation,
        seed: Some(1),
        ..LearnerConfig::default()
    };
    let mut learner =
        Learner::with_config(ConstantClassifier, multi_space_pools(1, 1, votes.len()), config).unwrap();
    for (space, &label) in votes.iter().enumerate() {
        learner.set_params(space, ConstantParams { label }).unwrap();
    }
    learner.label_all_data();
    learner.rebuild_models(false).unwrap();
    learner
}

fn inputs(n: usize) -> Vec<FeatureVector> {
    vec![FeatureVector::from_dense(&[0.0]); n]
}

const P: Label = Label::POSITIVE;
const N: Label = Label::NEGATIVE;

#[test]
fn votes_come_back_in_space_order() {
    let learner = scripted(&[P, P, N], AggregationPolicy::Majority);
    assert_eq!(learner.votes(&inputs(3)).unwrap(), vec![P, P, N]);
}

#[test]
fn two_of_three_positive() {
    let learner = scripted(&[P, P, N], AggregationPolicy::Majority);
    assert_eq!(learner.predict(&inputs(3)).unwrap(), P);
    assert_eq!(learner.majority_predict(&inputs(3)).unwrap(), P);
    assert_eq!(learner.cautious_predict(&inputs(3)).unwrap(), P);
}

#[test]
fn one_positive_splits_the_policies() {
    let learner = scripted(&[N, P, N], AggregationPolicy::Majority);
    assert_eq!(learner.predict(&inputs(3)).unwrap(), N);
    assert_eq!(learner.cautious_predict(&inputs(3)).unwrap(), P);
}

#[test]
fn unanimous_negative_is_negative_under_both() {
    let learner = scripted(&[N, N, N], AggregationPolicy::Cautious);
    assert_eq!(learner.predict(&inputs(3)).unwrap(), N);
    assert_eq!(learner.majority_predict(&inputs(3)).unwrap(), N);
}

#[test]
fn ties_go_to_the_first_space() {
    let learner = scripted(&[N, P], AggregationPolicy::Majority);
    assert_eq!(learner.predict(&inputs(2)).unwrap(), N);

    let learner = scripted(&[P, N], AggregationPolicy::Majority);
    assert_eq!(learner.predict(&inputs(2)).unwrap(), P);
}

#[test]
fn single_space_returns_its_prediction() {
    for label in [P, N] {
        let learner = scripted(&[label], AggregationPolicy::Majority);
        assert_eq!(learner.predict(&inputs(1)).unwrap(), label);
        assert_eq!(learner.cautious_predict(&inputs(1)).unwrap(), label);
    }
}

#[test]
fn policy_can_be_swapped_at_runtime() {
    let mut learner = scripted(&[N, P, N], AggregationPolicy::Majority);
    assert_eq!(learner.aggregator_name(), "majority");
    assert_eq!(learner.predict(&inputs(3)).unwrap(), N);

    learner.set_aggregation_policy(AggregationPolicy::Cautious);
    assert_eq!(learner.aggregator_name(), "cautious");
    assert_eq!(learner.config().aggregation, AggregationPolicy::Cautious);
    assert_eq!(learner.predict(&inputs(3)).unwrap(), P);

    learner.set_aggregation_policy(AggregationPolicy::Majority);
    learner.set_aggregator(Box::new(CautiousVote));
    assert_eq!(learner.predict(&inputs(3)).unwrap(), P);
}
