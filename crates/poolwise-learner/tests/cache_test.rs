use poolwise_core::config::LearnerConfig;
use poolwise_core::errors::LearnerError;
use poolwise_core::models::Example;
use poolwise_core::traits::IExampleStore;
use poolwise_learner::Learner;
use test_fixtures::{balanced_pool, CentroidClassifier, CountingClassifier};

fn trained_learner() -> (
    Learner<CountingClassifier<CentroidClassifier>>,
    std::sync::Arc<test_fixtures::CallCounts>,
) {
    let classifier = CountingClassifier::new(CentroidClassifier);
    let counts = classifier.counts();
    let config = LearnerConfig {
        seed: Some(5),
        ..LearnerConfig::default()
    };
    let mut learner = Learner::with_config(classifier, vec![balanced_pool(4, 4)], config).unwrap();
    learner.pick_balanced_initial_training_set(2).unwrap();
    learner.rebuild_models(false).unwrap();
    (learner, counts)
}

fn split(learner: &Learner<CountingClassifier<CentroidClassifier>>) -> (Vec<Example>, Vec<Example>) {
    (
        learner.unlabeled(0).unwrap().examples().to_vec(),
        learner.labeled(0).unwrap().examples().to_vec(),
    )
}

// ── Memoization ───────────────────────────────────────────────────────────

#[test]
fn diversity_computes_each_pair_once_per_model() {
    let (learner, counts) = trained_learner();
    let (unlabeled, labeled) = split(&learner);

    for x in &unlabeled {
        learner.diversity(0, x, &labeled).unwrap();
    }
    let first_pass = counts.similarity();
    assert_eq!(first_pass, unlabeled.len() * labeled.len());

    for x in &unlabeled {
        learner.diversity(0, x, &labeled).unwrap();
    }
    assert_eq!(counts.similarity(), first_pass);

    let (_, sims) = learner.cache_stats(0).unwrap();
    assert_eq!(sims.misses, first_pass as u64);
    assert_eq!(sims.hits, first_pass as u64);
}

#[test]
fn cached_values_match_direct_computation() {
    let (learner, _) = trained_learner();
    let (unlabeled, labeled) = split(&learner);
    let x = &unlabeled[0];

    let expected: f64 = labeled.iter().map(|y| x.features.cosine(&y.features)).sum();
    let got = learner.diversity(0, x, &labeled).unwrap();
    assert!((got - expected).abs() < 1e-12);

    let d = learner.distance(0, x, &labeled[0]).unwrap();
    assert!((d - x.features.distance(&labeled[0].features)).abs() < 1e-12);
}

#[test]
fn pair_order_matters() {
    let (learner, counts) = trained_learner();
    let (unlabeled, labeled) = split(&learner);

    learner.distance(0, &unlabeled[0], &labeled[0]).unwrap();
    learner.distance(0, &labeled[0], &unlabeled[0]).unwrap();
    assert_eq!(counts.distance(), 2);

    learner.distance(0, &unlabeled[0], &labeled[0]).unwrap();
    assert_eq!(counts.distance(), 2);
}

#[test]
fn rebuild_discards_cached_values() {
    let (mut learner, counts) = trained_learner();
    let (unlabeled, labeled) = split(&learner);

    learner.diversity(0, &unlabeled[0], &labeled).unwrap();
    let before = counts.similarity();

    learner.rebuild_models(false).unwrap();
    assert_eq!(learner.cache_stats(0).unwrap().1.misses, 0);

    learner.diversity(0, &unlabeled[0], &labeled).unwrap();
    assert_eq!(counts.similarity(), before * 2);
}

#[test]
fn failed_rebuild_keeps_the_cache() {
    let (mut learner, counts) = trained_learner();
    let (unlabeled, labeled) = split(&learner);
    learner.diversity(0, &unlabeled[0], &labeled).unwrap();
    let before = counts.similarity();

    // Nothing labeled: training fails and the old model stays.
    let all = learner.labeled(0).unwrap().ids();
    learner.unlabel_instances(&all);
    assert!(learner.rebuild_models(false).is_err());

    learner.diversity(0, &unlabeled[0], &labeled).unwrap();
    assert_eq!(counts.similarity(), before);
}

// ── Distance helpers ──────────────────────────────────────────────────────

#[test]
fn min_distance_picks_the_nearest_reference() {
    let (learner, _) = trained_learner();
    let (unlabeled, labeled) = split(&learner);
    let x = &unlabeled[0];

    let expected = labeled
        .iter()
        .map(|y| x.features.distance(&y.features))
        .fold(f64::INFINITY, f64::min);
    let got = learner.min_distance_to(0, x, &labeled).unwrap().unwrap();
    assert!((got - expected).abs() < 1e-12);

    assert_eq!(learner.min_distance_to(0, x, &[]).unwrap(), None);
    assert_eq!(learner.diversity(0, x, &[]).unwrap(), 0.0);
}

#[test]
fn helpers_need_a_model() {
    let learner = Learner::new(CentroidClassifier, vec![balanced_pool(2, 2)]).unwrap();
    let examples = learner.unlabeled(0).unwrap().examples().to_vec();

    assert!(matches!(
        learner.distance(0, &examples[0], &examples[1]),
        Err(LearnerError::ModelsNotInitialized)
    ));
    assert!(matches!(
        learner.diversity(0, &examples[0], &examples[1..]),
        Err(LearnerError::ModelsNotInitialized)
    ));
    assert!(matches!(learner.cache_stats(0), Err(LearnerError::ModelsNotInitialized)));
}
