//! Learner: owns the per-feature-space state and every operation that mutates it.

use std::collections::HashSet;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use poolwise_core::config::{AggregationPolicy, LearnerConfig};
use poolwise_core::errors::{LearnerError, LearnerResult, StoreError};
use poolwise_core::models::{ExampleId, FeatureVector, Label};
use poolwise_core::traits::{IAggregator, IClassifier, IExampleStore};
use poolwise_dataset::Dataset;

use crate::aggregation::{aggregator_for, CautiousVote, MajorityVote};
use crate::cache::CacheStats;
use crate::feature_space::{FeatureSpace, TrainedModel};
use crate::strategies::{random, IQueryStrategy, RandomStrategy, Selection};

/// Pool-based active learner over one or more parallel feature spaces.
///
/// All partition mutations apply the same id set to every feature space in
/// the same call, so the labeled (and unlabeled) partitions of all spaces
/// always hold the same ids.
pub struct Learner<C: IClassifier, S: IExampleStore = Dataset> {
    name: String,
    classifier: C,
    pub(crate) spaces: Vec<FeatureSpace<C, S>>,
    query_strategy: Option<Box<dyn IQueryStrategy<C, S>>>,
    aggregator: Box<dyn IAggregator>,
    pub(crate) config: LearnerConfig,
    pub(crate) rng: StdRng,
}

impl<C: IClassifier, S: IExampleStore> Learner<C, S> {
    /// Create a learner with default config. Everything starts unlabeled.
    pub fn new(classifier: C, pools: Vec<S>) -> LearnerResult<Self> {
        Self::with_config(classifier, pools, LearnerConfig::default())
    }

    /// Create a learner with explicit config.
    ///
    /// `pools[i]` is feature space `i`; all pools must hold the same ids.
    /// Installs a `RandomStrategy` and the configured aggregation policy.
    /// Fails on an invalid config or on pools with duplicate ids.
    pub fn with_config(classifier: C, pools: Vec<S>, config: LearnerConfig) -> LearnerResult<Self> {
        config.validate()?;
        check_lockstep(&pools)?;

        let (rng, strategy) = match config.seed {
            Some(seed) => (
                StdRng::seed_from_u64(seed),
                RandomStrategy::with_seed(seed.wrapping_add(1)),
            ),
            None => (StdRng::from_entropy(), RandomStrategy::new()),
        };

        info!(
            spaces = pools.len(),
            pool_size = pools[0].len(),
            aggregation = ?config.aggregation,
            "learner created"
        );

        Ok(Self {
            name: "base".to_string(),
            classifier,
            spaces: pools.into_iter().map(FeatureSpace::new).collect(),
            query_strategy: Some(Box::new(strategy)),
            aggregator: aggregator_for(config.aggregation),
            config,
            rng,
        })
    }

    /// Create a learner around already trained models, one per pool.
    ///
    /// Each model gets fresh caches.
    pub fn with_models(
        classifier: C,
        pools: Vec<S>,
        models: Vec<C::Model>,
        config: LearnerConfig,
    ) -> LearnerResult<Self> {
        if models.len() != pools.len() {
            return Err(LearnerError::FeatureSpaceMismatch {
                expected: pools.len(),
                actual: models.len(),
            });
        }
        let mut learner = Self::with_config(classifier, pools, config)?;
        let capacity = learner.config.cache_capacity;
        for (space, model) in learner.spaces.iter_mut().zip(models) {
            space.trained = Some(TrainedModel::new(model, capacity));
        }
        Ok(learner)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    pub fn config(&self) -> &LearnerConfig {
        &self.config
    }

    pub fn feature_space_count(&self) -> usize {
        self.spaces.len()
    }

    pub fn feature_space(&self, index: usize) -> LearnerResult<&FeatureSpace<C, S>> {
        self.spaces
            .get(index)
            .ok_or(LearnerError::FeatureSpaceOutOfRange {
                index,
                count: self.spaces.len(),
            })
    }

    fn feature_space_mut(&mut self, index: usize) -> LearnerResult<&mut FeatureSpace<C, S>> {
        let count = self.spaces.len();
        self.spaces
            .get_mut(index)
            .ok_or(LearnerError::FeatureSpaceOutOfRange { index, count })
    }

    pub fn unlabeled(&self, space: usize) -> LearnerResult<&S> {
        Ok(&self.feature_space(space)?.unlabeled)
    }

    pub fn labeled(&self, space: usize) -> LearnerResult<&S> {
        Ok(&self.feature_space(space)?.labeled)
    }

    /// Labeled examples (same in every space).
    pub fn labeled_count(&self) -> usize {
        self.spaces[0].labeled.len()
    }

    /// Unlabeled examples (same in every space).
    pub fn unlabeled_count(&self) -> usize {
        self.spaces[0].unlabeled.len()
    }

    pub fn params(&self, space: usize) -> LearnerResult<&C::Params> {
        Ok(&self.feature_space(space)?.params)
    }

    /// Set the classifier params of one space. Takes effect on the next rebuild.
    pub fn set_params(&mut self, space: usize, params: C::Params) -> LearnerResult<()> {
        self.feature_space_mut(space)?.params = params;
        Ok(())
    }

    /// True once every feature space has a trained model.
    pub fn models_built(&self) -> bool {
        self.spaces.iter().all(|s| s.trained.is_some())
    }

    pub(crate) fn trained(&self, space: usize) -> LearnerResult<&TrainedModel<C::Model>> {
        self.feature_space(space)?
            .trained
            .as_ref()
            .ok_or(LearnerError::ModelsNotInitialized)
    }

    /// The current model of one space.
    pub fn model(&self, space: usize) -> LearnerResult<&C::Model> {
        Ok(&self.trained(space)?.model)
    }

    /// Distance and similarity cache stats for one space's current model.
    pub fn cache_stats(&self, space: usize) -> LearnerResult<(CacheStats, CacheStats)> {
        let trained = self.trained(space)?;
        Ok((trained.distances.stats(), trained.similarities.stats()))
    }

    // ── Strategy and aggregation wiring ──────────────────────────────────

    pub fn set_query_strategy(&mut self, strategy: Box<dyn IQueryStrategy<C, S>>) {
        self.query_strategy = Some(strategy);
    }

    /// Remove the query strategy. Selection fails until a new one is set.
    pub fn clear_query_strategy(&mut self) -> Option<Box<dyn IQueryStrategy<C, S>>> {
        self.query_strategy.take()
    }

    pub fn has_query_strategy(&self) -> bool {
        self.query_strategy.is_some()
    }

    pub fn query_strategy_name(&self) -> Option<&'static str> {
        self.query_strategy.as_ref().map(|s| s.name())
    }

    pub fn set_aggregator(&mut self, aggregator: Box<dyn IAggregator>) {
        self.aggregator = aggregator;
    }

    pub fn set_aggregation_policy(&mut self, policy: AggregationPolicy) {
        self.config.aggregation = policy;
        self.aggregator = aggregator_for(policy);
    }

    pub fn aggregator_name(&self) -> &'static str {
        self.aggregator.name()
    }

    /// Ask the query strategy for up to `k` examples.
    ///
    /// The strategy is detached while it runs so it can borrow the learner
    /// mutably. If it installs a replacement during the call, the replacement
    /// is kept.
    pub fn query(&mut self, k: usize) -> LearnerResult<Selection> {
        let mut strategy = self
            .query_strategy
            .take()
            .ok_or(LearnerError::NoQueryStrategy)?;
        debug!(strategy = strategy.name(), k, "querying strategy");
        let result = strategy.select(self, k);
        if self.query_strategy.is_none() {
            self.query_strategy = Some(strategy);
        }
        result
    }

    // ── Labeling ─────────────────────────────────────────────────────────

    /// Move `ids` from unlabeled to labeled in every feature space.
    ///
    /// Ids that are not unlabeled are skipped. Returns how many moved.
    pub fn label_instances_in_all_datasets(&mut self, ids: &[ExampleId]) -> usize {
        let mut moved = 0;
        for space in &mut self.spaces {
            let removed = space.unlabeled.remove(ids);
            moved = removed.len();
            space.labeled.insert(removed);
        }
        debug!(requested = ids.len(), moved, "labeled instances");
        moved
    }

    /// Label every unlabeled example.
    pub fn label_all_data(&mut self) -> usize {
        let ids = self.spaces[0].unlabeled.ids();
        self.label_instances_in_all_datasets(&ids)
    }

    /// Label `ids` with an imputed `label` instead of their ground truth.
    ///
    /// The moved examples are flagged synthetic; `unlabel_instances` reverts them.
    pub fn assume_labels(&mut self, ids: &[ExampleId], label: Label) -> usize {
        let mut moved = 0;
        for space in &mut self.spaces {
            let mut removed = space.unlabeled.remove(ids);
            for example in &mut removed {
                example.assume_label(label);
            }
            moved = removed.len();
            space.labeled.insert(removed);
        }
        debug!(moved, label = %label, "labeled instances with assumed label");
        moved
    }

    /// Move `ids` back to unlabeled in every space, restoring ground-truth
    /// labels and clearing the synthetic flag. Returns how many moved.
    pub fn unlabel_instances(&mut self, ids: &[ExampleId]) -> usize {
        let mut moved = 0;
        for space in &mut self.spaces {
            for &id in ids {
                if let Some(example) = space.labeled.get_mut(id) {
                    example.restore_true_label();
                }
            }
            let removed = space.labeled.remove(ids);
            moved = removed.len();
            space.unlabeled.insert(removed);
        }
        debug!(moved, "unlabeled instances");
        moved
    }

    /// Up to `k` distinct unlabeled ids, uniformly at random.
    pub fn get_random_unlabeled_ids(&mut self, k: usize) -> Vec<ExampleId> {
        let ids = self.spaces[0].unlabeled.ids();
        random::sample_ids(&ids, k, &mut self.rng)
    }

    // ── Models ───────────────────────────────────────────────────────────

    /// Retrain every model on its space's labeled partition.
    ///
    /// With `undersample_first`, trains on undersampled copies instead. Models
    /// are swapped in only after every space trained; on failure the previous
    /// models (and their caches) stay in place.
    pub fn rebuild_models(&mut self, undersample_first: bool) -> LearnerResult<()> {
        let undersampled = if undersample_first {
            info!("undersampling before building models");
            Some(self.undersample_labeled_datasets(None)?)
        } else {
            None
        };

        let models = {
            let sources: Vec<&S> = match &undersampled {
                Some(copies) => copies.iter().collect(),
                None => self.spaces.iter().map(|s| &s.labeled).collect(),
            };
            info!(instances = sources[0].len(), spaces = sources.len(), "training models");
            sources
                .iter()
                .zip(&self.spaces)
                .map(|(store, space)| {
                    let (samples, labels) = store.samples_and_labels();
                    self.classifier.train(&samples, &labels, &space.params)
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        let capacity = self.config.cache_capacity;
        for (space, model) in self.spaces.iter_mut().zip(models) {
            space.trained = Some(TrainedModel::new(model, capacity));
        }
        Ok(())
    }

    // ── Prediction ───────────────────────────────────────────────────────

    /// One prediction per feature space, in space order. `xs[i]` is the
    /// example's vector in space `i`.
    pub fn votes(&self, xs: &[FeatureVector]) -> LearnerResult<Vec<Label>> {
        if !self.models_built() {
            return Err(LearnerError::ModelsNotInitialized);
        }
        if xs.len() != self.spaces.len() {
            return Err(LearnerError::FeatureSpaceMismatch {
                expected: self.spaces.len(),
                actual: xs.len(),
            });
        }
        self.spaces
            .iter()
            .zip(xs)
            .map(|(space, x)| {
                let trained = space
                    .trained
                    .as_ref()
                    .ok_or(LearnerError::ModelsNotInitialized)?;
                Ok(self.classifier.predict(&trained.model, x))
            })
            .collect()
    }

    /// Predict with the installed aggregation policy.
    pub fn predict(&self, xs: &[FeatureVector]) -> LearnerResult<Label> {
        self.aggregate_with(self.aggregator.as_ref(), xs)
    }

    /// Predict by majority vote regardless of the installed policy.
    pub fn majority_predict(&self, xs: &[FeatureVector]) -> LearnerResult<Label> {
        self.aggregate_with(&MajorityVote, xs)
    }

    /// Predict positive if any space predicts positive, regardless of the installed policy.
    pub fn cautious_predict(&self, xs: &[FeatureVector]) -> LearnerResult<Label> {
        self.aggregate_with(&CautiousVote, xs)
    }

    fn aggregate_with(&self, aggregator: &dyn IAggregator, xs: &[FeatureVector]) -> LearnerResult<Label> {
        let votes = self.votes(xs)?;
        aggregator
            .aggregate(&votes)
            .ok_or(LearnerError::ModelsNotInitialized)
    }

    // ── Output ───────────────────────────────────────────────────────────

    /// The labeled partition of one space in the store's point format.
    pub fn labeled_points(&self, space: usize) -> LearnerResult<String> {
        Ok(self.labeled(space)?.serialize())
    }

    /// Write the labeled partition of one space to `path`.
    pub fn write_out_labeled_data(&self, path: &Path, space: usize) -> LearnerResult<()> {
        let text = self.labeled_points(space)?;
        std::fs::write(path, text).map_err(|e| StoreError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        info!(path = %path.display(), space, examples = self.labeled_count(), "wrote labeled data");
        Ok(())
    }
}

impl<C: IClassifier> Learner<C, Dataset> {
    /// Create a learner from point files, one per feature space.
    pub fn from_point_files<P: AsRef<Path>>(
        classifier: C,
        paths: &[P],
        config: LearnerConfig,
    ) -> LearnerResult<Self> {
        let pools = paths
            .iter()
            .map(|p| Dataset::load(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::with_config(classifier, pools, config)
    }
}

/// Every pool must hold unique ids, and the same ids as pool 0.
fn check_lockstep<S: IExampleStore>(pools: &[S]) -> LearnerResult<()> {
    let first = pools.first().ok_or(LearnerError::NoFeatureSpaces)?;
    let reference = unique_ids(first)?;
    for (space, pool) in pools.iter().enumerate().skip(1) {
        let ids = unique_ids(pool)?;
        if ids != reference {
            let missing = reference.difference(&ids).count();
            let extra = ids.difference(&reference).count();
            return Err(LearnerError::PoolMismatch {
                space,
                details: format!("{missing} ids missing, {extra} unexpected ids"),
            });
        }
    }
    Ok(())
}

fn unique_ids<S: IExampleStore>(pool: &S) -> LearnerResult<HashSet<ExampleId>> {
    let mut ids = HashSet::with_capacity(pool.len());
    for id in pool.ids() {
        if !ids.insert(id) {
            return Err(StoreError::DuplicateId { id: id.0 }.into());
        }
    }
    Ok(ids)
}
