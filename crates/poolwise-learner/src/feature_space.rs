//! Per-feature-space state.

use poolwise_core::traits::{IClassifier, IExampleStore};

use crate::cache::PairCache;

/// A trained model together with the caches computed in its space.
///
/// Built whole and replaced whole: a rebuild produces a new `TrainedModel`
/// with empty caches.
#[derive(Debug)]
pub struct TrainedModel<M> {
    pub(crate) model: M,
    pub(crate) distances: PairCache,
    pub(crate) similarities: PairCache,
}

impl<M> TrainedModel<M> {
    pub fn new(model: M, cache_capacity: u64) -> Self {
        Self {
            model,
            distances: PairCache::new(cache_capacity),
            similarities: PairCache::new(cache_capacity),
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn distances(&self) -> &PairCache {
        &self.distances
    }

    pub fn similarities(&self) -> &PairCache {
        &self.similarities
    }
}

/// One representation of the pool: its two partitions, classifier params,
/// and the current model, if any.
pub struct FeatureSpace<C: IClassifier, S: IExampleStore> {
    pub(crate) unlabeled: S,
    pub(crate) labeled: S,
    pub(crate) params: C::Params,
    pub(crate) trained: Option<TrainedModel<C::Model>>,
}

impl<C: IClassifier, S: IExampleStore> FeatureSpace<C, S> {
    /// A space with everything unlabeled and default params.
    pub fn new(pool: S) -> Self {
        Self {
            labeled: pool.empty_like(),
            unlabeled: pool,
            params: C::Params::default(),
            trained: None,
        }
    }

    pub fn unlabeled(&self) -> &S {
        &self.unlabeled
    }

    pub fn labeled(&self) -> &S {
        &self.labeled
    }

    pub fn params(&self) -> &C::Params {
        &self.params
    }

    pub fn trained(&self) -> Option<&TrainedModel<C::Model>> {
        self.trained.as_ref()
    }

    /// Total examples across both partitions.
    pub fn size(&self) -> usize {
        self.unlabeled.len() + self.labeled.len()
    }
}
