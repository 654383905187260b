//! Random strategy - baseline uniform selection.
//!
//! Uniform sampling without replacement over the unlabeled ids of feature
//! space 0.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};

use poolwise_core::errors::LearnerResult;
use poolwise_core::models::ExampleId;
use poolwise_core::traits::{IClassifier, IExampleStore};

use super::{IQueryStrategy, Selection};
use crate::engine::Learner;

/// Picks unlabeled examples uniformly at random.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic selection for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: IClassifier, S: IExampleStore> IQueryStrategy<C, S> for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select(&mut self, learner: &mut Learner<C, S>, k: usize) -> LearnerResult<Selection> {
        let ids = learner.unlabeled(0)?.ids();
        Ok(Selection::Ids(sample_ids(&ids, k, &mut self.rng)))
    }
}

/// Up to `k` distinct ids drawn uniformly from `ids`.
pub fn sample_ids(ids: &[ExampleId], k: usize, rng: &mut dyn RngCore) -> Vec<ExampleId> {
    ids.choose_multiple(rng, k).copied().collect()
}
