//! Query strategies: which unlabeled examples to label next.

pub mod random;

pub use random::RandomStrategy;

use poolwise_core::errors::LearnerResult;
use poolwise_core::models::ExampleId;
use poolwise_core::traits::{IClassifier, IExampleStore};

use crate::engine::Learner;

/// What a query strategy did with a batch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Ids the learner should label. May be empty.
    Ids(Vec<ExampleId>),
    /// The strategy already labeled its picks through the learner.
    Handled,
}

impl Selection {
    pub fn ids(&self) -> &[ExampleId] {
        match self {
            Self::Ids(ids) => ids,
            Self::Handled => &[],
        }
    }
}

/// Pluggable selection policy.
///
/// A strategy receives the learner mutably so it can read partitions, score
/// candidates with the trained models and caches, or label examples itself.
pub trait IQueryStrategy<C: IClassifier, S: IExampleStore>: Send {
    /// Strategy name, for logging.
    fn name(&self) -> &'static str;

    /// Pick up to `k` examples to label next.
    fn select(&mut self, learner: &mut Learner<C, S>, k: usize) -> LearnerResult<Selection>;
}
