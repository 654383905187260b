//! # poolwise-learner
//!
//! Pool-based active learning: a query strategy picks unlabeled examples, the
//! learner moves them to the labeled partition of every feature space in
//! lockstep, retrains one model per space, and repeats until the labeling
//! budget is spent.
//!
//! ## Feature spaces
//!
//! A learner can hold several parallel representations of the same pool.
//! Index `i` addresses the same space everywhere: unlabeled and labeled
//! partitions, classifier params, and the trained model. Every mutation applies
//! the same id set to every space.
//!
//! ## Prediction
//!
//! | Policy | Decision |
//! |--------|----------|
//! | Majority | most common label, first maximal in space order on ties |
//! | Cautious | highest label, so any positive vote wins |
//!
//! ## Caches
//!
//! Pairwise distances and similarities are memoized per trained model and
//! dropped with it on every rebuild.

pub mod active_loop;
pub mod aggregation;
pub mod cache;
pub mod diversity;
pub mod engine;
pub mod feature_space;
pub mod resampling;
pub mod strategies;

pub use aggregation::{aggregator_for, CautiousVote, MajorityVote};
pub use cache::{CacheStats, PairCache};
pub use engine::Learner;
pub use feature_space::{FeatureSpace, TrainedModel};
pub use strategies::{IQueryStrategy, RandomStrategy, Selection};
