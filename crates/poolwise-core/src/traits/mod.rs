//! Collaborator traits. The learner is written against these, never against
//! a concrete classifier or store.

pub mod aggregator;
pub mod classifier;
pub mod example_store;

pub use aggregator::IAggregator;
pub use classifier::IClassifier;
pub use example_store::IExampleStore;
