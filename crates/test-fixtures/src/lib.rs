//! Deterministic classifiers and pool builders shared by the integration tests.

pub mod classifiers;
pub mod pools;

pub use classifiers::{
    CallCounts, CentroidClassifier, CentroidModel, ConstantClassifier, ConstantParams,
    CountingClassifier, FlakyClassifier,
};
pub use pools::{balanced_pool, multi_space_pools};
