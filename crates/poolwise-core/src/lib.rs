//! # poolwise-core
//!
//! Foundation crate for the poolwise active learner.
//! Defines the example model, the collaborator traits (classifier, example store,
//! prediction aggregation), errors, config, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::{AggregationPolicy, LearnerConfig, PoolwiseConfig};
pub use errors::{LearnerError, LearnerResult};
pub use models::{ClassRole, Example, ExampleId, FeatureVector, Label, LearningReport};
