//! Configuration system for poolwise.
//! TOML-based, layered resolution: env > project file > defaults.

pub mod defaults;
pub mod learner_config;
pub mod observability_config;
pub mod poolwise_config;

pub use learner_config::{AggregationPolicy, LearnerConfig};
pub use observability_config::ObservabilityConfig;
pub use poolwise_config::PoolwiseConfig;
