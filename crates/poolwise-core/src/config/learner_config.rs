use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// How per-feature-space predictions are folded into one decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationPolicy {
    /// Most common label wins; ties go to the first maximal label in space order.
    #[default]
    Majority,
    /// Highest label wins: any space voting positive makes the decision positive.
    Cautious,
}

impl AggregationPolicy {
    /// Parse a policy name as written in config files and env vars.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "majority" => Some(Self::Majority),
            "cautious" => Some(Self::Cautious),
            _ => None,
        }
    }
}

/// Active learning loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnerConfig {
    /// Examples requested from the query strategy per iteration.
    pub batch_size: usize,
    /// Retrain every model after each iteration (a final rebuild always happens).
    pub rebuild_each_iteration: bool,
    /// Train on undersampled copies of the labeled partitions.
    pub undersample_before_rebuild: bool,
    /// RNG seed for sampling. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Max cached pairs per model, for each of the distance and similarity caches.
    ///
    /// Pairs are memoized only while a model's working set fits. Past this
    /// bound the cache evicts entries and evicted pairs are recomputed.
    pub cache_capacity: u64,
    /// Prediction aggregation across feature spaces.
    pub aggregation: AggregationPolicy,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            batch_size: defaults::DEFAULT_BATCH_SIZE,
            rebuild_each_iteration: defaults::DEFAULT_REBUILD_EACH_ITERATION,
            undersample_before_rebuild: defaults::DEFAULT_UNDERSAMPLE_BEFORE_REBUILD,
            seed: None,
            cache_capacity: defaults::DEFAULT_CACHE_CAPACITY,
            aggregation: AggregationPolicy::default(),
        }
    }
}

impl LearnerConfig {
    /// Reject values the learner cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "learner.batch_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.cache_capacity == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "learner.cache_capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
