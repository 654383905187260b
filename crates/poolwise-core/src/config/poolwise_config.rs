//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AggregationPolicy, LearnerConfig, ObservabilityConfig};
use crate::constants::CONFIG_FILENAME;
use crate::errors::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`POOLWISE_*`)
/// 2. Project config (`poolwise.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PoolwiseConfig {
    pub learner: LearnerConfig,
    pub observability: ObservabilityConfig,
}

impl PoolwiseConfig {
    /// Load configuration for a project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILENAME);
        let mut config = if path.exists() {
            debug!(path = %path.display(), "loading config file");
            Self::from_file(&path)?
        } else {
            debug!(root = %root.display(), "no config file, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit TOML file, without env overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.learner.validate()?;
        if !LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("must be one of {}", LOG_LEVELS.join(", ")),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `POOLWISE_BATCH_SIZE`, `POOLWISE_SEED`, etc. Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("POOLWISE_BATCH_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                self.learner.batch_size = v;
            }
        }
        if let Ok(val) = std::env::var("POOLWISE_REBUILD_EACH_ITERATION") {
            if let Ok(v) = val.parse::<bool>() {
                self.learner.rebuild_each_iteration = v;
            }
        }
        if let Ok(val) = std::env::var("POOLWISE_UNDERSAMPLE_BEFORE_REBUILD") {
            if let Ok(v) = val.parse::<bool>() {
                self.learner.undersample_before_rebuild = v;
            }
        }
        if let Ok(val) = std::env::var("POOLWISE_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                self.learner.seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("POOLWISE_CACHE_CAPACITY") {
            if let Ok(v) = val.parse::<u64>() {
                self.learner.cache_capacity = v;
            }
        }
        if let Ok(val) = std::env::var("POOLWISE_AGGREGATION") {
            if let Some(policy) = AggregationPolicy::parse(&val) {
                self.learner.aggregation = policy;
            }
        }
        if let Ok(val) = std::env::var("POOLWISE_LOG_LEVEL") {
            self.observability.log_level = val.to_ascii_lowercase();
        }
        if let Ok(val) = std::env::var("POOLWISE_JSON_LOGS") {
            if let Ok(v) = val.parse::<bool>() {
                self.observability.json_logs = v;
            }
        }
    }
}
