//! Learner controller errors.
//!
//! All of these are usage or precondition failures. None are retried internally.

use super::error_code::{self, PoolwiseErrorCode};
use super::{ClassifierError, ConfigError, StoreError};

/// Errors surfaced by the active learning controller.
#[derive(Debug, thiserror::Error)]
pub enum LearnerError {
    /// Selection was requested but no query strategy is installed.
    #[error("no query function provided")]
    NoQueryStrategy,

    /// Prediction or a model-scoped operation was requested before any model was trained.
    #[error("no models have been initialized")]
    ModelsNotInitialized,

    /// Resampling was requested before anything was labeled.
    #[error("no labeled data has been provided")]
    NoLabeledData,

    #[error("a learner needs at least one feature space")]
    NoFeatureSpaces,

    #[error("feature space {index} out of range ({count} spaces)")]
    FeatureSpaceOutOfRange { index: usize, count: usize },

    /// A per-space input (feature vectors, models) did not line up with the spaces.
    #[error("expected {expected} per-space inputs, got {actual}")]
    FeatureSpaceMismatch { expected: usize, actual: usize },

    /// The pools handed to the learner do not describe the same examples.
    #[error("pool for feature space {space} is not in lockstep with space 0: {details}")]
    PoolMismatch { space: usize, details: String },

    #[error("batch size must be greater than zero")]
    InvalidBatchSize,

    #[error("classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("invalid learner config: {0}")]
    Config(#[from] ConfigError),
}

impl PoolwiseErrorCode for LearnerError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoQueryStrategy => error_code::NO_QUERY_STRATEGY,
            Self::ModelsNotInitialized => error_code::MODELS_NOT_INITIALIZED,
            Self::NoLabeledData => error_code::NO_LABELED_DATA,
            Self::NoFeatureSpaces => error_code::NO_FEATURE_SPACES,
            Self::FeatureSpaceOutOfRange { .. } => error_code::FEATURE_SPACE_OUT_OF_RANGE,
            Self::FeatureSpaceMismatch { .. } => error_code::FEATURE_SPACE_MISMATCH,
            Self::PoolMismatch { .. } => error_code::POOL_MISMATCH,
            Self::InvalidBatchSize => error_code::INVALID_BATCH_SIZE,
            Self::Classifier(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type LearnerResult<T> = Result<T, LearnerError>;
