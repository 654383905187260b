//! Classifier errors. Raised by `IClassifier` implementations and propagated
//! unchanged by the learner.

use super::error_code::{self, PoolwiseErrorCode};

/// Errors that can occur while training a classifier.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("cannot train on an empty labeled set")]
    EmptyTrainingSet,

    #[error("sample/label count mismatch: {samples} samples, {labels} labels")]
    DimensionMismatch { samples: usize, labels: usize },

    #[error("training failed: {reason}")]
    TrainingFailed { reason: String },
}

impl PoolwiseErrorCode for ClassifierError {
    fn error_code(&self) -> &'static str {
        error_code::CLASSIFIER_ERROR
    }
}
