//! Stable machine-readable error codes.

/// Every poolwise error enum maps its variants onto a stable code string,
/// so callers can match on failures without parsing messages.
pub trait PoolwiseErrorCode {
    /// Returns the error code string (e.g., "NO_QUERY_STRATEGY").
    fn error_code(&self) -> &'static str;

    /// Returns the error formatted as `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const NO_QUERY_STRATEGY: &str = "NO_QUERY_STRATEGY";
pub const MODELS_NOT_INITIALIZED: &str = "MODELS_NOT_INITIALIZED";
pub const NO_LABELED_DATA: &str = "NO_LABELED_DATA";
pub const NO_FEATURE_SPACES: &str = "NO_FEATURE_SPACES";
pub const FEATURE_SPACE_OUT_OF_RANGE: &str = "FEATURE_SPACE_OUT_OF_RANGE";
pub const FEATURE_SPACE_MISMATCH: &str = "FEATURE_SPACE_MISMATCH";
pub const POOL_MISMATCH: &str = "POOL_MISMATCH";
pub const INVALID_BATCH_SIZE: &str = "INVALID_BATCH_SIZE";
pub const CLASSIFIER_ERROR: &str = "CLASSIFIER_ERROR";
pub const STORE_ERROR: &str = "STORE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
