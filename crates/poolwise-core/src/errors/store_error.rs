//! Example store errors.

use super::error_code::{self, PoolwiseErrorCode};

/// Errors raised while loading, parsing, or writing example pools.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("malformed point on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("duplicate example id: {id}")]
    DuplicateId { id: u64 },
}

impl PoolwiseErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        error_code::STORE_ERROR
    }
}
