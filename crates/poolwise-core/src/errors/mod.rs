//! Error handling for poolwise.
//! One error enum per subsystem, `thiserror` only.

pub mod classifier_error;
pub mod config_error;
pub mod error_code;
pub mod learner_error;
pub mod store_error;

pub use classifier_error::ClassifierError;
pub use config_error::ConfigError;
pub use error_code::PoolwiseErrorCode;
pub use learner_error::{LearnerError, LearnerResult};
pub use store_error::StoreError;
