pub mod example;
pub mod feature_vector;
pub mod label;
pub mod learning_report;

pub use example::{Example, ExampleId};
pub use feature_vector::FeatureVector;
pub use label::{ClassRole, Label};
pub use learning_report::LearningReport;
