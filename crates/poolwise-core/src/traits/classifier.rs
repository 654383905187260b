use std::fmt::Debug;

use crate::errors::ClassifierError;
use crate::models::{FeatureVector, Label};

/// A trainable classifier over one feature space.
///
/// The classifier itself is stateless configuration; each call to `train`
/// produces an immutable `Model`. Distances and similarities are measured in
/// the space the model induces (e.g. a kernel space), which is why they take
/// the model.
pub trait IClassifier: Send + Sync {
    /// Per-feature-space training parameters.
    type Params: Clone + Default + Debug + Send + Sync;
    /// A trained model.
    type Model: Send + Sync;

    /// Train a model on parallel slices of samples and labels.
    fn train(
        &self,
        samples: &[&FeatureVector],
        labels: &[Label],
        params: &Self::Params,
    ) -> Result<Self::Model, ClassifierError>;

    /// Predict the label of one feature vector.
    fn predict(&self, model: &Self::Model, x: &FeatureVector) -> Label;

    /// Distance between two feature vectors in the model's space.
    fn distance(&self, model: &Self::Model, x: &FeatureVector, y: &FeatureVector) -> f64;

    /// Similarity (e.g. cosine) between two feature vectors in the model's space.
    fn similarity(&self, model: &Self::Model, x: &FeatureVector, y: &FeatureVector) -> f64;
}
