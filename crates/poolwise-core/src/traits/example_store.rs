use rand::RngCore;

use crate::models::{ClassRole, Example, ExampleId, FeatureVector, Label};

/// A container of examples for one feature space.
///
/// The learner keeps two stores per feature space (unlabeled and labeled) and
/// moves examples between them by identifier.
pub trait IExampleStore: Clone + Send + Sync {
    /// An empty store with the same class conventions as `self`.
    fn empty_like(&self) -> Self;

    /// All examples, in store order.
    fn examples(&self) -> &[Example];

    /// Mutable access to one example.
    fn get_mut(&mut self, id: ExampleId) -> Option<&mut Example>;

    /// Remove the given ids and return the removed examples. Unknown ids are skipped.
    fn remove(&mut self, ids: &[ExampleId]) -> Vec<Example>;

    /// Add examples to the store.
    fn insert(&mut self, examples: Vec<Example>);

    /// Number of examples currently carrying a minority or majority label.
    fn count(&self, role: ClassRole) -> usize;

    /// Up to `k` distinct ids of the given class, chosen uniformly at random.
    fn pick_random(&self, k: usize, role: ClassRole, rng: &mut dyn RngCore) -> Vec<ExampleId>;

    /// Remove `k` random majority examples and return them.
    fn undersample(&mut self, k: usize, rng: &mut dyn RngCore) -> Vec<Example>;

    /// Render the store in its textual point format.
    fn serialize(&self) -> String;

    fn ids(&self) -> Vec<ExampleId> {
        self.examples().iter().map(|e| e.id).collect()
    }

    fn contains(&self, id: ExampleId) -> bool {
        self.examples().iter().any(|e| e.id == id)
    }

    fn len(&self) -> usize {
        self.examples().len()
    }

    fn is_empty(&self) -> bool {
        self.examples().is_empty()
    }

    /// Parallel slices of feature vectors and training labels.
    fn samples_and_labels(&self) -> (Vec<&FeatureVector>, Vec<Label>) {
        self.examples()
            .iter()
            .map(|e| (&e.features, e.label))
            .unzip()
    }
}
