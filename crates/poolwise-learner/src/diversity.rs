//! Model-scoped distance and diversity helpers for query strategies.
//!
//! Values are memoized in the current model's caches under the ordered
//! `(x.id, y.id)` pair, so repeated scoring within one iteration hits the
//! classifier once per pair. Rebuilding the models discards the caches.

use poolwise_core::errors::LearnerResult;
use poolwise_core::models::Example;
use poolwise_core::traits::IClassifier;
use poolwise_core::traits::IExampleStore;

use crate::engine::Learner;

impl<C: IClassifier, S: IExampleStore> Learner<C, S> {
    /// Cached distance between `x` and `y` in `space`'s model.
    pub fn distance(&self, space: usize, x: &Example, y: &Example) -> LearnerResult<f64> {
        let trained = self.trained(space)?;
        Ok(trained.distances.get_or_compute(x.id, y.id, || {
            self.classifier()
                .distance(&trained.model, &x.features, &y.features)
        }))
    }

    /// Cached similarity between `x` and `y` in `space`'s model.
    pub fn similarity(&self, space: usize, x: &Example, y: &Example) -> LearnerResult<f64> {
        let trained = self.trained(space)?;
        Ok(trained.similarities.get_or_compute(x.id, y.id, || {
            self.classifier()
                .similarity(&trained.model, &x.features, &y.features)
        }))
    }

    /// Smallest distance from `x` to any member of `reference`.
    /// `None` when `reference` is empty.
    pub fn min_distance_to(
        &self,
        space: usize,
        x: &Example,
        reference: &[Example],
    ) -> LearnerResult<Option<f64>> {
        let mut min: Option<f64> = None;
        for y in reference {
            let d = self.distance(space, x, y)?;
            if min.map_or(true, |m| d < m) {
                min = Some(d);
            }
        }
        Ok(min)
    }

    /// Sum of similarities between `x` and every member of `reference`.
    pub fn diversity(&self, space: usize, x: &Example, reference: &[Example]) -> LearnerResult<f64> {
        let mut sum = 0.0;
        for y in reference {
            sum += self.similarity(space, x, y)?;
        }
        Ok(sum)
    }
}
