//! Class-balance resampling and balanced bootstrap selection.

use tracing::{debug, info};

use poolwise_core::errors::{LearnerError, LearnerResult};
use poolwise_core::models::{ClassRole, ExampleId};
use poolwise_core::traits::{IClassifier, IExampleStore};

use crate::engine::Learner;

impl<C: IClassifier, S: IExampleStore> Learner<C, S> {
    /// Undersampled copies of the labeled partitions. The partitions
    /// themselves are never touched.
    ///
    /// `k` is the number of majority examples to drop; `None` drops enough to
    /// match the minority count of space 0. Counts use current labels, so
    /// imputed minorities count as minorities. Removal happens only when
    /// `0 < k < majority count`; otherwise plain copies are returned. Space 0
    /// picks the examples and every other space drops the same ids.
    pub fn undersample_labeled_datasets(&mut self, k: Option<usize>) -> LearnerResult<Vec<S>> {
        let first = &self.spaces[0].labeled;
        if first.is_empty() {
            return Err(LearnerError::NoLabeledData);
        }

        let majority = first.count(ClassRole::Majority);
        let minority = first.count(ClassRole::Minority);
        let k = match k {
            Some(k) => k as i64,
            None => {
                info!(majority, minority, "undersampling majority class to minority size");
                majority as i64 - minority as i64
            }
        };

        let mut copies: Vec<S> = self.spaces.iter().map(|s| s.labeled.clone()).collect();
        if k > 0 && (k as usize) < majority {
            info!(removing = k, majority, "removing majority instances");
            let removed = copies[0].undersample(k as usize, &mut self.rng);
            let removed_ids: Vec<ExampleId> = removed.iter().map(|e| e.id).collect();
            for copy in copies.iter_mut().skip(1) {
                copy.remove(&removed_ids);
            }
        } else {
            debug!(k, majority, "undersampling skipped");
        }
        Ok(copies)
    }

    /// Label `k` random minority and `k` random majority examples of the
    /// unlabeled pool, in every space. Returns the labeled ids, minority first.
    ///
    /// Seeds a balanced training set before the main loop. Fewer ids come back
    /// when a class has fewer than `k` unlabeled examples.
    pub fn pick_balanced_initial_training_set(&mut self, k: usize) -> LearnerResult<Vec<ExampleId>> {
        let pool = &self.spaces[0].unlabeled;
        let mut ids = pool.pick_random(k, ClassRole::Minority, &mut self.rng);
        ids.extend(pool.pick_random(k, ClassRole::Majority, &mut self.rng));

        self.label_instances_in_all_datasets(&ids);
        info!(
            requested_per_class = k,
            labeled = ids.len(),
            "picked balanced initial training set"
        );
        Ok(ids)
    }
}
