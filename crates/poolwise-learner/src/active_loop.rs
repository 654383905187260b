//! The active learning loop.
//!
//! Each iteration: select a batch → label it in every space → optionally
//! rebuild. The loop stops once the running batch total reaches the budget,
//! then always rebuilds once more so the models reflect the final labeled set.

use tracing::{debug, info, warn};

use poolwise_core::errors::{LearnerError, LearnerResult};
use poolwise_core::models::LearningReport;
use poolwise_core::traits::{IClassifier, IExampleStore};

use crate::engine::Learner;
use crate::strategies::Selection;

impl<C: IClassifier, S: IExampleStore> Learner<C, S> {
    /// Label `budget` examples, `batch_size` at a time.
    ///
    /// The budget counts requested batches, so an unconstrained pool ends up
    /// with `ceil(budget / batch_size) * batch_size` newly labeled examples.
    /// A strategy may return ids for the learner to label, or label them itself
    /// and return [`Selection::Handled`].
    pub fn active_learn(
        &mut self,
        budget: usize,
        batch_size: usize,
        rebuild_each_iteration: bool,
    ) -> LearnerResult<LearningReport> {
        if !self.has_query_strategy() {
            return Err(LearnerError::NoQueryStrategy);
        }
        if batch_size == 0 && budget > 0 {
            return Err(LearnerError::InvalidBatchSize);
        }

        let undersample = self.config.undersample_before_rebuild;
        let mut report = LearningReport {
            requested: budget,
            batch_size,
            ..LearningReport::default()
        };

        let mut labeled_so_far = 0;
        while labeled_so_far < budget {
            info!(learner = %self.name(), labeled_so_far, budget, "labeling next batch");

            match self.query(batch_size)? {
                Selection::Ids(ids) if !ids.is_empty() => {
                    report.labeled += self.label_instances_in_all_datasets(&ids);
                }
                Selection::Ids(_) => {
                    warn!(unlabeled = self.unlabeled_count(), "query strategy selected nothing");
                }
                Selection::Handled => {
                    debug!("query strategy labeled its own selection");
                }
            }

            if rebuild_each_iteration {
                self.rebuild_models(undersample)?;
                report.rebuilds += 1;
                info!(labeled = self.labeled_count(), "models rebuilt");
            } else {
                info!(
                    labeled = self.labeled_count(),
                    "not rebuilding models at each iteration"
                );
            }

            labeled_so_far += batch_size;
            report.iterations += 1;
        }

        self.rebuild_models(undersample)?;
        report.rebuilds += 1;
        report.labeled_total = self.labeled_count();
        info!(
            learner = %self.name(),
            iterations = report.iterations,
            labeled_total = report.labeled_total,
            "active learning loop completed; models rebuilt"
        );
        Ok(report)
    }

    /// Run the loop with the batch size and rebuild policy from the learner config.
    pub fn run(&mut self, budget: usize) -> LearnerResult<LearningReport> {
        let batch_size = self.config.batch_size;
        let rebuild = self.config.rebuild_each_iteration;
        self.active_learn(budget, batch_size, rebuild)
    }
}
