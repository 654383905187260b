use serde::{Deserialize, Serialize};

/// Summary of one `active_learn` run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningReport {
    /// Labeling budget requested by the caller.
    pub requested: usize,
    /// Batch size requested from the query strategy per iteration.
    pub batch_size: usize,
    /// Loop iterations performed.
    pub iterations: usize,
    /// Examples moved to the labeled partition by the controller during the run.
    /// Strategies that label on their own are not counted here.
    pub labeled: usize,
    /// Model rebuilds performed, including the final one.
    pub rebuilds: usize,
    /// Size of the labeled partition when the run finished.
    pub labeled_total: usize,
}
