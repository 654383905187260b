use crate::models::Label;

/// Folds one prediction per feature space into a single decision.
pub trait IAggregator: Send + Sync {
    /// Policy name, for logging.
    fn name(&self) -> &'static str;

    /// Aggregate votes given in feature-space order. `None` when there are no votes.
    fn aggregate(&self, votes: &[Label]) -> Option<Label>;
}
