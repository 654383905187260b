//! Aggregation of per-feature-space predictions.

use poolwise_core::config::AggregationPolicy;
use poolwise_core::models::Label;
use poolwise_core::traits::IAggregator;

/// Majority vote over the distinct predicted labels.
///
/// Ties go to the label first seen in feature-space order. This is stable and
/// deterministic but favors earlier spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct MajorityVote;

impl IAggregator for MajorityVote {
    fn name(&self) -> &'static str {
        "majority"
    }

    fn aggregate(&self, votes: &[Label]) -> Option<Label> {
        // Distinct labels in encounter order, with their counts.
        let mut tallies: Vec<(Label, usize)> = Vec::new();
        for &vote in votes {
            match tallies.iter_mut().find(|(label, _)| *label == vote) {
                Some(tally) => tally.1 += 1,
                None => tallies.push((vote, 1)),
            }
        }

        let mut best: Option<(Label, usize)> = None;
        for (label, count) in tallies {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((label, count));
            }
        }
        best.map(|(label, _)| label)
    }
}

/// Disjunctive vote: the highest label wins.
///
/// With `{-1, +1}` labels, any space predicting positive makes the aggregate
/// positive. Assumes the positive class sorts highest.
#[derive(Debug, Clone, Copy, Default)]
pub struct CautiousVote;

impl IAggregator for CautiousVote {
    fn name(&self) -> &'static str {
        "cautious"
    }

    fn aggregate(&self, votes: &[Label]) -> Option<Label> {
        votes.iter().copied().max()
    }
}

/// The aggregator implementing a configured policy.
pub fn aggregator_for(policy: AggregationPolicy) -> Box<dyn IAggregator> {
    match policy {
        AggregationPolicy::Majority => Box::new(MajorityVote),
        AggregationPolicy::Cautious => Box::new(CautiousVote),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: Label = Label::POSITIVE;
    const N: Label = Label::NEGATIVE;

    #[test]
    fn majority_picks_most_common() {
        assert_eq!(MajorityVote.aggregate(&[P, P, N]), Some(P));
        assert_eq!(MajorityVote.aggregate(&[N, P, N]), Some(N));
    }

    #[test]
    fn majority_tie_goes_to_first_seen() {
        assert_eq!(MajorityVote.aggregate(&[N, P]), Some(N));
        assert_eq!(MajorityVote.aggregate(&[P, N, N, P]), Some(P));
        assert_eq!(MajorityVote.aggregate(&[Label(3), Label(2), Label(2), Label(3)]), Some(Label(3)));
    }

    #[test]
    fn cautious_takes_any_positive() {
        assert_eq!(CautiousVote.aggregate(&[N, N, P]), Some(P));
        assert_eq!(CautiousVote.aggregate(&[N, N]), Some(N));
    }

    #[test]
    fn empty_votes_give_none() {
        assert_eq!(MajorityVote.aggregate(&[]), None);
        assert_eq!(CautiousVote.aggregate(&[]), None);
    }

    #[test]
    fn policy_maps_to_aggregator() {
        assert_eq!(aggregator_for(AggregationPolicy::Majority).name(), "majority");
        assert_eq!(aggregator_for(AggregationPolicy::Cautious).name(), "cautious");
    }
}
