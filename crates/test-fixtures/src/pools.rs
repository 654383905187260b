//! Pool builders.
//!
//! Minority examples get ids `0..minority` and label `+1`; majority examples
//! follow with label `-1`. Features are deterministic so runs are repeatable.

use poolwise_core::models::{Example, ExampleId, FeatureVector, Label};
use poolwise_dataset::Dataset;

/// One feature space with two well separated clusters.
pub fn balanced_pool(minority: usize, majority: usize) -> Dataset {
    space_pool(minority, majority, 0)
}

/// `spaces` parallel pools over the same ids, each with its own feature layout.
pub fn multi_space_pools(minority: usize, majority: usize, spaces: usize) -> Vec<Dataset> {
    (0..spaces)
        .map(|s| space_pool(minority, majority, s))
        .collect()
}

fn space_pool(minority: usize, majority: usize, space: usize) -> Dataset {
    let scale = 1.0 + space as f64;
    let examples = (0..minority + majority)
        .map(|i| {
            let (label, sign) = if i < minority {
                (Label::POSITIVE, 1.0)
            } else {
                (Label::NEGATIVE, -1.0)
            };
            let jitter = (i % 7) as f64 * 0.05;
            let features = FeatureVector::new(vec![
                (1 + space as u32, sign * scale + jitter),
                (2 + space as u32, sign * scale - jitter),
            ]);
            Example::new(ExampleId(i as u64), features, label)
        })
        .collect();
    Dataset::new(examples)
}
