use std::fmt;

use serde::{Deserialize, Serialize};

use super::{FeatureVector, Label};

/// Stable identifier of an underlying item, shared by every feature space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExampleId(pub u64);

impl fmt::Display for ExampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ExampleId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// One example as seen in one feature space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub id: ExampleId,
    pub features: FeatureVector,
    /// The label used for training. Equals `true_label` unless imputed.
    pub label: Label,
    /// Ground truth revealed by the oracle.
    pub true_label: Label,
    /// Set when `label` was imputed rather than revealed.
    pub synthetic_label: bool,
}

impl Example {
    pub fn new(id: impl Into<ExampleId>, features: FeatureVector, label: Label) -> Self {
        Self {
            id: id.into(),
            features,
            label,
            true_label: label,
            synthetic_label: false,
        }
    }

    /// Replace the training label with an imputed one.
    pub fn assume_label(&mut self, label: Label) {
        self.label = label;
        self.synthetic_label = true;
    }

    /// Drop any imputed label and go back to ground truth.
    pub fn restore_true_label(&mut self) {
        self.label = self.true_label;
        self.synthetic_label = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assume_then_restore() {
        let mut e = Example::new(7, FeatureVector::default(), Label::NEGATIVE);
        e.assume_label(Label::POSITIVE);
        assert_eq!(e.label, Label::POSITIVE);
        assert!(e.synthetic_label);

        e.restore_true_label();
        assert_eq!(e.label, Label::NEGATIVE);
        assert!(!e.synthetic_label);
    }
}
