use std::fmt;

use serde::{Deserialize, Serialize};

/// A class label.
///
/// Labels are ordered so that the positive (minority) class sorts highest,
/// which the cautious aggregation policy relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(pub i32);

impl Label {
    pub const POSITIVE: Label = Label(1);
    pub const NEGATIVE: Label = Label(-1);

    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Label {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

/// Which side of the class imbalance an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassRole {
    Minority,
    Majority,
}
