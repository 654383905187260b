//! In-memory example store.

use std::collections::HashSet;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::RngCore;
use tracing::debug;

use poolwise_core::errors::StoreError;
use poolwise_core::models::{ClassRole, Example, ExampleId, Label};
use poolwise_core::traits::IExampleStore;

use crate::points;

/// A flat list of examples with a designated minority label.
///
/// Examples are kept in insertion order. Ids are unique within a dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    examples: Vec<Example>,
    minority_label: Label,
}

impl Dataset {
    /// Create a dataset whose minority class is `Label::POSITIVE`.
    pub fn new(examples: Vec<Example>) -> Self {
        Self {
            examples,
            minority_label: Label::POSITIVE,
        }
    }

    /// An empty dataset.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Override which label counts as the minority class.
    pub fn with_minority_label(mut self, label: Label) -> Self {
        self.minority_label = label;
        self
    }

    pub fn minority_label(&self) -> Label {
        self.minority_label
    }

    /// Parse the point format. Rejects duplicate ids.
    pub fn from_points_str(text: &str) -> Result<Self, StoreError> {
        let mut seen = HashSet::new();
        let mut examples = Vec::new();
        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let example = points::parse_line(line, i + 1)?;
            if !seen.insert(example.id) {
                return Err(StoreError::DuplicateId { id: example.id.0 });
            }
            examples.push(example);
        }
        Ok(Self::new(examples))
    }

    /// Load a dataset from a point file.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let text = std::fs::read_to_string(path).map_err(|e| StoreError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let dataset = Self::from_points_str(&text)?;
        debug!(path = %path.display(), examples = dataset.len(), "loaded point file");
        Ok(dataset)
    }

    /// Write the dataset to a point file, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<(), StoreError> {
        std::fs::write(path, self.serialize()).map_err(|e| StoreError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Look up an example by id.
    pub fn get(&self, id: ExampleId) -> Option<&Example> {
        self.examples.iter().find(|e| e.id == id)
    }

    /// Examples of one class.
    pub fn by_role(&self, role: ClassRole) -> impl Iterator<Item = &Example> + '_ {
        let minority = self.minority_label;
        self.examples.iter().filter(move |e| match role {
            ClassRole::Minority => e.label == minority,
            ClassRole::Majority => e.label != minority,
        })
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::empty()
    }
}

impl IExampleStore for Dataset {
    fn empty_like(&self) -> Self {
        Self {
            examples: Vec::new(),
            minority_label: self.minority_label,
        }
    }

    fn examples(&self) -> &[Example] {
        &self.examples
    }

    fn get_mut(&mut self, id: ExampleId) -> Option<&mut Example> {
        self.examples.iter_mut().find(|e| e.id == id)
    }

    fn remove(&mut self, ids: &[ExampleId]) -> Vec<Example> {
        if ids.is_empty() {
            return Vec::new();
        }
        let wanted: HashSet<ExampleId> = ids.iter().copied().collect();
        let (removed, kept): (Vec<Example>, Vec<Example>) = std::mem::take(&mut self.examples)
            .into_iter()
            .partition(|e| wanted.contains(&e.id));
        self.examples = kept;
        removed
    }

    fn insert(&mut self, examples: Vec<Example>) {
        self.examples.extend(examples);
    }

    fn count(&self, role: ClassRole) -> usize {
        self.by_role(role).count()
    }

    fn pick_random(&self, k: usize, role: ClassRole, rng: &mut dyn RngCore) -> Vec<ExampleId> {
        let candidates: Vec<ExampleId> = self.by_role(role).map(|e| e.id).collect();
        candidates.choose_multiple(rng, k).copied().collect()
    }

    fn undersample(&mut self, k: usize, rng: &mut dyn RngCore) -> Vec<Example> {
        let ids = self.pick_random(k, ClassRole::Majority, rng);
        self.remove(&ids)
    }

    fn serialize(&self) -> String {
        let mut out = String::new();
        for example in &self.examples {
            out.push_str(&points::render_line(example));
            out.push('\n');
        }
        out
    }
}
