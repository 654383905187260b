//! Test classifiers implementing `IClassifier`.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use poolwise_core::errors::ClassifierError;
use poolwise_core::models::{FeatureVector, Label};
use poolwise_core::traits::IClassifier;

// ── Nearest centroid ──────────────────────────────────────────────────────

/// Nearest-centroid classifier: one mean vector per label.
#[derive(Debug, Clone, Default)]
pub struct CentroidClassifier;

#[derive(Debug, Clone)]
pub struct CentroidModel {
    /// Sorted by label.
    pub centroids: Vec<(Label, FeatureVector)>,
    pub trained_on: usize,
}

impl IClassifier for CentroidClassifier {
    type Params = ();
    type Model = CentroidModel;

    fn train(
        &self,
        samples: &[&FeatureVector],
        labels: &[Label],
        _params: &(),
    ) -> Result<CentroidModel, ClassifierError> {
        if samples.len() != labels.len() {
            return Err(ClassifierError::DimensionMismatch {
                samples: samples.len(),
                labels: labels.len(),
            });
        }
        if samples.is_empty() {
            return Err(ClassifierError::EmptyTrainingSet);
        }

        let mut sums: BTreeMap<Label, (BTreeMap<u32, f64>, usize)> = BTreeMap::new();
        for (x, &label) in samples.iter().zip(labels) {
            let (sum, n) = sums.entry(label).or_default();
            for &(i, v) in x.entries() {
                *sum.entry(i).or_default() += v;
            }
            *n += 1;
        }

        let centroids = sums
            .into_iter()
            .map(|(label, (sum, n))| {
                let mean = sum.into_iter().map(|(i, v)| (i, v / n as f64)).collect();
                (label, FeatureVector::new(mean))
            })
            .collect();

        Ok(CentroidModel {
            centroids,
            trained_on: samples.len(),
        })
    }

    fn predict(&self, model: &CentroidModel, x: &FeatureVector) -> Label {
        let mut best: Option<(Label, f64)> = None;
        for (label, centroid) in &model.centroids {
            let d = x.distance(centroid);
            if best.map_or(true, |(_, bd)| d < bd) {
                best = Some((*label, d));
            }
        }
        best.map_or(Label::NEGATIVE, |(label, _)| label)
    }

    fn distance(&self, _model: &CentroidModel, x: &FeatureVector, y: &FeatureVector) -> f64 {
        x.distance(y)
    }

    fn similarity(&self, _model: &CentroidModel, x: &FeatureVector, y: &FeatureVector) -> f64 {
        x.cosine(y)
    }
}

// ── Constant ──────────────────────────────────────────────────────────────

/// Always predicts the label in its params. Lets tests script per-space votes.
#[derive(Debug, Clone, Default)]
pub struct ConstantClassifier;

#[derive(Debug, Clone)]
pub struct ConstantParams {
    pub label: Label,
}

impl Default for ConstantParams {
    fn default() -> Self {
        Self {
            label: Label::NEGATIVE,
        }
    }
}

impl IClassifier for ConstantClassifier {
    type Params = ConstantParams;
    type Model = Label;

    fn train(
        &self,
        _samples: &[&FeatureVector],
        _labels: &[Label],
        params: &ConstantParams,
    ) -> Result<Label, ClassifierError> {
        Ok(params.label)
    }

    fn predict(&self, model: &Label, _x: &FeatureVector) -> Label {
        *model
    }

    fn distance(&self, _model: &Label, x: &FeatureVector, y: &FeatureVector) -> f64 {
        x.distance(y)
    }

    fn similarity(&self, _model: &Label, x: &FeatureVector, y: &FeatureVector) -> f64 {
        x.cosine(y)
    }
}

// ── Call counting ─────────────────────────────────────────────────────────

/// Shared call counters, readable while the learner owns the classifier.
#[derive(Debug, Default)]
pub struct CallCounts {
    pub train: AtomicUsize,
    pub distance: AtomicUsize,
    pub similarity: AtomicUsize,
}

impl CallCounts {
    pub fn train(&self) -> usize {
        self.train.load(Ordering::SeqCst)
    }

    pub fn distance(&self) -> usize {
        self.distance.load(Ordering::SeqCst)
    }

    pub fn similarity(&self) -> usize {
        self.similarity.load(Ordering::SeqCst)
    }
}

/// Wraps another classifier and counts calls into it.
#[derive(Debug, Clone)]
pub struct CountingClassifier<C> {
    inner: C,
    counts: Arc<CallCounts>,
}

impl<C> CountingClassifier<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            counts: Arc::new(CallCounts::default()),
        }
    }

    pub fn counts(&self) -> Arc<CallCounts> {
        Arc::clone(&self.counts)
    }
}

impl<C: IClassifier> IClassifier for CountingClassifier<C> {
    type Params = C::Params;
    type Model = C::Model;

    fn train(
        &self,
        samples: &[&FeatureVector],
        labels: &[Label],
        params: &Self::Params,
    ) -> Result<Self::Model, ClassifierError> {
        self.counts.train.fetch_add(1, Ordering::SeqCst);
        self.inner.train(samples, labels, params)
    }

    fn predict(&self, model: &Self::Model, x: &FeatureVector) -> Label {
        self.inner.predict(model, x)
    }

    fn distance(&self, model: &Self::Model, x: &FeatureVector, y: &FeatureVector) -> f64 {
        self.counts.distance.fetch_add(1, Ordering::SeqCst);
        self.inner.distance(model, x, y)
    }

    fn similarity(&self, model: &Self::Model, x: &FeatureVector, y: &FeatureVector) -> f64 {
        self.counts.similarity.fetch_add(1, Ordering::SeqCst);
        self.inner.similarity(model, x, y)
    }
}

// ── Flaky ─────────────────────────────────────────────────────────────────

/// Nearest centroid that fails every training call after the first `ok_trains`.
#[derive(Debug)]
pub struct FlakyClassifier {
    ok_trains: usize,
    calls: AtomicUsize,
}

impl FlakyClassifier {
    pub fn new(ok_trains: usize) -> Self {
        Self {
            ok_trains,
            calls: AtomicUsize::new(0),
        }
    }
}

impl IClassifier for FlakyClassifier {
    type Params = ();
    type Model = CentroidModel;

    fn train(
        &self,
        samples: &[&FeatureVector],
        labels: &[Label],
        params: &(),
    ) -> Result<CentroidModel, ClassifierError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call >= self.ok_trains {
            return Err(ClassifierError::TrainingFailed {
                reason: format!("scripted failure on training call {}", call + 1),
            });
        }
        CentroidClassifier.train(samples, labels, params)
    }

    fn predict(&self, model: &CentroidModel, x: &FeatureVector) -> Label {
        CentroidClassifier.predict(model, x)
    }

    fn distance(&self, model: &CentroidModel, x: &FeatureVector, y: &FeatureVector) -> f64 {
        CentroidClassifier.distance(model, x, y)
    }

    fn similarity(&self, model: &CentroidModel, x: &FeatureVector, y: &FeatureVector) -> f64 {
        CentroidClassifier.similarity(model, x, y)
    }
}
