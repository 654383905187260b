use serde::{Deserialize, Serialize};

/// A sparse feature vector: `(index, value)` pairs sorted by index.
///
/// Indices are unique. Zero-valued entries may be present but carry no weight.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureVector {
    entries: Vec<(u32, f64)>,
}

impl FeatureVector {
    /// Build from arbitrary `(index, value)` pairs. Later duplicates overwrite earlier ones.
    pub fn new(mut entries: Vec<(u32, f64)>) -> Self {
        entries.sort_by_key(|&(i, _)| i);
        let mut deduped: Vec<(u32, f64)> = Vec::with_capacity(entries.len());
        for (i, v) in entries {
            match deduped.last_mut() {
                Some(last) if last.0 == i => last.1 = v,
                _ => deduped.push((i, v)),
            }
        }
        Self { entries: deduped }
    }

    /// Build from a dense slice, using 1-based indices.
    pub fn from_dense(values: &[f64]) -> Self {
        Self {
            entries: values
                .iter()
                .enumerate()
                .map(|(i, &v)| (i as u32 + 1, v))
                .collect(),
        }
    }

    pub fn entries(&self) -> &[(u32, f64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value at `index`, zero when absent.
    pub fn get(&self, index: u32) -> f64 {
        self.entries
            .binary_search_by_key(&index, |&(i, _)| i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    pub fn dot(&self, other: &FeatureVector) -> f64 {
        let (a, b) = (&self.entries, &other.entries);
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a[i].1 * b[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Euclidean distance.
    pub fn distance(&self, other: &FeatureVector) -> f64 {
        (self.dot(self) - 2.0 * self.dot(other) + other.dot(other))
            .max(0.0)
            .sqrt()
    }

    /// Cosine similarity; zero when either vector has no magnitude.
    pub fn cosine(&self, other: &FeatureVector) -> f64 {
        let denom = self.norm() * other.norm();
        if denom == 0.0 {
            0.0
        } else {
            self.dot(other) / denom
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sorts_and_dedups() {
        let v = FeatureVector::new(vec![(3, 1.0), (1, 2.0), (3, 5.0)]);
        assert_eq!(v.entries(), &[(1, 2.0), (3, 5.0)]);
        assert_eq!(v.get(3), 5.0);
        assert_eq!(v.get(2), 0.0);
    }

    #[test]
    fn dot_only_counts_shared_indices() {
        let a = FeatureVector::new(vec![(1, 1.0), (2, 2.0)]);
        let b = FeatureVector::new(vec![(2, 3.0), (7, 4.0)]);
        assert_eq!(a.dot(&b), 6.0);
    }

    #[test]
    fn distance_and_cosine() {
        let a = FeatureVector::from_dense(&[0.0, 3.0]);
        let b = FeatureVector::from_dense(&[4.0, 0.0]);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
        assert_eq!(a.cosine(&b), 0.0);
        assert!((a.cosine(&a) - 1.0).abs() < 1e-12);
        assert_eq!(FeatureVector::default().cosine(&a), 0.0);
    }
}
