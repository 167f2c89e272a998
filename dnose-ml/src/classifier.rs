//! Centroid classifier over VOC fingerprints

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use dnose_core::{Fingerprint, ScentFamily, TrainingSet};

use crate::error::{MlError, MlResult};

/// Floor applied to per-channel scale so a zero-variance channel cannot
/// divide by zero during distance computation.
const SCALE_FLOOR: f64 = 1e-6;

/// Epsilon added to distances before inversion, so an exact centroid hit
/// still yields a finite weight.
const DISTANCE_EPS: f64 = 1e-6;

/// Learned state: one centroid per label plus the pooled channel scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierModel {
    /// Mean fingerprint per label, keyed in ascending label order
    centroids: BTreeMap<ScentFamily, Vec<f64>>,
    /// Pooled per-channel standard deviation across the whole training
    /// set, floored at [`SCALE_FLOOR`]
    scale: Vec<f64>,
    channel_count: usize,
}

impl ClassifierModel {
    /// Labels the model can classify, ascending
    pub fn labels(&self) -> impl Iterator<Item = ScentFamily> + '_ {
        self.centroids.keys().copied()
    }

    /// Centroid for a label, if known
    pub fn centroid(&self, label: ScentFamily) -> Option<&[f64]> {
        self.centroids.get(&label).map(Vec::as_slice)
    }

    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    pub fn scale(&self) -> &[f64] {
        &self.scale
    }

    /// Serializes the model as JSON
    pub fn to_json(&self) -> MlResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| MlError::Serialization(e.to_string()))
    }

    /// Restores a model from its JSON form
    pub fn from_json(json: &str) -> MlResult<Self> {
        serde_json::from_str(json).map_err(|e| MlError::Serialization(e.to_string()))
    }

    /// Scale-normalized Euclidean distance from a fingerprint to a centroid
    fn distance(&self, fingerprint: &Fingerprint, centroid: &[f64]) -> f64 {
        fingerprint
            .as_slice()
            .iter()
            .zip(centroid)
            .zip(&self.scale)
            .map(|((&x, &c), &s)| {
                let d = (x - c) / s;
                d * d
            })
            .sum::<f64>()
            .sqrt()
    }
}

/// Result of classifying one fingerprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Label with the highest confidence
    pub label: ScentFamily,
    /// Confidence of `label`, in (0, 1]
    pub confidence: f64,
    /// Confidence per known label; sums to 1 across all labels
    pub scores: BTreeMap<ScentFamily, f64>,
}

/// Centroid classifier.
///
/// Two states: untrained (fresh) and trained. [`train`](Self::train)
/// replaces the model wholesale and is idempotent for a given training
/// set; [`predict`](Self::predict) fails with [`MlError::NotTrained`]
/// until the first successful training.
#[derive(Debug, Clone, Default)]
pub struct CentroidClassifier {
    model: Option<ClassifierModel>,
}

impl CentroidClassifier {
    pub fn new() -> Self {
        Self { model: None }
    }

    /// Creates a classifier already holding a model (e.g. restored from JSON)
    pub fn from_model(model: ClassifierModel) -> Self {
        Self { model: Some(model) }
    }

    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    /// The current model, if trained
    pub fn model(&self) -> Option<&ClassifierModel> {
        self.model.as_ref()
    }

    /// Trains on every label present in the set.
    ///
    /// The previous model, if any, is only replaced once the new one is
    /// fully computed; on error no state changes.
    pub fn train(&mut self, set: &TrainingSet) -> MlResult<&ClassifierModel> {
        let model = compute_model(set)?;
        Ok(&*self.model.insert(model))
    }

    /// Trains on an explicit label list, failing with
    /// [`MlError::InsufficientData`] when any listed label has zero rows.
    /// Rows carrying unlisted labels are ignored.
    pub fn train_for(
        &mut self,
        labels: &[ScentFamily],
        set: &TrainingSet,
    ) -> MlResult<&ClassifierModel> {
        if labels.is_empty() {
            return Err(MlError::InsufficientData(
                "no labels requested for training".to_string(),
            ));
        }
        for &label in labels {
            if set.rows_for(label).next().is_none() {
                return Err(MlError::InsufficientData(format!(
                    "label '{label}' has no training rows"
                )));
            }
        }

        let filtered: TrainingSet = set
            .iter()
            .filter(|row| labels.contains(&row.label))
            .cloned()
            .collect();
        self.train(&filtered)
    }

    /// Classifies one fingerprint against every known label.
    ///
    /// Distances convert to confidences by inverse-distance weighting:
    /// `w = 1 / (d + ε)`, normalized to sum to 1. The transform is
    /// strictly decreasing in distance, so the nearest centroid always
    /// takes the maximum confidence; exact ties resolve to the first
    /// label in ascending name order.
    pub fn predict(&self, fingerprint: &Fingerprint) -> MlResult<Prediction> {
        let model = self.model.as_ref().ok_or(MlError::NotTrained)?;
        if fingerprint.len() != model.channel_count {
            return Err(MlError::ShapeMismatch {
                expected: model.channel_count,
                actual: fingerprint.len(),
            });
        }

        let mut weights: Vec<(ScentFamily, f64)> = Vec::with_capacity(model.centroids.len());
        let mut total = 0.0;
        for (&label, centroid) in &model.centroids {
            let w = 1.0 / (model.distance(fingerprint, centroid) + DISTANCE_EPS);
            weights.push((label, w));
            total += w;
        }

        let mut scores = BTreeMap::new();
        let mut best: Option<(ScentFamily, f64)> = None;
        for (label, w) in weights {
            let confidence = w / total;
            scores.insert(label, confidence);
            // Strict comparison keeps the first label in name order on ties
            if best.map_or(true, |(_, c)| confidence > c) {
                best = Some((label, confidence));
            }
        }

        let (label, confidence) = best.expect("model holds at least one centroid");
        Ok(Prediction {
            label,
            confidence,
            scores,
        })
    }
}

/// Computes a complete model from a training set, or fails without
/// producing anything.
fn compute_model(set: &TrainingSet) -> MlResult<ClassifierModel> {
    if set.is_empty() {
        return Err(MlError::InsufficientData(
            "training set is empty".to_string(),
        ));
    }

    let channel_count = set.rows()[0].fingerprint.len();
    if channel_count == 0 {
        return Err(MlError::InsufficientData(
            "fingerprints have no channels".to_string(),
        ));
    }
    for row in set {
        if row.fingerprint.len() != channel_count {
            return Err(MlError::ShapeMismatch {
                expected: channel_count,
                actual: row.fingerprint.len(),
            });
        }
    }

    // Per-label arithmetic mean, channel by channel
    let mut centroids: BTreeMap<ScentFamily, Vec<f64>> = BTreeMap::new();
    for label in set.labels() {
        let mut sums = vec![0.0; channel_count];
        let mut count = 0usize;
        for row in set.rows_for(label) {
            for (sum, &x) in sums.iter_mut().zip(row.fingerprint.as_slice()) {
                *sum += x;
            }
            count += 1;
        }
        for sum in &mut sums {
            *sum /= count as f64;
        }
        centroids.insert(label, sums);
    }

    // Pooled population std-dev per channel across the whole set
    let n = set.len() as f64;
    let mut means = vec![0.0; channel_count];
    for row in set {
        for (mean, &x) in means.iter_mut().zip(row.fingerprint.as_slice()) {
            *mean += x;
        }
    }
    for mean in &mut means {
        *mean /= n;
    }

    let mut scale = vec![0.0; channel_count];
    for row in set {
        for ((var, &mean), &x) in scale.iter_mut().zip(&means).zip(row.fingerprint.as_slice()) {
            let d = x - mean;
            *var += d * d;
        }
    }
    for var in &mut scale {
        *var = (*var / n).sqrt().max(SCALE_FLOOR);
    }

    Ok(ClassifierModel {
        centroids,
        scale,
        channel_count,
    })
}
