//! Holdout evaluation for the centroid classifier

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use dnose_core::{ScentFamily, TrainingSet};

use crate::classifier::CentroidClassifier;
use crate::error::{MlError, MlResult};

/// Per-label tally of correct predictions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassAccuracy {
    pub correct: usize,
    pub total: usize,
}

impl ClassAccuracy {
    /// Fraction correct, or `None` when the label had no samples
    pub fn accuracy(&self) -> Option<f64> {
        (self.total > 0).then(|| self.correct as f64 / self.total as f64)
    }
}

/// Accuracy summary over a labeled evaluation set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub overall_accuracy: f64,
    pub per_class: BTreeMap<ScentFamily, ClassAccuracy>,
    pub samples_evaluated: usize,
}

impl CentroidClassifier {
    /// Predicts every row of a labeled set and tallies accuracy.
    /// Typically run on the holdout side of [`split_holdout`].
    pub fn evaluate(&self, set: &TrainingSet) -> MlResult<Evaluation> {
        let mut per_class: BTreeMap<ScentFamily, ClassAccuracy> = BTreeMap::new();
        let mut correct = 0usize;

        for row in set {
            let prediction = self.predict(&row.fingerprint)?;
            let tally = per_class.entry(row.label).or_default();
            tally.total += 1;
            if prediction.label == row.label {
                tally.correct += 1;
                correct += 1;
            }
        }

        let samples_evaluated = set.len();
        let overall_accuracy = if samples_evaluated > 0 {
            correct as f64 / samples_evaluated as f64
        } else {
            0.0
        };

        Ok(Evaluation {
            overall_accuracy,
            per_class,
            samples_evaluated,
        })
    }
}

/// Splits a labeled set into (train, holdout) with a seeded shuffle.
///
/// The fraction must lie in (0, 1). The holdout always keeps at least one
/// row and never swallows the whole set; a set of fewer than two rows is
/// returned whole on both sides.
pub fn split_holdout(
    set: &TrainingSet,
    test_fraction: f64,
    seed: u64,
) -> MlResult<(TrainingSet, TrainingSet)> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(MlError::InvalidInput(format!(
            "test fraction must be between 0 and 1, got {test_fraction}"
        )));
    }

    if set.len() < 2 {
        return Ok((set.clone(), set.clone()));
    }

    let mut rows = set.rows().to_vec();
    let mut rng = StdRng::seed_from_u64(seed);
    rows.shuffle(&mut rng);

    let holdout = ((set.len() as f64 * test_fraction).round() as usize)
        .max(1)
        .min(set.len() - 1);
    let train = rows.split_off(holdout);

    Ok((TrainingSet::from_rows(train), TrainingSet::from_rows(rows)))
}
