//! Scent report assembly — classifier output into a displayable summary

use serde::Serialize;
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use dnose_core::{AmbientReading, ScentFamily};
use dnose_ml::Prediction;

/// Total-VOC level (ppb) mapped to intensity index 100
const INTENSITY_REFERENCE_MAX: f64 = 600.0;

/// Structured summary of one classified capture
#[derive(Debug, Clone, Serialize)]
pub struct ScentReport {
    /// Capture time, seconds since the Unix epoch
    pub timestamp_unix_s: u64,
    pub predicted_family: ScentFamily,
    /// Confidence of the predicted family, in (0, 1]
    pub confidence: f64,
    /// 0-100 index derived from the total VOC load
    pub intensity_index: f64,
    /// Confidence per known family
    pub scores: BTreeMap<ScentFamily, f64>,
    pub environment: AmbientReading,
}

impl ScentReport {
    /// Assembles a report from a prediction and its capture context
    pub fn from_prediction(
        prediction: &Prediction,
        total_voc: f64,
        environment: AmbientReading,
    ) -> Self {
        let timestamp_unix_s = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        Self {
            timestamp_unix_s,
            predicted_family: prediction.label,
            confidence: prediction.confidence,
            intensity_index: intensity_from_total_voc(total_voc),
            scores: prediction.scores.clone(),
            environment,
        }
    }
}

/// Maps a total VOC load onto a 0-100 intensity index against a fixed
/// reference ceiling.
pub fn intensity_from_total_voc(total_voc: f64) -> f64 {
    (total_voc / INTENSITY_REFERENCE_MAX * 100.0).clamp(0.0, 100.0)
}
