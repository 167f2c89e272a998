//! # dnose-ml — Centroid Scent Classifier
//!
//! Learns one reference fingerprint (centroid) per scent family and
//! classifies new fingerprints by scale-normalized Euclidean distance,
//! converted into a confidence distribution over all known families.
//!
//! ## Model
//!
//! - **Centroid**: arithmetic mean per channel over a label's rows.
//! - **Scale**: pooled per-channel standard deviation across the whole
//!   training set, floored at a small epsilon, so channels with naturally
//!   large variance do not dominate the distance.
//! - **Confidence**: inverse-distance weights `1 / (d + ε)`, normalized to
//!   sum to 1 — smaller distance, higher confidence.
//!
//! Training always replaces the model wholesale; there is no incremental
//! update and no partial-success mode.
//!
//! ## Exemplo
//!
//! ```ignore
//! use dnose_ml::CentroidClassifier;
//!
//! let mut classifier = CentroidClassifier::new();
//! classifier.train(&training_set)?;
//!
//! let prediction = classifier.predict(&fingerprint)?;
//! println!("{} ({:.1}%)", prediction.label, prediction.confidence * 100.0);
//! ```

pub mod classifier;
pub mod error;
pub mod evaluation;

pub use classifier::{CentroidClassifier, ClassifierModel, Prediction};
pub use error::{MlError, MlResult};
pub use evaluation::{split_holdout, ClassAccuracy, Evaluation};
