//! # dnose-core — Digital Nose Core Types
//!
//! Shared data model for the digital nose pipeline: scent families,
//! channel parameters, fingerprints and training data, plus the
//! validated profile registry that every other crate builds on.
//!
//! ## Pipeline
//!
//! ```text
//! ProfileRegistry ──> SensorSimulator ──> TrainingSet ──> CentroidClassifier
//! ```
//!
//! The registry establishes the channel count C once, at construction.
//! Every fingerprint flowing through the pipeline carries exactly C
//! readings in the order given by [`VOC_CHANNELS`].
//!
//! ## Exemplo
//!
//! ```ignore
//! use dnose_core::{ProfileRegistry, ScentFamily};
//!
//! let registry = ProfileRegistry::builtin();
//! let citrus = registry.get(ScentFamily::Citrus).unwrap();
//! assert_eq!(citrus.channel_count(), registry.channel_count());
//! ```

pub mod error;
pub mod registry;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use registry::ProfileRegistry;
pub use types::{
    AmbientConditions, AmbientRange, AmbientReading, ChannelParams, Fingerprint, ScentFamily,
    ScentProfile, TrainingRow, TrainingSet, CHANNEL_COUNT, VOC_CHANNELS,
};
