//! Scent data types — families, channel parameters, fingerprints

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Number of VOC channels on the simulated sensor array.
pub const CHANNEL_COUNT: usize = 6;

/// Channel names, in wire order. Fingerprints and CSV columns follow this order.
pub const VOC_CHANNELS: [&str; CHANNEL_COUNT] = [
    "acetone_ppb",
    "ethanol_ppb",
    "toluene_ppb",
    "ammonia_ppb",
    "hydrogen_sulfide_ppb",
    "terpene_ppb",
];

/// Scent family label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScentFamily {
    /// Citric notes (lemon, orange, bergamot)
    Citrus,
    /// Herbal notes (basil, mint, rosemary)
    Herbal,
    /// Sweet notes (vanilla, caramel, honey)
    Sweet,
    /// Woody notes (cedar, sandalwood, pine)
    Woody,
}

impl ScentFamily {
    /// All built-in families, in ascending name order. Variants are
    /// declared alphabetically so the derived `Ord` matches `name()`
    /// order; distance ties in the classifier rely on this.
    pub const ALL: [ScentFamily; 4] = [
        ScentFamily::Citrus,
        ScentFamily::Herbal,
        ScentFamily::Sweet,
        ScentFamily::Woody,
    ];

    /// Lowercase label used in datasets and reports
    pub fn name(&self) -> &'static str {
        match self {
            ScentFamily::Citrus => "citrus",
            ScentFamily::Herbal => "herbal",
            ScentFamily::Sweet => "sweet",
            ScentFamily::Woody => "woody",
        }
    }
}

impl fmt::Display for ScentFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScentFamily {
    type Err = CoreError;

    /// Parses a dataset label. Unknown labels are rejected, never defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "citrus" => Ok(ScentFamily::Citrus),
            "herbal" => Ok(ScentFamily::Herbal),
            "sweet" => Ok(ScentFamily::Sweet),
            "woody" => Ok(ScentFamily::Woody),
            other => Err(CoreError::UnknownFamily(other.to_string())),
        }
    }
}

/// Distribution parameters for one VOC channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelParams {
    /// Mean reading in ppb
    pub mean: f64,
    /// Standard deviation in ppb
    pub std_dev: f64,
}

impl ChannelParams {
    pub fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }
}

/// Closed interval for an ambient quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientRange {
    pub lo: f64,
    pub hi: f64,
}

impl AmbientRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn is_valid(&self) -> bool {
        self.lo.is_finite() && self.hi.is_finite() && self.lo <= self.hi
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lo && value <= self.hi
    }
}

/// Ambient condition ranges attached to a profile. Display-only context,
/// never used for classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientConditions {
    pub temperature_c: AmbientRange,
    pub humidity_pct: AmbientRange,
}

/// Ambient readings attached to one capture
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientReading {
    pub temperature_c: f64,
    pub humidity_pct: f64,
}

/// Idealized signature of one scent family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScentProfile {
    /// Family this profile describes
    pub family: ScentFamily,
    /// One entry per VOC channel, in [`VOC_CHANNELS`] order
    pub channels: Vec<ChannelParams>,
    /// Ambient ranges the family is typically captured in
    pub ambient: AmbientConditions,
}

impl ScentProfile {
    pub fn new(family: ScentFamily, channels: Vec<ChannelParams>, ambient: AmbientConditions) -> Self {
        Self {
            family,
            channels,
            ambient,
        }
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }
}

/// One capture worth of channel readings, in [`VOC_CHANNELS`] order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(Vec<f64>);

impl Fingerprint {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, channel: usize) -> Option<f64> {
        self.0.get(channel).copied()
    }

    /// Sum of all channel readings (total VOC load)
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl From<Vec<f64>> for Fingerprint {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl std::ops::Index<usize> for Fingerprint {
    type Output = f64;

    fn index(&self, channel: usize) -> &f64 {
        &self.0[channel]
    }
}

/// One labeled fingerprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRow {
    pub fingerprint: Fingerprint,
    pub label: ScentFamily,
}

impl TrainingRow {
    pub fn new(fingerprint: Fingerprint, label: ScentFamily) -> Self {
        Self { fingerprint, label }
    }
}

/// Ordered collection of labeled fingerprints. Row order does not affect
/// training results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingSet(Vec<TrainingRow>);

impl TrainingSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_rows(rows: Vec<TrainingRow>) -> Self {
        Self(rows)
    }

    pub fn push(&mut self, row: TrainingRow) {
        self.0.push(row);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrainingRow> {
        self.0.iter()
    }

    pub fn rows(&self) -> &[TrainingRow] {
        &self.0
    }

    /// Distinct labels present, ascending
    pub fn labels(&self) -> Vec<ScentFamily> {
        let set: BTreeSet<ScentFamily> = self.0.iter().map(|r| r.label).collect();
        set.into_iter().collect()
    }

    /// Rows carrying the given label
    pub fn rows_for(&self, label: ScentFamily) -> impl Iterator<Item = &TrainingRow> {
        self.0.iter().filter(move |r| r.label == label)
    }
}

impl<'a> IntoIterator for &'a TrainingSet {
    type Item = &'a TrainingRow;
    type IntoIter = std::slice::Iter<'a, TrainingRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<TrainingRow> for TrainingSet {
    fn from_iter<I: IntoIterator<Item = TrainingRow>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
