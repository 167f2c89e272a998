//! Dataset builder — simulated captures in, labeled CSV out
//!
//! The builder owns the CSV contract: the six VOC channel columns in
//! [`VOC_CHANNELS`] order, then `temperature_c`, `humidity_pct` and the
//! `scent_family` label. Channel order and label spelling are exactly
//! what the simulator and registry produce.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use dnose_core::{
    AmbientReading, Fingerprint, ProfileRegistry, ScentFamily, TrainingRow, TrainingSet,
    CHANNEL_COUNT, VOC_CHANNELS,
};
use dnose_sensor::SensorSimulator;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// One dataset row: a capture plus its label
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledCapture {
    pub fingerprint: Fingerprint,
    pub ambient: AmbientReading,
    pub label: ScentFamily,
}

/// CSV wire form of one row. Field order defines the column order.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    acetone_ppb: f64,
    ethanol_ppb: f64,
    toluene_ppb: f64,
    ammonia_ppb: f64,
    hydrogen_sulfide_ppb: f64,
    terpene_ppb: f64,
    temperature_c: f64,
    humidity_pct: f64,
    scent_family: String,
}

/// Simulates `samples_per_profile` captures for every registered profile.
///
/// Each profile gets its own random stream derived from `base_seed`, so
/// profiles can be generated in any order (or concurrently) without
/// changing the data.
pub fn build_dataset(
    registry: &ProfileRegistry,
    samples_per_profile: usize,
    base_seed: u64,
) -> Result<Vec<LabeledCapture>> {
    let simulator = SensorSimulator::new();
    let mut rows = Vec::with_capacity(registry.len() * samples_per_profile);

    for (index, profile) in registry.profiles().iter().enumerate() {
        let mut rng = StdRng::seed_from_u64(profile_seed(base_seed, index));
        let captures = simulator
            .capture_series(profile, samples_per_profile, &mut rng)
            .with_context(|| format!("simulating profile '{}'", profile.family))?;

        for capture in captures {
            rows.push(LabeledCapture {
                fingerprint: capture.fingerprint,
                ambient: capture.ambient,
                label: profile.family,
            });
        }
    }

    Ok(rows)
}

/// Splitmix-style seed derivation: one independent stream per profile
fn profile_seed(base_seed: u64, profile_index: usize) -> u64 {
    base_seed ^ (profile_index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Drops ambient context, keeping what the classifier trains on
pub fn to_training_set(rows: &[LabeledCapture]) -> TrainingSet {
    rows.iter()
        .map(|r| TrainingRow::new(r.fingerprint.clone(), r.label))
        .collect()
}

/// Writes rows to CSV at `path`, overwriting any existing file
pub fn write_csv(path: &Path, rows: &[LabeledCapture]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("opening {} for writing", path.display()))?;
    for row in rows {
        writer.serialize(to_csv_row(row)?)?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads a labeled dataset back from CSV, rejecting unknown family labels
pub fn read_csv(path: &Path) -> Result<Vec<LabeledCapture>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("reading {}", path.display()))?;

    let mut rows = Vec::new();
    for (line, record) in reader.deserialize::<CsvRow>().enumerate() {
        let record = record.with_context(|| format!("parsing row {}", line + 1))?;
        rows.push(from_csv_row(&record).with_context(|| format!("row {}", line + 1))?);
    }
    Ok(rows)
}

/// Generates the dataset at `path` unless it already exists (or `force`)
pub fn ensure_dataset(
    path: &Path,
    registry: &ProfileRegistry,
    samples_per_profile: usize,
    base_seed: u64,
    force: bool,
) -> Result<()> {
    if path.exists() && !force {
        return Ok(());
    }
    let rows = build_dataset(registry, samples_per_profile, base_seed)?;
    write_csv(path, &rows)
}

fn to_csv_row(row: &LabeledCapture) -> Result<CsvRow> {
    let fp = row.fingerprint.as_slice();
    if fp.len() != CHANNEL_COUNT {
        bail!(
            "fingerprint has {} channels, CSV schema carries the {} columns {:?}",
            fp.len(),
            CHANNEL_COUNT,
            VOC_CHANNELS
        );
    }

    Ok(CsvRow {
        acetone_ppb: fp[0],
        ethanol_ppb: fp[1],
        toluene_ppb: fp[2],
        ammonia_ppb: fp[3],
        hydrogen_sulfide_ppb: fp[4],
        terpene_ppb: fp[5],
        temperature_c: row.ambient.temperature_c,
        humidity_pct: row.ambient.humidity_pct,
        scent_family: row.label.to_string(),
    })
}

fn from_csv_row(record: &CsvRow) -> Result<LabeledCapture> {
    let label: ScentFamily = record.scent_family.parse()?;
    Ok(LabeledCapture {
        fingerprint: Fingerprint::new(vec![
            record.acetone_ppb,
            record.ethanol_ppb,
            record.toluene_ppb,
            record.ammonia_ppb,
            record.hydrogen_sulfide_ppb,
            record.terpene_ppb,
        ]),
        ambient: AmbientReading {
            temperature_c: record.temperature_c,
            humidity_pct: record.humidity_pct,
        },
        label,
    })
}
