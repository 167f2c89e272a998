//! Tests for the sensor simulator

use super::*;
use dnose_core::{ProfileRegistry, ScentFamily, ScentProfile};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn citrus() -> ScentProfile {
    ProfileRegistry::builtin()
        .get(ScentFamily::Citrus)
        .unwrap()
        .clone()
}

// ═══════════════════════════════════════════════════════════════════════════════
// CONFIGURATION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_default_config_is_accepted() {
    let simulator = SensorSimulator::with_config(SensorConfig::default()).unwrap();
    assert_eq!(simulator.config().sample_rate_hz, 1.0);
}

#[test]
fn test_invalid_sample_rate_is_rejected() {
    let config = SensorConfig {
        sample_rate_hz: -1.0,
        ..SensorConfig::default()
    };
    assert!(matches!(
        SensorSimulator::with_config(config).unwrap_err(),
        SensorError::InvalidConfig(_)
    ));
}

#[test]
fn test_negative_drift_rate_is_rejected() {
    let config = SensorConfig {
        drift_rate: -0.01,
        ..SensorConfig::default()
    };
    assert!(matches!(
        SensorSimulator::with_config(config).unwrap_err(),
        SensorError::InvalidConfig(_)
    ));
}

// ═══════════════════════════════════════════════════════════════════════════════
// CAPTURE
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_capture_matches_profile_channel_count() {
    let profile = citrus();
    let simulator = SensorSimulator::new();
    let mut rng = StdRng::seed_from_u64(7);

    let capture = simulator.capture(&profile, &mut rng).unwrap();
    assert_eq!(capture.fingerprint.len(), profile.channel_count());
}

#[test]
fn test_readings_are_non_negative() {
    let profile = citrus();
    let simulator = SensorSimulator::new();
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..500 {
        let capture = simulator.capture(&profile, &mut rng).unwrap();
        assert!(capture.fingerprint.as_slice().iter().all(|&v| v >= 0.0));
    }
}

#[test]
fn test_ambient_stays_within_profile_ranges() {
    let profile = citrus();
    let simulator = SensorSimulator::new();
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..200 {
        let capture = simulator.capture(&profile, &mut rng).unwrap();
        assert!(profile.ambient.temperature_c.contains(capture.ambient.temperature_c));
        assert!(profile.ambient.humidity_pct.contains(capture.ambient.humidity_pct));
    }
}

#[test]
fn test_same_seed_reproduces_identical_captures() {
    let profile = citrus();
    let simulator = SensorSimulator::new();

    let mut rng_a = StdRng::seed_from_u64(42);
    let mut rng_b = StdRng::seed_from_u64(42);

    let a = simulator.capture(&profile, &mut rng_a).unwrap();
    let b = simulator.capture(&profile, &mut rng_b).unwrap();
    assert_eq!(a, b);

    // Whole series reproduce too
    let mut rng_a = StdRng::seed_from_u64(42);
    let mut rng_b = StdRng::seed_from_u64(42);
    let series_a = simulator.capture_series(&profile, 20, &mut rng_a).unwrap();
    let series_b = simulator.capture_series(&profile, 20, &mut rng_b).unwrap();
    assert_eq!(series_a, series_b);
}

#[test]
fn test_independent_seeds_diverge() {
    let profile = citrus();
    let simulator = SensorSimulator::new();

    let mut rng_a = StdRng::seed_from_u64(1);
    let mut rng_b = StdRng::seed_from_u64(2);

    let a = simulator.capture(&profile, &mut rng_a).unwrap();
    let b = simulator.capture(&profile, &mut rng_b).unwrap();
    assert_ne!(a.fingerprint, b.fingerprint);
}

#[test]
fn test_series_of_one_equals_single_capture() {
    let profile = citrus();
    let simulator = SensorSimulator::new();

    let mut rng_a = StdRng::seed_from_u64(5);
    let mut rng_b = StdRng::seed_from_u64(5);

    let single = simulator.capture(&profile, &mut rng_a).unwrap();
    let series = simulator.capture_series(&profile, 1, &mut rng_b).unwrap();
    assert_eq!(series, vec![single]);
}

#[test]
fn test_zero_noise_profile_reproduces_channel_means() {
    let mut profile = citrus();
    for params in &mut profile.channels {
        params.std_dev = 0.0;
    }

    let simulator = SensorSimulator::new();
    let mut rng = StdRng::seed_from_u64(11);
    let capture = simulator.capture(&profile, &mut rng).unwrap();

    for (reading, params) in capture.fingerprint.as_slice().iter().zip(&profile.channels) {
        assert_eq!(*reading, params.mean);
    }
}

#[test]
fn test_malformed_profile_is_rejected_at_capture() {
    let mut profile = citrus();
    profile.channels.clear();

    let simulator = SensorSimulator::new();
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        simulator.capture(&profile, &mut rng).unwrap_err(),
        SensorError::InvalidProfile(_)
    ));
}
