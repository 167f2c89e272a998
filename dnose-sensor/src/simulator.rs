//! Simulated capture of a multi-channel VOC sensor array

use rand::Rng;
use serde::{Deserialize, Serialize};

use dnose_core::{AmbientRange, AmbientReading, Fingerprint, ScentProfile};

use crate::error::{SensorError, SensorResult};

/// Configuration for the simulated sensor array
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorConfig {
    /// Fraction of drift that bleeds into each reading (0.0 - 1.0)
    pub baseline_noise: f64,
    /// Amplitude of the slow sinusoidal drift across a capture series
    pub drift_rate: f64,
    /// Sample rate in Hz
    pub sample_rate_hz: f32,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            baseline_noise: 0.05,
            drift_rate: 0.01,
            sample_rate_hz: 1.0,
        }
    }
}

/// One simulated capture: channel readings plus ambient context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capture {
    pub fingerprint: Fingerprint,
    pub ambient: AmbientReading,
}

/// Simulated VOC sensor array.
///
/// Stateless apart from its configuration: all randomness is drawn from
/// the stream the caller threads through [`capture`](Self::capture).
#[derive(Debug, Clone)]
pub struct SensorSimulator {
    config: SensorConfig,
}

impl SensorSimulator {
    /// Creates a simulator with the default configuration
    pub fn new() -> Self {
        Self {
            config: SensorConfig::default(),
        }
    }

    /// Creates a simulator with a specific configuration
    pub fn with_config(config: SensorConfig) -> SensorResult<Self> {
        if !(config.sample_rate_hz > 0.0 && config.sample_rate_hz <= 100.0) {
            return Err(SensorError::InvalidConfig(
                "sample rate must be between 0 and 100 Hz".into(),
            ));
        }
        if config.baseline_noise < 0.0 || config.drift_rate < 0.0 {
            return Err(SensorError::InvalidConfig(
                "baseline noise and drift rate must be non-negative".into(),
            ));
        }

        Ok(Self { config })
    }

    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Simulates one capture of the given profile.
    ///
    /// Draw order is fixed: the C channels in profile order, then
    /// temperature, then humidity. Channel readings are Gaussian around
    /// the profile's per-channel (mean, std_dev), clamped at zero —
    /// a VOC concentration cannot be negative. Ambient readings are
    /// uniform within the profile's ranges.
    pub fn capture<R: Rng>(&self, profile: &ScentProfile, rng: &mut R) -> SensorResult<Capture> {
        self.capture_drifted(profile, 0.0, rng)
    }

    /// Simulates a series of `n` captures with slow sinusoidal drift.
    ///
    /// Sample `i` carries a multiplicative drift of
    /// `drift_rate * sin(i / 25) * baseline_noise`; a series of one equals
    /// a single [`capture`](Self::capture).
    pub fn capture_series<R: Rng>(
        &self,
        profile: &ScentProfile,
        n: usize,
        rng: &mut R,
    ) -> SensorResult<Vec<Capture>> {
        let mut captures = Vec::with_capacity(n);
        for i in 0..n {
            let drift = self.config.drift_rate * (i as f64 / 25.0).sin();
            captures.push(self.capture_drifted(profile, drift, rng)?);
        }
        Ok(captures)
    }

    fn capture_drifted<R: Rng>(
        &self,
        profile: &ScentProfile,
        drift: f64,
        rng: &mut R,
    ) -> SensorResult<Capture> {
        validate_profile(profile)?;

        let gain = 1.0 + drift * self.config.baseline_noise;
        let mut readings = Vec::with_capacity(profile.channel_count());
        for params in &profile.channels {
            let raw = params.mean + params.std_dev * gaussian(rng);
            readings.push((raw * gain).max(0.0));
        }

        let ambient = AmbientReading {
            temperature_c: uniform_in(&profile.ambient.temperature_c, rng),
            humidity_pct: uniform_in(&profile.ambient.humidity_pct, rng),
        };

        Ok(Capture {
            fingerprint: Fingerprint::new(readings),
            ambient,
        })
    }
}

impl Default for SensorSimulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Boundary check on the profile handed in by the caller. Registry
/// validation normally prevents all of these.
fn validate_profile(profile: &ScentProfile) -> SensorResult<()> {
    if profile.channels.is_empty() {
        return Err(SensorError::InvalidProfile(format!(
            "profile '{}' has no channels",
            profile.family
        )));
    }
    if profile
        .channels
        .iter()
        .any(|c| !c.mean.is_finite() || !c.std_dev.is_finite() || c.std_dev < 0.0)
    {
        return Err(SensorError::InvalidProfile(format!(
            "profile '{}' has malformed channel params",
            profile.family
        )));
    }
    if !profile.ambient.temperature_c.is_valid() || !profile.ambient.humidity_pct.is_valid() {
        return Err(SensorError::InvalidProfile(format!(
            "profile '{}' has an inverted ambient range",
            profile.family
        )));
    }
    Ok(())
}

/// Standard Gaussian draw via Box–Muller over the supplied stream
fn gaussian<R: Rng>(rng: &mut R) -> f64 {
    let u1: f64 = rng.gen_range(f64::MIN_POSITIVE..1.0);
    let u2: f64 = rng.gen_range(0.0..1.0);
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

fn uniform_in<R: Rng>(range: &AmbientRange, rng: &mut R) -> f64 {
    if range.lo == range.hi {
        range.lo
    } else {
        rng.gen_range(range.lo..=range.hi)
    }
}
