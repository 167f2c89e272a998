//! # dnose-sensor — VOC Sensor Simulator
//!
//! Simulates a multi-channel VOC sensor array: one capture per call,
//! parameterized by a [`ScentProfile`](dnose_core::ScentProfile) and an
//! explicit random stream.
//!
//! ## Determinism
//!
//! The simulator holds no random state of its own. Every draw comes from
//! the `rng` the caller passes in, so the same profile plus the same seed
//! reproduces bit-identical captures — and independently seeded streams
//! can run concurrently without interfering.
//!
//! ## Exemplo
//!
//! ```ignore
//! use dnose_core::{ProfileRegistry, ScentFamily};
//! use dnose_sensor::SensorSimulator;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let registry = ProfileRegistry::builtin();
//! let simulator = SensorSimulator::new();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let capture = simulator.capture(registry.get(ScentFamily::Citrus).unwrap(), &mut rng)?;
//! println!("total VOC: {:.1} ppb", capture.fingerprint.total());
//! ```

pub mod error;
pub mod simulator;

pub use error::{SensorError, SensorResult};
pub use simulator::{Capture, SensorConfig, SensorSimulator};

#[cfg(test)]
mod tests;
