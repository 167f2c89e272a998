//! Validated scent profile registry
//!
//! The registry is built once, at startup, and never mutated. The first
//! profile establishes the channel count C; registering any profile with a
//! different channel count is a configuration error.

use crate::error::{CoreError, CoreResult};
use crate::types::{
    AmbientConditions, AmbientRange, ChannelParams, ScentFamily, ScentProfile, CHANNEL_COUNT,
};

/// Immutable collection of scent profiles sharing one channel count
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRegistry {
    profiles: Vec<ScentProfile>,
    channel_count: usize,
}

impl ProfileRegistry {
    /// Builds a registry from the given profiles, validating that every
    /// profile matches the channel count established by the first one.
    pub fn new(profiles: Vec<ScentProfile>) -> CoreResult<Self> {
        let channel_count = profiles
            .first()
            .map(ScentProfile::channel_count)
            .ok_or(CoreError::EmptyRegistry)?;

        if channel_count == 0 {
            return Err(CoreError::InvalidProfile(
                "profiles need at least one channel".to_string(),
            ));
        }

        let mut seen: Vec<ScentFamily> = Vec::with_capacity(profiles.len());
        for profile in &profiles {
            if profile.channel_count() != channel_count {
                return Err(CoreError::ChannelCountMismatch {
                    family: profile.family.to_string(),
                    expected: channel_count,
                    actual: profile.channel_count(),
                });
            }
            if seen.contains(&profile.family) {
                return Err(CoreError::DuplicateFamily(profile.family.to_string()));
            }
            seen.push(profile.family);

            if let Some(bad) = profile.channels.iter().find(|c| {
                !c.mean.is_finite() || !c.std_dev.is_finite() || c.std_dev < 0.0
            }) {
                return Err(CoreError::InvalidProfile(format!(
                    "profile '{}' has channel params mean={} std_dev={}",
                    profile.family, bad.mean, bad.std_dev
                )));
            }
            if !profile.ambient.temperature_c.is_valid() || !profile.ambient.humidity_pct.is_valid()
            {
                return Err(CoreError::InvalidProfile(format!(
                    "profile '{}' has an inverted ambient range",
                    profile.family
                )));
            }
        }

        Ok(Self {
            profiles,
            channel_count,
        })
    }

    /// The four built-in families with their idealized VOC signatures.
    /// Channel means are in ppb, in [`crate::VOC_CHANNELS`] order.
    pub fn builtin() -> Self {
        let profiles = vec![
            builtin_profile(
                ScentFamily::Citrus,
                [120.0, 80.0, 5.0, 3.0, 2.0, 150.0],
                0.10,
                (21.0, 25.0),
                (35.0, 45.0),
            ),
            builtin_profile(
                ScentFamily::Herbal,
                [35.0, 60.0, 15.0, 10.0, 4.0, 90.0],
                0.15,
                (20.5, 24.5),
                (45.0, 55.0),
            ),
            builtin_profile(
                ScentFamily::Woody,
                [45.0, 35.0, 30.0, 6.0, 3.5, 200.0],
                0.12,
                (19.0, 23.0),
                (40.0, 50.0),
            ),
            builtin_profile(
                ScentFamily::Sweet,
                [15.0, 95.0, 8.0, 4.0, 2.5, 170.0],
                0.08,
                (20.0, 24.0),
                (43.0, 53.0),
            ),
        ];

        Self::new(profiles).expect("built-in profiles share CHANNEL_COUNT")
    }

    /// Profiles in registration order
    pub fn profiles(&self) -> &[ScentProfile] {
        &self.profiles
    }

    /// Looks up the profile for a family, if registered
    pub fn get(&self, family: ScentFamily) -> Option<&ScentProfile> {
        self.profiles.iter().find(|p| p.family == family)
    }

    /// Channel count C shared by every registered profile
    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Builds one built-in profile: per-channel std-dev is a fixed fraction of
/// the channel mean, mirroring how real VOC sensors drift proportionally.
fn builtin_profile(
    family: ScentFamily,
    means: [f64; CHANNEL_COUNT],
    rel_std_dev: f64,
    temperature_c: (f64, f64),
    humidity_pct: (f64, f64),
) -> ScentProfile {
    let channels = means
        .iter()
        .map(|&mean| ChannelParams::new(mean, mean * rel_std_dev))
        .collect();

    ScentProfile::new(
        family,
        channels,
        AmbientConditions {
            temperature_c: AmbientRange::new(temperature_c.0, temperature_c.1),
            humidity_pct: AmbientRange::new(humidity_pct.0, humidity_pct.1),
        },
    )
}
