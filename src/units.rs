//! # Unit-carrying values
//!
//! Two thin newtypes around `f64` keep the physical conventions of the crate explicit
//! at the API boundary, while every internal computation works on plain reals:
//!
//! - [`HubbleConstant`] stores an expansion rate in **km/s/Mpc**.
//! - [`CosmicAge`] stores a cosmic time in **seconds**.
//!
//! Both expose constructors and extractors for the usual astronomical units
//! (s⁻¹, Myr⁻¹, years, Myr, Gyr). Short ages can also be bridged to
//! [`hifitime::Duration`], which is what the rest of an astronomy pipeline
//! typically carries around.
//!
//! ## Example
//!
//! ```rust
//! use cosmotime::units::{CosmicAge, HubbleConstant};
//!
//! let h0 = HubbleConstant::from_km_s_mpc(70.5);
//! let t_hubble: CosmicAge = h0.hubble_time();
//! assert!((t_hubble.gyr() - 13.87).abs() < 0.01);
//! ```
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use hifitime::Duration;
use serde::{Deserialize, Serialize};

use crate::constants::{KM_PER_MPC, SECONDS_PER_GYR, SECONDS_PER_JULIAN_YEAR, SECONDS_PER_MYR};
use crate::cosmo_errors::CosmoError;

/// Expansion rate, stored in km/s/Mpc.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct HubbleConstant(f64);

impl HubbleConstant {
    pub fn from_km_s_mpc(value: f64) -> Self {
        HubbleConstant(value)
    }

    /// Build from a rate expressed in s⁻¹.
    pub fn from_per_second(value: f64) -> Self {
        HubbleConstant(value * KM_PER_MPC)
    }

    pub fn km_s_mpc(&self) -> f64 {
        self.0
    }

    /// Rate in s⁻¹ (km/s/Mpc divided by the number of km in a Mpc).
    pub fn per_second(&self) -> f64 {
        self.0 / KM_PER_MPC
    }

    /// Rate in Myr⁻¹.
    pub fn per_myr(&self) -> f64 {
        self.per_second() * SECONDS_PER_MYR
    }

    /// The Hubble time `1/H`.
    pub fn hubble_time(&self) -> CosmicAge {
        CosmicAge::from_seconds(1.0 / self.per_second())
    }
}

impl Mul<f64> for HubbleConstant {
    type Output = HubbleConstant;

    fn mul(self, rhs: f64) -> Self::Output {
        HubbleConstant(self.0 * rhs)
    }
}

impl fmt::Display for HubbleConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km/s/Mpc", self.0)
    }
}

/// Cosmic time since the start of the expansion, stored in seconds.
///
/// Displayed in Myr, the natural unit for ages of galaxies and of the universe.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct CosmicAge(f64);

impl CosmicAge {
    pub fn from_seconds(seconds: f64) -> Self {
        CosmicAge(seconds)
    }

    pub fn from_years(years: f64) -> Self {
        CosmicAge(years * SECONDS_PER_JULIAN_YEAR)
    }

    pub fn from_myr(myr: f64) -> Self {
        CosmicAge(myr * SECONDS_PER_MYR)
    }

    pub fn from_gyr(gyr: f64) -> Self {
        CosmicAge(gyr * SECONDS_PER_GYR)
    }

    pub fn seconds(&self) -> f64 {
        self.0
    }

    pub fn years(&self) -> f64 {
        self.0 / SECONDS_PER_JULIAN_YEAR
    }

    pub fn myr(&self) -> f64 {
        self.0 / SECONDS_PER_MYR
    }

    pub fn gyr(&self) -> f64 {
        self.0 / SECONDS_PER_GYR
    }

    /// Convert to a [`hifitime::Duration`].
    ///
    /// hifitime stores durations on a signed 16-bit count of centuries, so only ages within
    /// roughly ±3.27 Myr are representable (e.g. recombination at ~0.38 Myr). The present
    /// age of the universe is not.
    ///
    /// Return
    /// ----------
    /// * The equivalent `Duration`, or [`CosmoError::AgeOutOfDurationRange`] if the age is
    ///   not finite or exceeds [`Duration::MAX`].
    pub fn to_duration(&self) -> Result<Duration, CosmoError> {
        if !self.0.is_finite() || self.0.abs() > Duration::MAX.to_seconds() {
            return Err(CosmoError::AgeOutOfDurationRange(self.0));
        }
        Ok(Duration::from_seconds(self.0))
    }
}

impl From<Duration> for CosmicAge {
    fn from(duration: Duration) -> Self {
        CosmicAge(duration.to_seconds())
    }
}

impl Add for CosmicAge {
    type Output = CosmicAge;

    fn add(self, rhs: Self) -> Self::Output {
        CosmicAge(self.0 + rhs.0)
    }
}

impl Sub for CosmicAge {
    type Output = CosmicAge;

    fn sub(self, rhs: Self) -> Self::Output {
        CosmicAge(self.0 - rhs.0)
    }
}

impl Mul<f64> for CosmicAge {
    type Output = CosmicAge;

    fn mul(self, rhs: f64) -> Self::Output {
        CosmicAge(self.0 * rhs)
    }
}

impl Div<f64> for CosmicAge {
    type Output = CosmicAge;

    fn div(self, rhs: f64) -> Self::Output {
        CosmicAge(self.0 / rhs)
    }
}

/// Dimensionless product `age · H`, i.e. the age expressed in Hubble times.
impl Mul<HubbleConstant> for CosmicAge {
    type Output = f64;

    fn mul(self, rhs: HubbleConstant) -> Self::Output {
        self.0 * rhs.per_second()
    }
}

impl fmt::Display for CosmicAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} Myr", p, self.myr()),
            None => write!(f, "{} Myr", self.myr()),
        }
    }
}
