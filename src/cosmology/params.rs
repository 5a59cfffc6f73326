//! # Cosmological parameters
//!
//! This module defines [`CosmologyParams`], the complete configuration surface of a
//! [`Cosmology`](crate::cosmology::Cosmology), and its validating builder.
//!
//! ## Parameters
//!
//! | field     | meaning                                         | default    |
//! |-----------|-------------------------------------------------|------------|
//! | `omega`   | total density parameter Ω                       | `1.0`      |
//! | `omega_l` | cosmological constant Ω_Λ                       | `0.726`    |
//! | `omega_k` | curvature Ω_K                                   | `0.0`      |
//! | `omega_r` | radiation Ω_R                                   | `8.37e-5`  |
//! | `h`       | dimensionless Hubble constant, `H0 = 100·h`     | `0.705`    |
//! | `sigma8`  | fluctuation amplitude (stored, not used)        | `0.812`    |
//! | `n`       | number of integration steps of the lookup table | `1000`     |
//!
//! The matter density is not a parameter: it is derived as
//! `Ω_m = Ω − (Ω_K + Ω_R + Ω_Λ)`.
//!
//! Defaults are the WMAP 5-year + BAO + SN fit of Hinshaw et al. (2008).
//!
//! ## Example
//!
//! ```rust
//! use cosmotime::cosmology::params::CosmologyParams;
//!
//! let eds = CosmologyParams::builder()
//!     .omega_l(0.0)
//!     .omega_r(0.0)
//!     .n(500)
//!     .build()
//!     .unwrap();
//! assert_eq!(eds.omega_m(), 1.0);
//! ```
//!
//! The struct is `serde`-enabled with field-level defaults, so partial configuration
//! documents are completed with the WMAP5 values.
use std::cmp::Ordering::Greater;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_H, DEFAULT_OMEGA, DEFAULT_OMEGA_K, DEFAULT_OMEGA_L, DEFAULT_OMEGA_R, DEFAULT_SIGMA8,
    DEFAULT_TABLE_STEPS, HUBBLE_UNIT_KM_S_MPC,
};
use crate::cosmo_errors::CosmoError;
use crate::units::HubbleConstant;

/// Density parameters, Hubble constant and table resolution of an FLRW cosmology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CosmologyParams {
    pub omega: f64,
    pub omega_l: f64,
    pub omega_k: f64,
    pub omega_r: f64,
    pub h: f64,
    pub sigma8: f64,
    /// Number of Simpson steps; the tables hold `n + 1` samples.
    pub n: usize,
}

impl CosmologyParams {
    /// Create a [`CosmologyParamsBuilder`] initialized with the default values.
    pub fn builder() -> CosmologyParamsBuilder {
        CosmologyParamsBuilder::new()
    }

    /// Matter density parameter `Ω − (Ω_K + Ω_R + Ω_Λ)`.
    pub fn omega_m(&self) -> f64 {
        self.omega - (self.omega_k + self.omega_r + self.omega_l)
    }

    /// Present-day Hubble constant `100·h` km/s/Mpc.
    pub fn hubble0(&self) -> HubbleConstant {
        HubbleConstant::from_km_s_mpc(HUBBLE_UNIT_KM_S_MPC * self.h)
    }

    /// Check the values a builder would reject.
    ///
    /// Used by [`CosmologyParamsBuilder::build`] and again by
    /// [`Cosmology::new`](crate::cosmology::Cosmology::new), since the fields are public
    /// and may have been set (or deserialized) without going through the builder.
    ///
    /// Return
    /// ----------
    /// * `Ok(())`, or [`CosmoError::ConfigurationError`] describing the first failed rule.
    pub fn validate(&self) -> Result<(), CosmoError> {
        let densities = [
            ("omega", self.omega),
            ("omega_l", self.omega_l),
            ("omega_k", self.omega_k),
            ("omega_r", self.omega_r),
            ("sigma8", self.sigma8),
        ];
        if let Some((name, value)) = densities.iter().find(|(_, v)| !v.is_finite()) {
            return Err(CosmoError::ConfigurationError(format!(
                "{name} must be finite, got {value}"
            )));
        }
        if !(self.h.is_finite() && self.h.partial_cmp(&0.0) == Some(Greater)) {
            return Err(CosmoError::ConfigurationError(format!(
                "h must be finite and > 0, got {}",
                self.h
            )));
        }
        if self.n == 0 {
            return Err(CosmoError::ConfigurationError(
                "n must be >= 1 (the table needs at least 2 samples)".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CosmologyParams {
    fn default() -> Self {
        CosmologyParams {
            omega: DEFAULT_OMEGA,
            omega_l: DEFAULT_OMEGA_L,
            omega_k: DEFAULT_OMEGA_K,
            omega_r: DEFAULT_OMEGA_R,
            h: DEFAULT_H,
            sigma8: DEFAULT_SIGMA8,
            n: DEFAULT_TABLE_STEPS,
        }
    }
}

/// Builder for [`CosmologyParams`], with validation.
#[derive(Debug, Clone, Default)]
pub struct CosmologyParamsBuilder {
    params: CosmologyParams,
}

impl CosmologyParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: CosmologyParams::default(),
        }
    }

    // --- Densities ---
    pub fn omega(mut self, v: f64) -> Self {
        self.params.omega = v;
        self
    }
    pub fn omega_l(mut self, v: f64) -> Self {
        self.params.omega_l = v;
        self
    }
    pub fn omega_k(mut self, v: f64) -> Self {
        self.params.omega_k = v;
        self
    }
    pub fn omega_r(mut self, v: f64) -> Self {
        self.params.omega_r = v;
        self
    }

    // --- Expansion / structure ---
    pub fn h(mut self, v: f64) -> Self {
        self.params.h = v;
        self
    }
    pub fn sigma8(mut self, v: f64) -> Self {
        self.params.sigma8 = v;
        self
    }

    // --- Numerics ---
    pub fn n(mut self, v: usize) -> Self {
        self.params.n = v;
        self
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// -----------------
    /// * every density parameter and `sigma8` is finite,
    /// * `h` is finite and strictly positive,
    /// * `n >= 1`.
    ///
    /// Physical consistency (a non-negative Friedmann radicand over `a ∈ [0, 1]`) depends on
    /// the sampling and is checked when the [`Cosmology`](crate::cosmology::Cosmology) is built.
    pub fn build(self) -> Result<CosmologyParams, CosmoError> {
        self.params.validate()?;
        Ok(self.params)
    }
}
