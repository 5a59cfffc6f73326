//! # Constants and type definitions for cosmotime
//!
//! This module centralizes the **default cosmological parameters**, the **unit conversion
//! factors**, and the **type aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Default density parameters (WMAP 5-year + BAO + SN fit, Hinshaw et al. 2008)
//! - Unit conversions (Mpc ↔ km, Julian years ↔ seconds, Myr ↔ seconds)
//! - Dimensionless type aliases naming the quantities that flow through the lookup tables

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of days in a Julian year
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Number of seconds in a Julian year
pub const SECONDS_PER_JULIAN_YEAR: f64 = DAYS_PER_JULIAN_YEAR * SECONDS_PER_DAY;

/// Number of seconds in a megayear (10⁶ Julian years)
pub const SECONDS_PER_MYR: f64 = 1.0e6 * SECONDS_PER_JULIAN_YEAR;

/// Number of seconds in a gigayear (10⁹ Julian years)
pub const SECONDS_PER_GYR: f64 = 1.0e9 * SECONDS_PER_JULIAN_YEAR;

/// Parsec in kilometers (IAU 2015 Resolution B2)
pub const KM_PER_PC: f64 = 3.085_677_581_491_367_3e13;

/// Megaparsec in kilometers
pub const KM_PER_MPC: f64 = 1.0e6 * KM_PER_PC;

/// The Hubble constant is expressed as `100·h` km/s/Mpc
pub const HUBBLE_UNIT_KM_S_MPC: f64 = 100.0;

// -------------------------------------------------------------------------------------------------
// Default cosmology: WMAP5 + BAO + SN (Hinshaw et al. 2008)
// -------------------------------------------------------------------------------------------------

/// Total density parameter Ω
pub const DEFAULT_OMEGA: f64 = 1.0;

/// Cosmological constant density parameter Ω_Λ
pub const DEFAULT_OMEGA_L: f64 = 0.726;

/// Curvature density parameter Ω_K
pub const DEFAULT_OMEGA_K: f64 = 0.0;

/// Radiation density parameter Ω_R.
///
/// `4.165e-5 / h²`, three massless neutrino species, T₀ = 2.72528 K.
pub const DEFAULT_OMEGA_R: f64 = 8.37e-5;

/// Dimensionless Hubble parameter h
pub const DEFAULT_H: f64 = 0.705;

/// Amplitude of matter fluctuations on 8 h⁻¹ Mpc scales
pub const DEFAULT_SIGMA8: f64 = 0.812;

/// Number of integration steps used to build the lookup tables
pub const DEFAULT_TABLE_STEPS: usize = 1000;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Cosmic scale factor, `a = 1` today
pub type ScaleFactor = f64;
/// Cosmological redshift, `z = 1/a - 1`
pub type Redshift = f64;
/// Cosmic time in units of the Hubble time `1/H0`
pub type HubbleTime = f64;
