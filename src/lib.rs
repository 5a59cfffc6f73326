//! # cosmotime
//!
//! Conversion between the cosmic scale factor `a` and cosmic time for flat or curved FLRW
//! cosmologies with matter, radiation and a cosmological constant.
//!
//! A [`Cosmology`](crate::cosmology::Cosmology) integrates the Friedmann equation once, at
//! construction, into a table of `(a, τ, dτ/da)` samples, then answers `age(a)`, `a(age)`,
//! `age(z)` and `a(τ)` by cubic Hermite interpolation on that table.
//!
//! ## Modules
//!
//! - [`cosmology`] – the cosmological model, its parameters and queries,
//! - [`interpolation`] – generic bisection search and Hermite lookup tables,
//! - [`units`] – `HubbleConstant` and `CosmicAge` unit-carrying values,
//! - [`constants`] – default parameters and unit conversion factors,
//! - [`cosmo_errors`] – the crate error type.
pub mod constants;
pub mod cosmo_errors;
pub mod cosmology;
pub mod interpolation;
pub mod units;
