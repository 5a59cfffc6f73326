//! # FLRW cosmology: scale factor ↔ cosmic time
//!
//! This module defines [`Cosmology`], which turns a set of density parameters into a pair of
//! mutually inverse lookup tables between the scale factor `a` and the cosmic time `τ`
//! (in Hubble times), and answers point queries on them.
//!
//! ## Construction
//!
//! [`Cosmology::new`] runs eagerly and only once:
//!
//! 1. validate the [`CosmologyParams`],
//! 2. integrate `dτ/da = a / sqrt(Ω_m·a + Ω_R + Ω_Λ·a⁴ + Ω_K·a²)` with Simpson's rule on the
//!    quadratic grid `a_i = (i/n)²`,
//! 3. build `age_lookup` over `(a, τ, dτ/da)` and `a_lookup` over `(τ, a, da/dτ)`.
//!
//! Both lookups are built from the **same samples**; `a_lookup` is not obtained by numerically
//! inverting `age_lookup`, so a round trip is consistent only up to interpolation error.
//!
//! ## Queries
//!
//! Every query is an `O(log n)` bisection plus an `O(1)` cubic; nothing is integrated again.
//! Queries outside the tabulated range clamp to the first/last sample.
//!
//! | method                         | returns                                |
//! |--------------------------------|----------------------------------------|
//! | [`Cosmology::age_from_a`]      | age at scale factor `a` ([`CosmicAge`])|
//! | [`Cosmology::tau_from_a`]      | age in Hubble times                    |
//! | [`Cosmology::a_from_age`]      | scale factor at a given age            |
//! | [`Cosmology::a_from_tau`]      | scale factor at `τ` Hubble times       |
//! | [`Cosmology::age_from_z`]      | age at redshift `z`                    |
//! | [`Cosmology::tau_from_z`]      | age at redshift `z`, Hubble times      |
//! | [`Cosmology::hubble`]          | `H(a)`, closed form                    |
//! | [`Cosmology::d2adtau2`]        | `d²a/dτ²`, closed form                 |
//!
//! ## Example
//!
//! ```rust
//! use cosmotime::cosmology::{params::CosmologyParams, Cosmology};
//!
//! let cosmo = Cosmology::new(CosmologyParams::default()).unwrap();
//!
//! let today = cosmo.age_from_a(1.0);
//! assert!((today.gyr() - 13.71).abs() < 0.01);
//! assert!((cosmo.a_from_age(today) - 1.0).abs() < 1e-3);
//! ```
//!
//! ## Concurrency
//!
//! A [`Cosmology`] never mutates after construction and is `Send + Sync`: share it behind a
//! reference or an `Arc` and query it from any number of threads.
pub mod friedmann;
pub mod params;
pub(crate) mod table;

use crate::constants::{HubbleTime, Redshift, ScaleFactor};
use crate::cosmo_errors::CosmoError;
use crate::interpolation::{hermite::HermiteLookup, Interpolator};
use crate::units::{CosmicAge, HubbleConstant};

use friedmann::FriedmannModel;
use params::CosmologyParams;
use table::AgeTable;

/// Scale factor at redshift `z`: `a = 1/(1+z)`.
pub fn scale_factor_from_redshift(z: Redshift) -> ScaleFactor {
    1.0 / (z + 1.0)
}

/// Redshift at scale factor `a`: `z = 1/a − 1`.
pub fn redshift_from_scale_factor(a: ScaleFactor) -> Redshift {
    1.0 / a - 1.0
}

/// An FLRW cosmology with precomputed age ↔ scale-factor tables.
///
/// Fields
/// -----------------
/// * `params` – the configuration the model was built from.
/// * `model` – density parameters, including the derived `Ω_m`.
/// * `hubble0` – present-day Hubble constant `100·h` km/s/Mpc.
/// * `age_lookup` – `τ(a)` over `a ∈ [0, 1]`.
/// * `a_lookup` – `a(τ)` over `τ ∈ [0, τ(1)]`.
#[derive(Debug, Clone)]
pub struct Cosmology {
    params: CosmologyParams,
    model: FriedmannModel,
    hubble0: HubbleConstant,
    age_lookup: HermiteLookup,
    a_lookup: HermiteLookup,
}

impl Cosmology {
    /// Build the cosmology and its lookup tables.
    ///
    /// Arguments
    /// -----------------
    /// * `params`: density parameters, Hubble constant and table resolution `n`.
    ///
    /// Return
    /// ----------
    /// * The model, or:
    ///   - [`CosmoError::ConfigurationError`] for invalid parameters (`n = 0`, `h <= 0`,
    ///     non-finite values), an age integral that diverges at `a = 0`
    ///     (`Ω_m = Ω_R = Ω_K = 0`) or an expansion rate that vanishes at some `a > 0`,
    ///   - [`CosmoError::DomainError`] if `Ω_m·a + Ω_R + Ω_Λ·a⁴ + Ω_K·a²` is negative at a
    ///     sampled scale factor.
    pub fn new(params: CosmologyParams) -> Result<Self, CosmoError> {
        params.validate()?;

        let model = FriedmannModel {
            omega_m: params.omega_m(),
            omega_r: params.omega_r,
            omega_l: params.omega_l,
            omega_k: params.omega_k,
        };
        if model.omega_m < 0.0 {
            log::warn!(
                "negative matter density omega_m = {} (omega = {}, omega_k = {}, omega_r = {}, omega_l = {})",
                model.omega_m,
                params.omega,
                params.omega_k,
                params.omega_r,
                params.omega_l
            );
        }

        let table = AgeTable::integrate(&model, params.n)?;
        let age_lookup =
            HermiteLookup::new(table.a.clone(), table.tau.clone(), table.dtau_da)?;
        let a_lookup = HermiteLookup::new(table.tau, table.a, table.da_dtau)?;

        let hubble0 = params.hubble0();
        log::debug!(
            "built cosmology tables: n = {}, omega_m = {}, H0 = {}, tau(a = 1) = {}",
            params.n,
            model.omega_m,
            hubble0,
            age_lookup.evaluate(1.0)
        );

        Ok(Cosmology {
            params,
            model,
            hubble0,
            age_lookup,
            a_lookup,
        })
    }

    pub fn params(&self) -> &CosmologyParams {
        &self.params
    }

    pub fn omega_m(&self) -> f64 {
        self.model.omega_m
    }

    pub fn hubble0(&self) -> HubbleConstant {
        self.hubble0
    }

    /// `1/H0`, the unit of `τ`.
    pub fn hubble_time(&self) -> CosmicAge {
        self.hubble0.hubble_time()
    }

    /// `τ(a)` lookup, keyed by scale factor.
    pub fn age_lookup(&self) -> &HermiteLookup {
        &self.age_lookup
    }

    /// `a(τ)` lookup, keyed by cosmic time in Hubble times.
    pub fn a_lookup(&self) -> &HermiteLookup {
        &self.a_lookup
    }

    /// Hubble parameter `H(a) = H0 · (da/dτ) / a`.
    pub fn hubble(&self, a: ScaleFactor) -> HubbleConstant {
        self.hubble0 * (self.model.dadtau(a) / a)
    }

    /// `da/dτ` from the Friedmann equation (closed form).
    pub fn dadtau(&self, a: ScaleFactor) -> f64 {
        self.model.dadtau(a)
    }

    /// `d²a/dτ²` from the Friedmann equation (closed form).
    pub fn d2adtau2(&self, a: ScaleFactor) -> f64 {
        self.model.d2adtau2(a)
    }

    /// `dτ/da = a / sqrt(Ω_m·a + Ω_R + Ω_Λ·a⁴ + Ω_K·a²)`, the integrand of the age.
    pub fn inv_friedmann_integrand(&self, a: ScaleFactor) -> f64 {
        self.model.inv_friedmann_integrand(a)
    }

    /// Cosmic time at scale factor `a`.
    pub fn age_from_a(&self, a: ScaleFactor) -> CosmicAge {
        self.hubble_time() * self.tau_from_a(a)
    }

    /// Cosmic time at scale factor `a`, in Hubble times.
    pub fn tau_from_a(&self, a: ScaleFactor) -> HubbleTime {
        self.age_lookup.evaluate(a)
    }

    /// Scale factor at cosmic time `age`.
    pub fn a_from_age(&self, age: CosmicAge) -> ScaleFactor {
        self.a_from_tau(age * self.hubble0)
    }

    /// Scale factor at `tau` Hubble times.
    pub fn a_from_tau(&self, tau: HubbleTime) -> ScaleFactor {
        self.a_lookup.evaluate(tau)
    }

    pub fn age_from_z(&self, z: Redshift) -> CosmicAge {
        self.age_from_a(scale_factor_from_redshift(z))
    }

    pub fn tau_from_z(&self, z: Redshift) -> HubbleTime {
        self.tau_from_a(scale_factor_from_redshift(z))
    }

    /// Present age of the universe, `age_from_a(1)`.
    pub fn age_today(&self) -> CosmicAge {
        self.age_from_a(1.0)
    }
}
