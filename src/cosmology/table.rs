//! Numerical integration of the age integral `τ(a) = ∫₀ᵃ dτ/da' da'`.
//!
//! The integral is accumulated with a three-point Simpson rule on each interval of a
//! quadratic grid `a_i = (i/n)²`, which packs samples near `a = 0` where the integrand
//! changes fastest. The spacing is part of the numerical contract of the lookup tables
//! and must not be changed.
use itertools::Itertools;

use super::friedmann::FriedmannModel;
use crate::constants::{HubbleTime, ScaleFactor};
use crate::cosmo_errors::CosmoError;

/// Samples of `(a, τ, dτ/da, da/dτ)` produced by [`AgeTable::integrate`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AgeTable {
    pub a: Vec<ScaleFactor>,
    pub tau: Vec<HubbleTime>,
    pub dtau_da: Vec<f64>,
    pub da_dtau: Vec<f64>,
}

/// Quadratically spaced scale factors `(i/n)²` for `i = 0..=n`.
pub(crate) fn quadratic_grid(n: usize) -> Vec<ScaleFactor> {
    (0..=n).map(|i| (i as f64 / n as f64).powi(2)).collect()
}

impl AgeTable {
    /// Integrate the Friedmann equation on `n` Simpson steps.
    ///
    /// Sample 0 is `(0, 0, f₀, 1/f₀)` with `f₀` the limit of `dτ/da` at the origin
    /// ([`FriedmannModel::integrand_at_origin`]). When `f₀ = 0` the `da/dτ` entry is seeded
    /// with `0`, the true limit being infinite.
    ///
    /// Return
    /// ----------
    /// * [`CosmoError::DomainError`] if the radicand is negative at a sample or midpoint.
    /// * [`CosmoError::ConfigurationError`] if the age integral diverges at `a = 0`
    ///   (no matter, radiation or positive curvature), if the expansion stalls (`dτ/da` zero or not
    ///   finite at some `a > 0`) or the accumulated time is not finite.
    pub fn integrate(model: &FriedmannModel, n: usize) -> Result<Self, CosmoError> {
        let a = quadratic_grid(n);

        let mut tau = Vec::with_capacity(n + 1);
        let mut dtau_da = Vec::with_capacity(n + 1);
        let mut da_dtau = Vec::with_capacity(n + 1);
        model.check_radicand(a[0])?;
        let f0 = model.integrand_at_origin();
        if f0 == f64::INFINITY {
            return Err(CosmoError::ConfigurationError(
                "age integral diverges at a = 0 (omega_m = omega_r = omega_k = 0: no Big Bang)"
                    .into(),
            ));
        }

        tau.push(0.0);
        dtau_da.push(f0);
        da_dtau.push(if f0 > 0.0 { 1.0 / f0 } else { 0.0 });

        let mut t = 0.0;
        for (&a_prev, &a_next) in a.iter().tuple_windows() {
            let mid = (a_prev + a_next) / 2.0;
            model.check_radicand(mid)?;
            model.check_radicand(a_next)?;

            let f_next = model.inv_friedmann_integrand(a_next);
            t += (f_next
                + model.inv_friedmann_integrand(a_prev)
                + 4.0 * model.inv_friedmann_integrand(mid))
                * (a_next - a_prev)
                / 6.0;

            if !(f_next.is_finite() && f_next != 0.0) || !t.is_finite() {
                return Err(CosmoError::ConfigurationError(format!(
                    "expansion rate stalls at a = {a_next} (dtau/da = {f_next}, tau = {t})"
                )));
            }

            tau.push(t);
            dtau_da.push(f_next);
            da_dtau.push(1.0 / f_next);
        }

        log::trace!(
            "integrated {} Simpson steps, tau(a = 1) = {}",
            n,
            tau.last().copied().unwrap_or_default()
        );

        Ok(AgeTable {
            a,
            tau,
            dtau_da,
            da_dtau,
        })
    }
}

#[cfg(test)]
mod table_test {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const EDS: FriedmannModel = FriedmannModel {
        omega_m: 1.0,
        omega_r: 0.0,
        omega_l: 0.0,
        omega_k: 0.0,
    };

    #[test]
    fn test_quadratic_grid() {
        let grid = quadratic_grid(4);
        assert_eq!(grid, vec![0.0, 0.0625, 0.25, 0.5625, 1.0]);
    }

    #[test]
    fn test_einstein_de_sitter_table() {
        // τ(a) = (2/3)·a^(3/2)
        let table = AgeTable::integrate(&EDS, 200).unwrap();
        assert_eq!(table.a.len(), 201);
        assert_eq!(table.tau[0], 0.0);
        assert_eq!(table.da_dtau[0], 0.0);
        // Simpson is poor on √a next to the origin: absolute error only
        for (a, tau) in table.a.iter().zip(&table.tau) {
            assert_abs_diff_eq!(*tau, 2.0 / 3.0 * a.powf(1.5), epsilon = 1e-8);
        }
        for (f, g) in table.dtau_da.iter().zip(&table.da_dtau).skip(1) {
            assert_relative_eq!(f * g, 1.0, max_relative = 1e-15);
        }
    }

    #[test]
    fn test_milne_table_is_linear() {
        // Ω_K = 1 alone: da/dτ = 1, so τ(a) = a and the a = 0 row carries slope 1
        let milne = FriedmannModel {
            omega_m: 0.0,
            omega_r: 0.0,
            omega_l: 0.0,
            omega_k: 1.0,
        };
        let table = AgeTable::integrate(&milne, 100).unwrap();
        assert_eq!(table.dtau_da[0], 1.0);
        assert_eq!(table.da_dtau[0], 1.0);
        for (a, tau) in table.a.iter().zip(&table.tau) {
            assert_relative_eq!(*tau, *a, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_divergent_age_is_rejected() {
        let de_sitter = FriedmannModel {
            omega_m: 0.0,
            omega_r: 0.0,
            omega_l: 1.0,
            omega_k: 0.0,
        };
        assert!(matches!(
            AgeTable::integrate(&de_sitter, 100),
            Err(CosmoError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_negative_radicand_is_rejected() {
        let model = FriedmannModel {
            omega_m: -0.4,
            omega_r: 0.0,
            omega_l: 0.0,
            omega_k: 0.7,
        };
        assert!(matches!(
            AgeTable::integrate(&model, 100),
            Err(CosmoError::DomainError { .. })
        ));
    }

    #[test]
    fn test_stalled_expansion_is_rejected() {
        // Radiation-free, matter-free and curvature-free with Ω_Λ = 0: R(a) = 0 everywhere
        let empty = FriedmannModel {
            omega_m: 0.0,
            omega_r: 0.0,
            omega_l: 0.0,
            omega_k: 0.0,
        };
        assert!(matches!(
            AgeTable::integrate(&empty, 10),
            Err(CosmoError::ConfigurationError(_))
        ));
    }
}
