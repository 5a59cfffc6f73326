//! Closed-form expressions derived from the Friedmann equation.
//!
//! With time measured in Hubble times (`τ = H0·t`), the Friedmann equation for a
//! universe of matter, radiation, curvature and a cosmological constant reads
//!
//! ```text
//! (da/dτ)² = Ω_m/a + Ω_R/a² + Ω_Λ·a² + Ω_K
//! ```
//!
//! so that `dτ/da = a / sqrt(R(a))` with the radicand
//! `R(a) = Ω_m·a + Ω_R + Ω_Λ·a⁴ + Ω_K·a²`.
use crate::constants::ScaleFactor;
use crate::cosmo_errors::CosmoError;

/// The four density components entering the Friedmann equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FriedmannModel {
    pub omega_m: f64,
    pub omega_r: f64,
    pub omega_l: f64,
    pub omega_k: f64,
}

impl FriedmannModel {
    /// `R(a) = Ω_m·a + Ω_R + Ω_Λ·a⁴ + Ω_K·a²`, i.e. `a²·(da/dτ)²`.
    #[inline]
    pub fn radicand(&self, a: ScaleFactor) -> f64 {
        self.omega_m * a + self.omega_r + self.omega_l * a.powi(4) + self.omega_k * a.powi(2)
    }

    /// Integrand `dτ/da = a / sqrt(R(a))` of the age integral.
    ///
    /// At `a = 0` the value is [`FriedmannModel::integrand_at_origin`].
    #[inline]
    pub fn inv_friedmann_integrand(&self, a: ScaleFactor) -> f64 {
        if a == 0.0 {
            return self.integrand_at_origin();
        }
        a / self.radicand(a).sqrt()
    }

    /// Limit of `a / sqrt(R(a))` as `a → 0⁺`.
    ///
    /// * `0` when radiation or matter dominates the early expansion (`Ω_R > 0` or `Ω_m > 0`),
    /// * `1/sqrt(Ω_K)` for a curvature-dominated start (`Ω_R = Ω_m = 0`, `Ω_K > 0`, Milne-like),
    /// * `+∞` when `Ω_R = Ω_m = Ω_K = 0`: there is no Big Bang and the age integral diverges,
    /// * `NaN` otherwise (the radicand turns negative next to the origin).
    pub fn integrand_at_origin(&self) -> f64 {
        if self.omega_r > 0.0 || (self.omega_r == 0.0 && self.omega_m > 0.0) {
            0.0
        } else if self.omega_r == 0.0 && self.omega_m == 0.0 {
            if self.omega_k > 0.0 {
                1.0 / self.omega_k.sqrt()
            } else if self.omega_k == 0.0 {
                f64::INFINITY
            } else {
                f64::NAN
            }
        } else {
            f64::NAN
        }
    }

    /// `da/dτ = sqrt(Ω_m/a + Ω_R/a² + Ω_Λ·a² + Ω_K)`.
    pub fn dadtau(&self, a: ScaleFactor) -> f64 {
        (self.omega_m / a + self.omega_r / a.powi(2) + self.omega_l * a.powi(2) + self.omega_k)
            .sqrt()
    }

    /// `d²a/dτ² = −½·Ω_m/a² − Ω_R/a³ + Ω_Λ·a`.
    ///
    /// The curvature term is constant in `(da/dτ)²` and drops out.
    pub fn d2adtau2(&self, a: ScaleFactor) -> f64 {
        -0.5 * self.omega_m / a.powi(2) - self.omega_r / a.powi(3) + self.omega_l * a
    }

    /// Fail with [`CosmoError::DomainError`] if `R(a)` is negative (or NaN) at `a`.
    pub fn check_radicand(&self, a: ScaleFactor) -> Result<(), CosmoError> {
        let radicand = self.radicand(a);
        if radicand >= 0.0 {
            Ok(())
        } else {
            Err(CosmoError::DomainError { a, radicand })
        }
    }
}

#[cfg(test)]
mod friedmann_test {
    use super::*;
    use approx::assert_relative_eq;

    const LCDM: FriedmannModel = FriedmannModel {
        omega_m: 0.3,
        omega_r: 1e-4,
        omega_l: 0.7,
        omega_k: -1e-4,
    };

    #[test]
    fn test_integrand_is_inverse_expansion_rate() {
        for a in [0.01, 0.2, 0.5, 1.0, 2.0] {
            assert_relative_eq!(
                LCDM.inv_friedmann_integrand(a) * LCDM.dadtau(a),
                1.0,
                max_relative = 1e-13
            );
        }
        // H(a=1) = H0 when the densities sum to one
        assert_relative_eq!(LCDM.dadtau(1.0), 1.0, max_relative = 1e-15);
    }

    #[test]
    fn test_integrand_at_origin() {
        let eds = FriedmannModel {
            omega_m: 1.0,
            omega_r: 0.0,
            omega_l: 0.0,
            omega_k: 0.0,
        };
        assert_eq!(eds.inv_friedmann_integrand(0.0), 0.0);
        assert_eq!(LCDM.inv_friedmann_integrand(0.0), 0.0);

        let milne = FriedmannModel {
            omega_m: 0.0,
            omega_r: 0.0,
            omega_l: 0.0,
            omega_k: 4.0,
        };
        assert_eq!(milne.inv_friedmann_integrand(0.0), 0.5);
        assert_eq!(milne.inv_friedmann_integrand(1e-9), 0.5);

        let de_sitter = FriedmannModel {
            omega_m: 0.0,
            omega_r: 0.0,
            omega_l: 1.0,
            omega_k: 0.0,
        };
        assert_eq!(de_sitter.integrand_at_origin(), f64::INFINITY);

        let negative_matter = FriedmannModel {
            omega_m: -0.4,
            omega_r: 0.0,
            omega_l: 0.0,
            omega_k: 0.7,
        };
        assert!(negative_matter.integrand_at_origin().is_nan());
    }

    #[test]
    fn test_acceleration_matches_numerical_derivative() {
        // d²a/dτ² = d(da/dτ)/da · da/dτ
        let a = 0.6;
        let h = 1e-6;
        let slope = (LCDM.dadtau(a + h) - LCDM.dadtau(a - h)) / (2.0 * h);
        assert_relative_eq!(
            LCDM.d2adtau2(a),
            slope * LCDM.dadtau(a),
            max_relative = 1e-7
        );
    }

    #[test]
    fn test_check_radicand() {
        let open_negative = FriedmannModel {
            omega_m: -0.4,
            omega_r: 0.0,
            omega_l: 0.0,
            omega_k: 0.7,
        };
        assert!(LCDM.check_radicand(0.5).is_ok());
        assert_eq!(
            open_negative.check_radicand(0.25),
            Err(CosmoError::DomainError {
                a: 0.25,
                radicand: -0.4 * 0.25 + 0.7 * 0.0625
            })
        );
    }
}
