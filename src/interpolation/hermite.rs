//! Cubic Hermite lookup over a tabulated function.
//!
//! A [`HermiteLookup`] owns three parallel sequences `x`, `y` and `dy/dx` and evaluates
//! the piecewise cubic that matches both the tabulated values and the tabulated
//! derivatives at each end of every interval. The interpolant is therefore C¹ and
//! reproduces the samples exactly.
//!
//! Out-of-range queries are clamped to the first or last tabulated value; a zero-length
//! interval (duplicate abscissa) returns the mean of its two end values.
use itertools::Itertools;

use super::bin_search::{find_bin, Bracket};
use super::Interpolator;
use crate::cosmo_errors::CosmoError;

/// Table-driven cubic Hermite interpolator.
///
/// Fields
/// -----------------
/// * `x` — monotone abscissae (increasing or decreasing, duplicates allowed).
/// * `y` — tabulated values `y(x)`.
/// * `dydx` — tabulated derivatives `dy/dx` at each abscissa.
///
/// See also
/// -----------------
/// * [`find_bin`] – bracket search used by [`HermiteLookup::evaluate`](Interpolator::evaluate).
#[derive(Debug, Clone, PartialEq)]
pub struct HermiteLookup {
    x: Vec<f64>,
    y: Vec<f64>,
    dydx: Vec<f64>,
}

impl HermiteLookup {
    /// Build a lookup from its sample table.
    ///
    /// Arguments
    /// -----------------
    /// * `x`: monotone abscissae.
    /// * `y`: values at each abscissa.
    /// * `dydx`: derivatives at each abscissa.
    ///
    /// Return
    /// ----------
    /// * The lookup, or [`CosmoError::InvalidLookupTable`] if the three sequences differ in
    ///   length, hold fewer than two samples, or if `x` is not monotone.
    pub fn new(x: Vec<f64>, y: Vec<f64>, dydx: Vec<f64>) -> Result<Self, CosmoError> {
        if x.len() != y.len() || x.len() != dydx.len() {
            return Err(CosmoError::InvalidLookupTable(format!(
                "length mismatch: x = {}, y = {}, dydx = {}",
                x.len(),
                y.len(),
                dydx.len()
            )));
        }
        if x.len() < 2 {
            return Err(CosmoError::InvalidLookupTable(format!(
                "at least 2 samples are required, got {}",
                x.len()
            )));
        }

        let s = if x[0] >= x[x.len() - 1] { -1.0 } else { 1.0 };
        if let Some((i, _)) = x
            .iter()
            .tuple_windows()
            .enumerate()
            .find(|(_, (prev, next))| !(s * (*next - *prev) >= 0.0))
        {
            return Err(CosmoError::InvalidLookupTable(format!(
                "abscissae are not monotone at index {}",
                i + 1
            )));
        }

        Ok(HermiteLookup { x, y, dydx })
    }

    /// Evaluate the cubic of the interval designated by `bracket` at `x`.
    ///
    /// `bracket` is normally the result of [`find_bin`] on the abscissae of this table.
    /// Out-of-range brackets clamp to the first or last value.
    pub fn interpolate_cubic(&self, x: f64, bracket: Bracket) -> f64 {
        let b = match bracket {
            Bracket::Below | Bracket::Within(0) => return self.y[0],
            Bracket::Within(b) if b <= self.y.len() - 1 => b,
            _ => return self.y[self.y.len() - 1],
        };

        let dx = self.x[b] - self.x[b - 1];
        let dy = self.y[b] - self.y[b - 1];
        if dx == 0.0 {
            return (self.y[b - 1] + self.y[b]) / 2.0;
        }

        let y1 = self.y[b - 1];
        let yd1 = self.dydx[b - 1];
        let yd2 = self.dydx[b];
        let u = (x - self.x[b - 1]) / dx;

        u.powi(3) * (-2.0 * dy + dx * (yd1 + yd2))
            + u.powi(2) * (3.0 * dy - dx * (2.0 * yd1 + yd2))
            + dx * yd1 * u
            + y1
    }

    pub fn xs(&self) -> &[f64] {
        &self.x
    }

    pub fn ys(&self) -> &[f64] {
        &self.y
    }

    pub fn derivatives(&self) -> &[f64] {
        &self.dydx
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Never `true` for a constructed lookup, which holds at least two samples.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

impl Interpolator for HermiteLookup {
    fn evaluate(&self, x: f64) -> f64 {
        self.interpolate_cubic(x, find_bin(&self.x, x))
    }

    fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }
}
