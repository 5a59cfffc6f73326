//! # Table-driven interpolation
//!
//! Generic, cosmology-agnostic interpolation machinery:
//!
//! - [`bin_search`] – bisection search of a query value in a monotone table,
//! - [`hermite`] – cubic Hermite evaluation from tabulated values and derivatives,
//! - [`Interpolator`] – the capability shared by every lookup (`evaluate(x) -> y`).
//!
//! Nothing here knows about density parameters or physical units, so any numeric
//! consumer can tabulate a function once and query it cheaply afterwards.
//!
//! ## Example
//!
//! ```rust
//! use cosmotime::interpolation::{hermite::HermiteLookup, Interpolator};
//!
//! let x = vec![0.0, 1.0, 2.0];
//! let y = vec![0.0, 1.0, 4.0];
//! let dydx = vec![0.0, 2.0, 4.0];
//! let square = HermiteLookup::new(x, y, dydx).unwrap();
//!
//! assert!((square.evaluate(1.5) - 2.25).abs() < 1e-12);
//! ```
pub mod bin_search;
pub mod hermite;

/// A function tabulated over a bounded domain.
pub trait Interpolator {
    /// Estimate `y(x)`.
    fn evaluate(&self, x: f64) -> f64;

    /// The tabulated range `(first abscissa, last abscissa)`.
    fn domain(&self) -> (f64, f64);

    /// Evaluate every point of `xs`, in order.
    fn evaluate_all(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }
}
