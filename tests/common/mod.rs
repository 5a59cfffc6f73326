use cosmotime::cosmology::{params::CosmologyParams, Cosmology};

/// Build a cosmology from densities `(omega, omega_l, omega_k, omega_r)`, default `h`.
pub fn cosmology(omega: f64, omega_l: f64, omega_k: f64, omega_r: f64, n: usize) -> Cosmology {
    let params = CosmologyParams::builder()
        .omega(omega)
        .omega_l(omega_l)
        .omega_k(omega_k)
        .omega_r(omega_r)
        .n(n)
        .build()
        .unwrap();
    Cosmology::new(params).unwrap()
}

pub fn wmap5() -> Cosmology {
    Cosmology::new(CosmologyParams::default()).unwrap()
}

/// Assert that `values` never decreases.
pub fn assert_non_decreasing(values: &[f64]) {
    for (i, w) in values.windows(2).enumerate() {
        assert!(
            w[1] >= w[0],
            "sequence decreases at index {}: {} -> {}",
            i + 1,
            w[0],
            w[1]
        );
    }
}
