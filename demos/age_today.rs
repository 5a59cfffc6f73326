use std::env;

use cosmotime::cosmo_errors::CosmoError;
use cosmotime::cosmology::{params::CosmologyParams, Cosmology};

/// Print the present age of the universe, its round trip through the inverse table,
/// and the age at a few redshifts.
///
/// Usage:
///   age_today [N_STEPS]
/// Example:
///   RUST_LOG=debug cargo run --example age_today -- 2000
fn main() -> Result<(), CosmoError> {
    env_logger::init();

    let n = env::args()
        .nth(1)
        .map(|arg| {
            arg.parse::<usize>()
                .map_err(|e| CosmoError::ConfigurationError(format!("N_STEPS '{arg}': {e}")))
        })
        .transpose()?;

    let mut builder = CosmologyParams::builder();
    if let Some(n) = n {
        builder = builder.n(n);
    }
    let cosmo = Cosmology::new(builder.build()?)?;

    let today = cosmo.age_today();
    println!("age today      : {today:.3}");
    println!("a(age today)   : {}", cosmo.a_from_age(today));
    println!("Hubble time    : {:.3}", cosmo.hubble_time());
    println!();
    println!("{:>8}  {:>12}", "z", "age [Myr]");
    for z in [0.0, 0.5, 1.0, 2.0, 6.0, 20.0, 1100.0] {
        println!("{z:>8}  {:>12.3}", cosmo.age_from_z(z).myr());
    }
    Ok(())
}
