use thiserror::Error;

#[derive(Error, Debug)]
pub enum CosmoError {
    #[error("Invalid cosmology configuration: {0}")]
    ConfigurationError(String),

    #[error("Negative Friedmann radicand {radicand:e} at scale factor a = {a}")]
    DomainError { a: f64, radicand: f64 },

    #[error("Invalid Hermite lookup table: {0}")]
    InvalidLookupTable(String),

    #[error("Cosmic age of {0} s cannot be represented as a hifitime Duration")]
    AgeOutOfDurationRange(f64),
}

impl PartialEq for CosmoError {
    fn eq(&self, other: &Self) -> bool {
        use CosmoError::*;
        match (self, other) {
            (ConfigurationError(a), ConfigurationError(b)) => a == b,
            (InvalidLookupTable(a), InvalidLookupTable(b)) => a == b,

            // bitwise so that NaN payloads compare equal to themselves
            (
                DomainError {
                    a: a1,
                    radicand: r1,
                },
                DomainError {
                    a: a2,
                    radicand: r2,
                },
            ) => a1.to_bits() == a2.to_bits() && r1.to_bits() == r2.to_bits(),
            (AgeOutOfDurationRange(a), AgeOutOfDurationRange(b)) => a.to_bits() == b.to_bits(),

            _ => false,
        }
    }
}

#[cfg(test)]
mod cosmo_errors_test {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CosmoError::DomainError {
            a: 0.25,
            radicand: -0.1,
        };
        assert_eq!(
            err.to_string(),
            "Negative Friedmann radicand -1e-1 at scale factor a = 0.25"
        );

        let err = CosmoError::ConfigurationError("n must be >= 1".into());
        assert_eq!(
            err.to_string(),
            "Invalid cosmology configuration: n must be >= 1"
        );
    }

    #[test]
    fn test_partial_eq_same_variant_only() {
        assert_eq!(
            CosmoError::InvalidLookupTable("x".into()),
            CosmoError::InvalidLookupTable("x".into())
        );
        assert_ne!(
            CosmoError::InvalidLookupTable("x".into()),
            CosmoError::ConfigurationError("x".into())
        );
        assert_eq!(
            CosmoError::AgeOutOfDurationRange(f64::NAN),
            CosmoError::AgeOutOfDurationRange(f64::NAN)
        );
    }
}
