use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RingError {
    #[error("polynomial is not normalized: leading coefficient must be non-zero")]
    InvalidPolynomial,
    #[error("coefficient {value} has no inverse modulo {modulus}")]
    NotInvertible { value: i64, modulus: i64 },
    #[error("polynomials are not coprime modulo {modulus}")]
    NotCoprime { modulus: i64 },
    #[error("invalid prime power {base}^{exponent}")]
    InvalidExponent { base: i64, exponent: u32 },
}

pub type RingResult<T> = Result<T, RingError>;
