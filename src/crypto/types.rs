use super::{NtruError, NtruParams, NtruResult};
use crate::rings::Poly;

/// A message polynomial with coefficients in `[-floor(p/2), floor(p/2)]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plaintext {
    poly: Poly,
}

/// A ciphertext polynomial with coefficients in `[0, q)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    poly: Poly,
}

impl Plaintext {
    pub fn new(poly: Poly, params: &NtruParams) -> NtruResult<Self> {
        if !params.is_message(&poly) {
            let bound = params.message_bound();
            return Err(NtruError::parameter(format!(
                "plaintext must have degree < {} and coefficients in [-{bound}, {bound}]",
                params.n()
            )));
        }
        Ok(Self::from_trusted(poly))
    }

    pub(crate) fn from_trusted(poly: Poly) -> Self {
        Self {
            poly: poly.truncate_zeros(),
        }
    }

    pub fn poly(&self) -> &Poly {
        &self.poly
    }

    pub fn into_poly(self) -> Poly {
        self.poly
    }
}

impl Ciphertext {
    pub fn new(poly: Poly, params: &NtruParams) -> NtruResult<Self> {
        if !params.is_reduced_mod_q(&poly) {
            return Err(NtruError::parameter(format!(
                "ciphertext must have degree < {} and coefficients in [0, {})",
                params.n(),
                params.q()
            )));
        }
        Ok(Self::from_trusted(poly))
    }

    pub(crate) fn from_trusted(poly: Poly) -> Self {
        Self {
            poly: poly.truncate_zeros(),
        }
    }

    pub fn poly(&self) -> &Poly {
        &self.poly
    }

    pub fn into_poly(self) -> Poly {
        self.poly
    }
}
