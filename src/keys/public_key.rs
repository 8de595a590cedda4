//! Public key `h = p * fq * g mod q`.
use crate::crypto::operations::encrypt;
use crate::crypto::{NtruError, NtruParams, NtruResult};
use crate::rings::Poly;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    params: NtruParams,
    h: Poly,
}

impl PublicKey {
    /// Wraps a recorded public key. Every coefficient must lie in `[0, q)`
    /// and the degree must stay below `N`.
    pub fn from_h(h: Poly, params: &NtruParams) -> NtruResult<Self> {
        if !params.is_reduced_mod_q(&h) {
            return Err(NtruError::parameter(format!(
                "public key must have degree < {} and coefficients in [0, {})",
                params.n(),
                params.q()
            )));
        }
        Ok(Self::from_parts(*params, h.truncate_zeros()))
    }

    pub(crate) fn from_parts(params: NtruParams, h: Poly) -> Self {
        Self { params, h }
    }

    pub fn params(&self) -> &NtruParams {
        &self.params
    }

    pub fn h(&self) -> &Poly {
        &self.h
    }

    /// Encrypts a raw message polynomial under a fresh `(d, d)` blinding
    /// polynomial.
    pub fn encrypt<R: Rng + ?Sized>(&self, m: &Poly, rng: &mut R) -> NtruResult<Poly> {
        let (n, _, q, d) = self.params.as_tuple();
        encrypt(n, q, d, m, &self.h, rng)
    }
}
