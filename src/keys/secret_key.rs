//! Secret key: the ternary polynomial `f` with its cached inverse mod `p`.
use crate::crypto::operations::decrypt_with_fp;
use crate::crypto::{NtruError, NtruParams, NtruResult};
use crate::rings::{Poly, invert_mod_prime};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretKey {
    params: NtruParams,
    f: Poly,
    fp: Poly,
}

impl SecretKey {
    /// Wraps an existing secret, recomputing `fp = f^-1 mod p`.
    ///
    /// `f` must have the `(d, d - 1)` ternary shape for `params`; a shape
    /// violation is a [`NtruError::ParameterError`], and an `f` with no
    /// inverse modulo `p` surfaces as the underlying ring error.
    pub fn from_f(f: Poly, params: &NtruParams) -> NtruResult<Self> {
        if !params.is_secret_shape(&f) {
            return Err(NtruError::parameter(format!(
                "secret must be ternary of degree < {} with weights ({}, {})",
                params.n(),
                params.d(),
                params.d() - 1
            )));
        }
        let f = f.truncate_zeros();
        let fp = invert_mod_prime(&f, &params.ring_modulus(), params.p())?;
        Ok(Self::from_parts(*params, f, fp))
    }

    pub(crate) fn from_parts(params: NtruParams, f: Poly, fp: Poly) -> Self {
        Self { params, f, fp }
    }

    pub fn params(&self) -> &NtruParams {
        &self.params
    }

    pub fn f(&self) -> &Poly {
        &self.f
    }

    /// `f^-1 mod p`.
    pub fn fp(&self) -> &Poly {
        &self.fp
    }

    /// Decrypts a raw ciphertext polynomial with the cached inverse.
    pub fn decrypt(&self, c: &Poly) -> Poly {
        let (n, p, q, _) = self.params.as_tuple();
        decrypt_with_fp(n, p, q, c, &self.f, &self.fp)
    }
}
