//! Recorded NTRU test vectors and their recomputation check.
//!
//! A [`TestVector`] is one full run of the scheme written down as plain
//! integer sequences: the key-generation artifacts, a message, the blinding
//! polynomial and the resulting ciphertext. [`TestVector::validate`] replays
//! the run and names the first recorded field that disagrees.
use crate::crypto::{NtruError, NtruParams, NtruResult, decrypt, encrypt_with_blinding};
use crate::keys::{DEFAULT_MAX_ATTEMPTS, generate_key_material, random_message, random_ternary_poly};
use crate::math::{exact_log2, is_prime};
use crate::rings::{Poly, invert_mod_prime, invert_mod_prime_power};
use log::debug;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestVector {
    pub n: usize,
    pub p: i64,
    pub q: i64,
    pub d: usize,
    pub h: Poly,
    pub f: Poly,
    pub m: Poly,
    pub c: Poly,
    pub fp: Poly,
    pub fq: Poly,
    pub r: Poly,
    pub g: Poly,
}

impl TestVector {
    /// Records a fresh run: keys, a random message, a `(d, d)` blinding
    /// polynomial and the ciphertext.
    pub fn generate<R: Rng + ?Sized>(params: &NtruParams, rng: &mut R) -> NtruResult<Self> {
        let (n, p, q, d) = params.as_tuple();
        let keys = generate_key_material(params, DEFAULT_MAX_ATTEMPTS, rng)?;
        let m = random_message(n, p, rng);
        let r = random_ternary_poly(n, d, d, rng)?;
        let c = encrypt_with_blinding(n, q, &m, &keys.h, &r)?;
        Ok(Self {
            n,
            p,
            q,
            d,
            h: keys.h,
            f: keys.f,
            m,
            c,
            fp: keys.fp,
            fq: keys.fq,
            r,
            g: keys.g,
        })
    }

    /// Recomputes `fp`, `fq`, `c` (from `h`, `r`, `m`) and `m` (from `c`,
    /// `f`) and compares each with the recorded value, in that order.
    ///
    /// Comparisons ignore trailing zeros. Returns
    /// [`NtruError::ValidationMismatch`] naming the first field that
    /// differs. Errors raised while recomputing (for example an `f` with no
    /// inverse) propagate unchanged.
    pub fn validate(&self) -> NtruResult<()> {
        let e = self.check_moduli()?;
        let modulus = Poly::ring_modulus(self.n);
        let f = self.f.truncate_zeros();

        let fp = invert_mod_prime(&f, &modulus, self.p)?;
        compare("fp", &fp, &self.fp)?;

        let fq = invert_mod_prime_power(&f, &modulus, 2, e)?;
        compare("fq", &fq, &self.fq)?;

        let c = encrypt_with_blinding(self.n, self.q, &self.m, &self.h, &self.r)?;
        compare("c", &c, &self.c)?;

        let m = decrypt(self.n, self.p, self.q, &self.c, &f)?;
        compare("m", &m, &self.m)?;

        debug!("test vector N={} p={} q={} validated", self.n, self.p, self.q);
        Ok(())
    }

    /// [`validate`](Self::validate) preceded by shape checks: the
    /// parameters must form valid [`NtruParams`], then `f`, `g`, `r` must
    /// carry their ternary weights and `h`, `m`, `c` their coefficient
    /// ranges. The first failing field is reported.
    pub fn validate_strict(&self) -> NtruResult<()> {
        let params = NtruParams::new(self.n, self.p, self.q, self.d)?;
        let shapes = [
            ("f", params.is_secret_shape(&self.f)),
            ("g", params.is_blinding_shape(&self.g)),
            ("r", params.is_blinding_shape(&self.r)),
            ("h", params.is_reduced_mod_q(&self.h)),
            ("m", params.is_message(&self.m)),
            ("c", params.is_reduced_mod_q(&self.c)),
        ];
        if let Some(&(field, _)) = shapes.iter().find(|(_, ok)| !ok) {
            debug!("test vector field {field} has the wrong shape for {params}");
            return Err(NtruError::ValidationMismatch { field });
        }
        self.validate()
    }

    /// `log2 q`, after checking the moduli the recomputation relies on.
    fn check_moduli(&self) -> NtruResult<u32> {
        if self.n == 0 {
            return Err(NtruError::parameter("ring dimension N must be positive"));
        }
        if !is_prime(self.p) {
            return Err(NtruError::parameter(format!(
                "p must be prime, got {}",
                self.p
            )));
        }
        exact_log2(self.q).ok_or_else(|| {
            NtruError::parameter(format!("q must be 2^e with e >= 1, got {}", self.q))
        })
    }
}

fn compare(field: &'static str, recomputed: &Poly, recorded: &Poly) -> NtruResult<()> {
    if recomputed.truncate_zeros() != recorded.truncate_zeros() {
        debug!("test vector field {field}: recorded {recorded}, recomputed {recomputed}");
        return Err(NtruError::ValidationMismatch { field });
    }
    Ok(())
}
