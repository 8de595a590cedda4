//! NTRU domain parameters `(N, p, q, d)` and the named presets.
use super::{NtruError, NtruResult};
use crate::math::{exact_log2, is_prime};
use crate::rings::Poly;
use std::fmt;
use std::str::FromStr;

/// Validated domain parameters.
///
/// * `n` - ring dimension, polynomials live in `Z[x]/(x^n - 1)`
/// * `p` - plaintext modulus, an odd prime
/// * `q` - ciphertext modulus, `2^e` with `e >= 1`
/// * `d` - ternary weight; secrets use `(d, d - 1)`, blinding and `g` use `(d, d)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NtruParams {
    n: usize,
    p: i64,
    q: i64,
    d: usize,
}

/// Named parameter sets, smallest first.
pub const PRESETS: [(&str, NtruParams); 5] = [
    ("tiny", NtruParams { n: 11, p: 3, q: 32, d: 2 }),
    ("small", NtruParams { n: 97, p: 3, q: 512, d: 5 }),
    ("128bit", NtruParams { n: 509, p: 3, q: 2048, d: 11 }),
    ("192bit", NtruParams { n: 677, p: 3, q: 2048, d: 11 }),
    ("256bit", NtruParams { n: 821, p: 3, q: 4096, d: 11 }),
];

impl NtruParams {
    pub fn new(n: usize, p: i64, q: i64, d: usize) -> NtruResult<Self> {
        if n < 2 {
            return Err(NtruError::parameter(format!(
                "ring dimension N must be at least 2, got {n}"
            )));
        }
        if !is_prime(p) || p == 2 {
            return Err(NtruError::parameter(format!(
                "p must be an odd prime, got {p}"
            )));
        }
        if exact_log2(q).is_none() {
            return Err(NtruError::parameter(format!(
                "q must be a power of two, got {q}"
            )));
        }
        if d == 0 || d.saturating_mul(2) > n {
            return Err(NtruError::parameter(format!(
                "weight d must satisfy 1 <= d and 2d <= N, got d = {d}, N = {n}"
            )));
        }
        Ok(Self { n, p, q, d })
    }

    /// Looks up one of the [`PRESETS`] by name.
    pub fn preset(name: &str) -> NtruResult<Self> {
        PRESETS
            .iter()
            .find(|(preset, _)| *preset == name)
            .map(|&(_, params)| params)
            .ok_or_else(|| {
                let names: Vec<&str> = PRESETS.iter().map(|(name, _)| *name).collect();
                NtruError::parameter(format!(
                    "unsupported parameter set '{name}', expected one of {names:?}"
                ))
            })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn p(&self) -> i64 {
        self.p
    }

    pub fn q(&self) -> i64 {
        self.q
    }

    pub fn d(&self) -> usize {
        self.d
    }

    /// `e` such that `q = 2^e`.
    pub fn q_exponent(&self) -> u32 {
        self.q.trailing_zeros()
    }

    /// Largest plaintext coefficient magnitude, `floor(p/2)`.
    pub fn message_bound(&self) -> i64 {
        self.p / 2
    }

    /// `x^N - 1`.
    pub fn ring_modulus(&self) -> Poly {
        Poly::ring_modulus(self.n)
    }

    pub fn as_tuple(&self) -> (usize, i64, i64, usize) {
        (self.n, self.p, self.q, self.d)
    }

    /// Degree below `N` (the zero polynomial qualifies).
    pub fn fits_ring(&self, poly: &Poly) -> bool {
        poly.degree().is_none_or(|deg| deg < self.n)
    }

    /// Fits the ring with every coefficient in `[-floor(p/2), floor(p/2)]`.
    pub fn is_message(&self, poly: &Poly) -> bool {
        let bound = self.message_bound();
        self.fits_ring(poly) && poly.into_iter().all(|c| (-bound..=bound).contains(c))
    }

    /// Fits the ring with every coefficient in `[0, q)`.
    pub fn is_reduced_mod_q(&self, poly: &Poly) -> bool {
        self.fits_ring(poly) && poly.into_iter().all(|c| (0..self.q).contains(c))
    }

    /// Ternary, fits the ring, with exactly `positive` ones and `negative`
    /// minus ones.
    pub fn has_ternary_weights(&self, poly: &Poly, positive: usize, negative: usize) -> bool {
        self.fits_ring(poly)
            && poly.into_iter().all(|c| (-1..=1).contains(c))
            && poly.count_eq(1) == positive
            && poly.count_eq(-1) == negative
    }

    /// Weight check for a secret `f`: `(d, d - 1)`.
    pub fn is_secret_shape(&self, f: &Poly) -> bool {
        self.has_ternary_weights(f, self.d, self.d - 1)
    }

    /// Weight check for `g` and blinding polynomials: `(d, d)`.
    pub fn is_blinding_shape(&self, r: &Poly) -> bool {
        self.has_ternary_weights(r, self.d, self.d)
    }
}

impl FromStr for NtruParams {
    type Err = NtruError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::preset(s.trim())
    }
}

impl fmt::Display for NtruParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NTRU(N={}, p={}, q={}, d={})", self.n, self.p, self.q, self.d)
    }
}
