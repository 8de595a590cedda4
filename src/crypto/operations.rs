//! NTRU encryption and decryption over `Z[x]/(x^N - 1)`.
//!
//! These are the raw polynomial-level operations. The message is used as is:
//! no padding, encoding or decryption-failure detection happens here.
use super::{NtruError, NtruResult};
use crate::keys::random_ternary_poly;
use crate::rings::{Poly, invert_mod_prime};
use rand::Rng;

/// Encrypts `m` under public key `h` with a fresh blinding polynomial
/// `r` of weights `(d, d)`:
///
/// `c = h * r + m  (mod x^N - 1, mod q)`, cast into `[0, q)` and truncated.
pub fn encrypt<R: Rng + ?Sized>(
    n: usize,
    q: i64,
    d: usize,
    m: &Poly,
    h: &Poly,
    rng: &mut R,
) -> NtruResult<Poly> {
    let r = random_ternary_poly(n, d, d, rng)?;
    encrypt_with_blinding(n, q, m, h, &r)
}

/// Deterministic core of [`encrypt`] for a caller-chosen `r`.
///
/// `m` must have degree below `n`; the ciphertext would not be a ring
/// element otherwise.
pub fn encrypt_with_blinding(
    n: usize,
    q: i64,
    m: &Poly,
    h: &Poly,
    r: &Poly,
) -> NtruResult<Poly> {
    if m.degree().is_some_and(|deg| deg >= n) {
        return Err(NtruError::parameter(format!(
            "message degree must be below N = {n}"
        )));
    }
    let c = h
        .circular_convolution_mod(r, n, q)
        .add_mod(m, q)
        .truncate_zeros();
    Ok(c)
}

/// Decrypts `c` with secret `f`, deriving `fp = f^-1 mod p` on the fly.
///
/// Fails with the ring error when `f` has no inverse modulo `p`.
pub fn decrypt(n: usize, p: i64, q: i64, c: &Poly, f: &Poly) -> NtruResult<Poly> {
    let f = f.truncate_zeros();
    let fp = invert_mod_prime(&f, &Poly::ring_modulus(n), p)?;
    Ok(decrypt_with_fp(n, p, q, c, &f, &fp))
}

/// Decryption with a cached `fp`:
///
/// `a = center(c * f mod q)`, `m = center(a * fp mod p)`.
///
/// The result is only the original message while every coefficient of
/// `p*g*r + f*m` stays inside `(-q/2, q/2)`; nothing here detects a failure.
pub fn decrypt_with_fp(n: usize, p: i64, q: i64, c: &Poly, f: &Poly, fp: &Poly) -> Poly {
    let a = c.circular_convolution_mod(f, n, q).center_mod(q);
    a.circular_convolution_mod(fp, n, p)
        .center_mod(p)
        .truncate_zeros()
}
