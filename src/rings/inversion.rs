//! Inversion in the quotient ring `Z_m[x]/(M)`.
//!
//! Prime moduli go through [`xgcd`]; prime-power moduli start from the inverse
//! modulo the prime and lift it with the Newton step `b <- b * (2 - a*b)`,
//! which doubles the number of correct `p`-adic digits on every pass.
use super::division::{div_mod, xgcd};
use super::errors::{RingError, RingResult};
use super::poly::Poly;

/// `a * b mod (modulus, m)`, truncated.
pub fn mul_in_quotient(a: &Poly, b: &Poly, modulus: &Poly, m: i64) -> RingResult<Poly> {
    let (_, rem) = div_mod(&a.mul_mod(b, m), modulus, m)?;
    Ok(rem)
}

/// Inverse of `a` in `Z_p[x]/(modulus)` for prime `p`.
///
/// Fails with [`RingError::NotCoprime`] when `gcd(a, modulus) != 1` over
/// `Z_p`. For a randomly sampled `a` this is an expected outcome that callers
/// typically answer by resampling.
///
/// # Panics
///
/// Panics if the computed inverse does not multiply back to one, which would
/// mean the gcd routine is broken.
pub fn invert_mod_prime(a: &Poly, modulus: &Poly, p: i64) -> RingResult<Poly> {
    let (d, inv, _) = xgcd(a, modulus, p)?;
    if d != Poly::one() {
        return Err(RingError::NotCoprime { modulus: p });
    }

    assert_eq!(
        mul_in_quotient(a, &inv, modulus, p)?,
        Poly::one(),
        "invert_mod_prime: xgcd produced a wrong inverse"
    );
    Ok(inv)
}

/// Inverse of `a` in `Z_{p^e}[x]/(modulus)` by Hensel lifting.
///
/// The lift runs exactly `e` rounds, each at the full modulus `p^e`.
/// `e = 0`, or a `p^e` that overflows `i64`, is [`RingError::InvalidExponent`].
///
/// # Panics
///
/// Panics if the lifted inverse fails the final `a * b = 1` check.
pub fn invert_mod_prime_power(
    a: &Poly,
    modulus: &Poly,
    p: i64,
    e: u32,
) -> RingResult<Poly> {
    let m = match p.checked_pow(e) {
        Some(m) if e >= 1 => m,
        _ => return Err(RingError::InvalidExponent { base: p, exponent: e }),
    };

    let mut b = invert_mod_prime(a, modulus, p)?;
    let two = Poly::from([2]);
    for _ in 0..e {
        let residual = mul_in_quotient(a, &b, modulus, m)?;
        let correction = two.sub_mod(&residual, m);
        b = mul_in_quotient(&b, &correction, modulus, m)?;
    }

    assert_eq!(
        mul_in_quotient(a, &b, modulus, m)?,
        Poly::one(),
        "invert_mod_prime_power: Hensel lift did not converge"
    );
    Ok(b)
}
