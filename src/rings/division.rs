//! Polynomial long division and the extended Euclidean algorithm over `Z/mZ`.
//!
//! Both routines assume every non-zero leading coefficient they meet is a unit
//! modulo `m`, which holds whenever `m` is prime. For composite `m` they
//! report [`RingError::NotInvertible`] instead of guessing.
use super::errors::{RingError, RingResult};
use super::poly::Poly;
use crate::math::utils::{mod_inverse, mul_reduce, reduce};

/// Divides `a` by `b` over `Z/mZ`, returning `(quotient, remainder)`.
///
/// `b` must be normalized and non-zero, and its leading coefficient must be
/// invertible modulo `m`. The dividend is reduced into `[0, m)` first and may
/// carry trailing zeros. Both outputs are truncated, and
/// `a = quotient * b + remainder (mod m)` with `deg(remainder) < deg(b)`.
pub fn div_mod(a: &Poly, b: &Poly, m: i64) -> RingResult<(Poly, Poly)> {
    let lc = b.ensure_divisor()?;
    let lc_inv = mod_inverse(lc, m).ok_or(RingError::NotInvertible {
        value: reduce(lc, m),
        modulus: m,
    })?;
    let divisor = b.cast_mod(m);
    let deg_b = divisor.len() - 1;

    let mut rem = a.cast_mod(m).into_coeffs();
    let deg_a = match rem.iter().rposition(|&c| c != 0) {
        Some(deg) if deg >= deg_b => deg,
        _ => return Ok((Poly::zero(), Poly::from(rem).truncate_zeros())),
    };

    let mut quot = vec![0i64; deg_a - deg_b + 1];
    for deg_r in (deg_b..=deg_a).rev() {
        if rem[deg_r] == 0 {
            continue;
        }
        let shift = deg_r - deg_b;
        let factor = mul_reduce(rem[deg_r], lc_inv, m);
        for (i, &coeff) in divisor.coeffs().iter().enumerate() {
            let slot = &mut rem[i + shift];
            *slot = reduce(*slot - mul_reduce(coeff, factor, m), m);
        }
        debug_assert_eq!(rem[deg_r], 0);
        quot[shift] = factor;
    }

    rem.truncate(deg_b);
    Ok((Poly::from(quot).truncate_zeros(), Poly::from(rem).truncate_zeros()))
}

/// Extended Euclid over `Z/mZ`: returns `(d, s, t)` with `s*a + t*b = d`.
///
/// `d` is made monic unless one operand is zero, in which case the other is
/// returned unchanged together with the trivial Bezout pair. Non-zero
/// operands must be normalized.
pub fn xgcd(a: &Poly, b: &Poly, m: i64) -> RingResult<(Poly, Poly, Poly)> {
    if a.is_empty() {
        return Ok((b.clone(), Poly::zero(), Poly::one()));
    }
    if b.is_empty() {
        return Ok((a.clone(), Poly::one(), Poly::zero()));
    }
    a.ensure_divisor()?;
    b.ensure_divisor()?;

    let (mut r_prev, mut r) = (a.clone(), b.clone());
    let (mut s_prev, mut s) = (Poly::one(), Poly::zero());
    let (mut t_prev, mut t) = (Poly::zero(), Poly::one());

    while !r.is_empty() {
        let (q, r_next) = div_mod(&r_prev, &r, m)?;
        let s_next = s_prev.sub_mod(&q.mul_mod(&s, m), m).truncate_zeros();
        let t_next = t_prev.sub_mod(&q.mul_mod(&t, m), m).truncate_zeros();

        r_prev = std::mem::replace(&mut r, r_next);
        s_prev = std::mem::replace(&mut s, s_next);
        t_prev = std::mem::replace(&mut t, t_next);
    }

    // r_prev is still the caller's unreduced `b` when `b` divides `a`
    let gcd = r_prev.cast_mod(m).truncate_zeros();
    let lc = gcd.ensure_divisor()?;
    let lc_inv = mod_inverse(lc, m).ok_or(RingError::NotInvertible {
        value: lc,
        modulus: m,
    })?;

    Ok((
        gcd.scalar_mul_mod(lc_inv, m),
        s_prev.scalar_mul_mod(lc_inv, m),
        t_prev.scalar_mul_mod(lc_inv, m),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bezout(a: &Poly, b: &Poly, s: &Poly, t: &Poly, m: i64) -> Poly {
        s.mul_mod(a, m).add_mod(&t.mul_mod(b, m), m).truncate_zeros()
    }

    #[test]
    fn div_mod_reference_values() {
        // x^4 + ... divided by x^2 + 1 over Z/7
        let a = Poly::from([1, 2, 3, 4, 5]);
        let b = Poly::from([1, 0, 1]);
        let (q, r) = div_mod(&a, &b, 7).unwrap();
        assert_eq!(q, Poly::from([5, 4, 5]));
        assert_eq!(r, Poly::from([3, 5]));
        let back = q.mul_mod(&b, 7).add_mod(&r, 7).truncate_zeros();
        assert_eq!(back, a);
    }

    #[test]
    fn div_mod_short_dividend_is_remainder() {
        let a = Poly::from([-1, 3]);
        let b = Poly::from([1, 1, 1]);
        let (q, r) = div_mod(&a, &b, 5).unwrap();
        assert_eq!(q, Poly::zero());
        assert_eq!(r, Poly::from([4, 3]));
    }

    #[test]
    fn div_mod_handles_padded_dividend() {
        let a = Poly::from([2, 1, 0, 0, 0]);
        let b = Poly::from([0, 0, 1]);
        let (q, r) = div_mod(&a, &b, 3).unwrap();
        assert_eq!(q, Poly::zero());
        assert_eq!(r, Poly::from([2, 1]));
    }

    #[test]
    fn div_mod_exact_division_leaves_zero() {
        // (x + 1)(x + 2) = x^2 + 3x + 2
        let a = Poly::from([2, 3, 1]);
        let b = Poly::from([1, 1]);
        let (q, r) = div_mod(&a, &b, 11).unwrap();
        assert_eq!(q, Poly::from([2, 1]));
        assert_eq!(r, Poly::zero());
    }

    #[test]
    fn div_mod_rejects_bad_divisors() {
        let a = Poly::from([1, 2, 3]);
        assert_eq!(
            div_mod(&a, &Poly::zero(), 7),
            Err(RingError::InvalidPolynomial)
        );
        assert_eq!(
            div_mod(&a, &Poly::from([1, 1, 0]), 7),
            Err(RingError::InvalidPolynomial)
        );
        assert_eq!(
            div_mod(&a, &Poly::from([1, 2]), 4),
            Err(RingError::NotInvertible {
                value: 2,
                modulus: 4
            })
        );
    }

    #[test]
    fn xgcd_with_zero_operand() {
        let a = Poly::from([1, 5, 3]);
        let b = Poly::from([5, 3, 2]);

        let (d, s, t) = xgcd(&a, &Poly::zero(), 7).unwrap();
        assert_eq!((d, s, t), (a.clone(), Poly::one(), Poly::zero()));

        let (d, s, t) = xgcd(&Poly::zero(), &b, 7).unwrap();
        assert_eq!((d, s, t), (b.clone(), Poly::zero(), Poly::one()));
    }

    #[test]
    fn xgcd_coprime_pair() {
        let a = Poly::from([1, 5, 3]);
        let b = Poly::from([5, 3, 2]);
        let (d, s, t) = xgcd(&a, &b, 7).unwrap();
        assert_eq!(d, Poly::one());
        assert_eq!(s, Poly::from([3, 6]));
        assert_eq!(t, Poly::from([1, 5]));
        assert_eq!(bezout(&a, &b, &s, &t, 7), d);
    }

    #[test]
    fn xgcd_common_factor_is_monic() {
        // (x + 1)^2 and 2x + 2 share x + 1 over Z/5
        let a = Poly::from([1, 2, 1]);
        let b = Poly::from([2, 2]);
        let (d, s, t) = xgcd(&a, &b, 5).unwrap();
        assert_eq!(d, Poly::from([1, 1]));
        assert_eq!(bezout(&a, &b, &s, &t, 5), d);
    }

    #[test]
    fn xgcd_rejects_padded_operand() {
        let a = Poly::from([1, 1, 0]);
        let b = Poly::from([1, 1]);
        assert_eq!(xgcd(&a, &b, 3), Err(RingError::InvalidPolynomial));
    }
}
