//! Integer polynomials with coefficient-wise modular arithmetic.
//!
//! A [`Poly`] is a plain coefficient vector in ascending order of powers:
//! `coeffs[i]` is the coefficient of `x^i`. The zero polynomial is the empty
//! vector. Nothing here truncates implicitly; callers that need a divisor or a
//! canonical value call [`Poly::truncate_zeros`] themselves.
use super::errors::{RingError, RingResult};
use crate::math::utils::{add_reduce, center, mod_inverse, mul_reduce, reduce};

#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Poly {
    coeffs: Vec<i64>,
}

impl Poly {
    /// The zero polynomial (empty coefficient vector).
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// The constant polynomial `1`.
    pub fn one() -> Self {
        Self { coeffs: vec![1] }
    }

    pub fn from_coeffs(coeffs: &[i64]) -> Self {
        Self {
            coeffs: coeffs.to_vec(),
        }
    }

    /// The NTRU ring modulus `x^n - 1`.
    pub fn ring_modulus(n: usize) -> Self {
        let mut coeffs = vec![0i64; n + 1];
        coeffs[0] = -1;
        coeffs[n] = 1;
        Self { coeffs }
    }

    pub fn coeffs(&self) -> &[i64] {
        &self.coeffs
    }

    pub fn into_coeffs(self) -> Vec<i64> {
        self.coeffs
    }

    /// Number of stored coefficients, trailing zeros included.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// `true` for the empty vector and for any all-zero vector.
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }

    /// Index of the highest non-zero coefficient, `None` for zero.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.iter().rposition(|&c| c != 0)
    }

    /// Last stored coefficient, provided it is non-zero.
    pub fn leading_coeff(&self) -> Option<i64> {
        self.coeffs.last().copied().filter(|&c| c != 0)
    }

    /// Either the zero polynomial or a vector whose last entry is non-zero.
    pub fn is_normalized(&self) -> bool {
        self.coeffs.is_empty() || self.leading_coeff().is_some()
    }

    /// Non-zero and normalized, as required of a divisor.
    pub(crate) fn ensure_divisor(&self) -> RingResult<i64> {
        self.leading_coeff().ok_or(RingError::InvalidPolynomial)
    }

    /// Strips trailing zero coefficients; an all-zero vector becomes empty.
    pub fn truncate_zeros(&self) -> Self {
        match self.degree() {
            Some(deg) => Self::from_coeffs(&self.coeffs[..=deg]),
            None => Self::zero(),
        }
    }

    /// Number of coefficients equal to `value`.
    pub fn count_eq(&self, value: i64) -> usize {
        self.coeffs.iter().filter(|&&c| c == value).count()
    }

    /// Every coefficient reduced into `[0, m)`.
    ///
    /// # Panics
    ///
    /// Panics if `m <= 0`.
    pub fn cast_mod(&self, m: i64) -> Self {
        assert_modulus(m);
        self.coeffs.iter().map(|&c| reduce(c, m)).collect()
    }

    /// Every coefficient mapped to its centered representative
    /// `((x + m/2) mod m) - m/2`, in `[-floor(m/2), ceil(m/2) - 1]`.
    pub fn center_mod(&self, m: i64) -> Self {
        assert_modulus(m);
        self.coeffs.iter().map(|&c| center(c, m)).collect()
    }

    pub fn add_mod(&self, other: &Self, m: i64) -> Self {
        assert_modulus(m);
        zip_padded(&self.coeffs, &other.coeffs, |a, b| {
            add_reduce(a, b, m)
        })
    }

    /// `self - other` mod m; the result has the length of the longer operand.
    pub fn sub_mod(&self, other: &Self, m: i64) -> Self {
        assert_modulus(m);
        zip_padded(&self.coeffs, &other.coeffs, |a, b| {
            reduce(reduce(a, m) - reduce(b, m), m)
        })
    }

    pub fn neg_mod(&self, m: i64) -> Self {
        assert_modulus(m);
        self.coeffs.iter().map(|&c| reduce(-reduce(c, m), m)).collect()
    }

    pub fn scalar_mul_mod(&self, scalar: i64, m: i64) -> Self {
        assert_modulus(m);
        self.coeffs.iter().map(|&c| mul_reduce(c, scalar, m)).collect()
    }

    /// Ordinary product mod m (no wrap-around), of length
    /// `len(a) + len(b) - 1`; empty when either operand is empty.
    pub fn mul_mod(&self, other: &Self, m: i64) -> Self {
        assert_modulus(m);
        if self.is_empty() || other.is_empty() {
            return Self::zero();
        }
        let mut out = vec![0i64; self.len() + other.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.coeffs.iter().enumerate() {
                out[i + j] = add_reduce(out[i + j], mul_reduce(a, b, m), m);
            }
        }
        Self { coeffs: out }
    }

    /// Product in `Z_m[x]/(x^n - 1)`: indices wrap modulo `n`. The result
    /// always has exactly `n` coefficients.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0` or `m <= 0`.
    pub fn circular_convolution_mod(&self, other: &Self, n: usize, m: i64) -> Self {
        assert!(n > 0, "circular_convolution_mod: ring dimension must be positive");
        assert_modulus(m);
        let mut out = vec![0i64; n];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.coeffs.iter().enumerate() {
                let k = (i + j) % n;
                out[k] = add_reduce(out[k], mul_reduce(a, b, m), m);
            }
        }
        Self { coeffs: out }
    }

    /// Scales `self` by the inverse of its leading coefficient mod m.
    pub fn make_monic_mod(&self, m: i64) -> RingResult<Self> {
        let lc = self.ensure_divisor()?;
        let inv = mod_inverse(lc, m).ok_or(RingError::NotInvertible {
            value: reduce(lc, m),
            modulus: m,
        })?;
        Ok(self.scalar_mul_mod(inv, m))
    }
}

fn assert_modulus(m: i64) {
    assert!(m > 0, "polynomial modulus must be positive, got {m}");
}

fn zip_padded(a: &[i64], b: &[i64], op: impl Fn(i64, i64) -> i64) -> Poly {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            op(x, y)
        })
        .collect()
}

impl From<Vec<i64>> for Poly {
    fn from(coeffs: Vec<i64>) -> Self {
        Self { coeffs }
    }
}

impl From<&[i64]> for Poly {
    fn from(coeffs: &[i64]) -> Self {
        Self::from_coeffs(coeffs)
    }
}

impl<const LEN: usize> From<[i64; LEN]> for Poly {
    fn from(coeffs: [i64; LEN]) -> Self {
        Self {
            coeffs: coeffs.to_vec(),
        }
    }
}

impl FromIterator<i64> for Poly {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self {
            coeffs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Poly {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.coeffs.iter()
    }
}

impl AsRef<[i64]> for Poly {
    fn as_ref(&self) -> &[i64] {
        &self.coeffs
    }
}
