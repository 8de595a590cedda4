/// Extended Euclid on integers: returns `(g, x, y)` with `a*x + b*y = g`.
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    if a == 0 {
        (b, 0, 1)
    } else {
        let (g, x, y) = extended_gcd(b.rem_euclid(a), a);
        (g, y - b.div_euclid(a) * x, x)
    }
}

/// Inverse of `a` modulo `m`, or `None` when `gcd(a, m) != 1`.
///
/// # Panics
///
/// Panics if `m <= 0`.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    assert!(m > 0, "mod_inverse: modulus must be positive");
    let (g, x, _) = extended_gcd(a.rem_euclid(m), m);
    if g != 1 {
        return None;
    }
    Some(x.rem_euclid(m))
}

/// Representative of `x` in `[0, m)`.
#[inline]
pub fn reduce(x: i64, m: i64) -> i64 {
    x.rem_euclid(m)
}

/// Computes `(a * b) mod m` with `i128` intermediates, result in `[0, m)`.
#[inline]
pub fn mul_reduce(a: i64, b: i64, m: i64) -> i64 {
    (a as i128 * b as i128).rem_euclid(m as i128) as i64
}

/// Computes `(a + b) mod m` with `i128` intermediates, result in `[0, m)`.
#[inline]
pub fn add_reduce(a: i64, b: i64, m: i64) -> i64 {
    (a as i128 + b as i128).rem_euclid(m as i128) as i64
}

/// Signed representative of `x` in `[-floor(m/2), ceil(m/2) - 1]`.
#[inline]
pub fn center(x: i64, m: i64) -> i64 {
    let half = m / 2;
    (x as i128 + half as i128).rem_euclid(m as i128) as i64 - half
}

/// Returns `e` when `value == 2^e` for some `e >= 1`.
pub fn exact_log2(value: i64) -> Option<u32> {
    if value < 2 || value & (value - 1) != 0 {
        return None;
    }
    Some(value.trailing_zeros())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extended_gcd_satisfies_bezout() {
        for (a, b) in [(240, 46), (17, 5), (0, 9), (9, 0), (35, 64)] {
            let (g, x, y) = extended_gcd(a, b);
            assert_eq!(a * x + b * y, g, "bezout failed for ({a}, {b})");
        }
    }

    #[test]
    fn mod_inverse_finds_units() {
        assert_eq!(mod_inverse(3, 7), Some(5));
        assert_eq!(mod_inverse(-1, 3), Some(2));
        assert_eq!(mod_inverse(5, 32), Some(13));
        assert_eq!(mod_inverse(1, 2), Some(1));
    }

    #[test]
    fn mod_inverse_rejects_non_units() {
        assert_eq!(mod_inverse(4, 32), None);
        assert_eq!(mod_inverse(0, 7), None);
        assert_eq!(mod_inverse(6, 9), None);
    }

    #[test]
    #[should_panic(expected = "mod_inverse: modulus must be positive")]
    fn mod_inverse_panics_on_zero_modulus() {
        let _ = mod_inverse(3, 0);
    }

    #[test]
    fn center_matches_expected_window() {
        assert_eq!(center(31, 32), -1);
        assert_eq!(center(16, 32), -16);
        assert_eq!(center(15, 32), 15);
        assert_eq!(center(2, 3), -1);
        assert_eq!(center(-2, 3), 1);
        assert_eq!(center(5, 1), 0);
    }

    #[test]
    fn add_reduce_survives_largest_modulus() {
        let m = i64::MAX;
        assert_eq!(add_reduce(m - 1, m - 1, m), m - 2);
        assert_eq!(add_reduce(i64::MIN, -1, m), m - 2);
        assert_eq!(add_reduce(3, -5, 7), 5);
    }

    #[test]
    fn exact_log2_only_accepts_powers_of_two() {
        assert_eq!(exact_log2(2), Some(1));
        assert_eq!(exact_log2(32), Some(5));
        assert_eq!(exact_log2(4096), Some(12));
        assert_eq!(exact_log2(1), None);
        assert_eq!(exact_log2(0), None);
        assert_eq!(exact_log2(-8), None);
        assert_eq!(exact_log2(48), None);
    }
}
