//! Primality check for the plaintext modulus.
//!
//! Plaintext moduli are tiny (conventionally 3), so `6k +/- 1` trial division
//! is all that is needed.

/// Returns `true` if `n` is prime.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5i64;
    while i.saturating_mul(i) <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::is_prime;

    #[test]
    fn small_primes_and_composites() {
        for prime in [2, 3, 5, 7, 11, 13, 17, 19, 65537] {
            assert!(is_prime(prime), "{prime} should be prime");
        }
        for composite in [-3, 0, 1, 4, 6, 9, 15, 25, 561, 65536] {
            assert!(!is_prime(composite), "{composite} should be composite");
        }
    }

    #[test]
    fn counts_primes_below_one_hundred() {
        assert_eq!((0..100).filter(|&n| is_prime(n)).count(), 25);
    }
}
