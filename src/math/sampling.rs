use crate::crypto::{NtruError, NtruResult};
use rand::{Rng, seq::SliceRandom};
use rand_distr::{Distribution, uniform::Uniform};

/// Samples a length-`n` ternary vector with exactly `positive` entries equal
/// to `+1` and `negative` entries equal to `-1`; the rest are zero.
///
/// Positions are drawn uniformly without replacement.
pub fn ternary_coefficients<R: Rng + ?Sized>(
    n: usize,
    positive: usize,
    negative: usize,
    rng: &mut R,
) -> NtruResult<Vec<i64>> {
    let weight = positive
        .checked_add(negative)
        .filter(|&w| w <= n)
        .ok_or_else(|| {
            NtruError::parameter(format!(
                "ternary weight {positive} + {negative} exceeds ring dimension {n}"
            ))
        })?;

    let mut out = vec![0i64; n];
    // Shuffle indices; the first `positive` become +1, the next `negative` -1.
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);
    for (rank, &idx) in indices.iter().take(weight).enumerate() {
        out[idx] = if rank < positive { 1 } else { -1 };
    }
    Ok(out)
}

/// Samples `n` coefficients uniformly from `[-floor(p/2), floor(p/2)]`.
///
/// # Panics
///
/// Panics if `p < 1`.
pub fn centered_coefficients<R: Rng + ?Sized>(
    n: usize,
    p: i64,
    rng: &mut R,
) -> Vec<i64> {
    assert!(p >= 1, "centered_coefficients: modulus must be positive");
    let half = p / 2;
    let distribution = Uniform::new_inclusive(-half, half).unwrap_or_else(|_| {
        panic!("centered_coefficients: invalid range [-{half}, {half}]")
    });
    distribution.sample_iter(rng).take(n).collect()
}
