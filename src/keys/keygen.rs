//! Key generation: a bounded rejection sampler for an invertible secret.
//!
//! The caller's rng is drawn from once, for a base seed. Attempt `i` then runs
//! on its own ChaCha20 stream `i` under that seed, so a key pair is a pure
//! function of the caller's seed whether the attempts run one after another
//! or on the rayon pool (`parallel` feature).
use crate::crypto::{NtruError, NtruParams, NtruResult};
use crate::keys::{PublicKey, SecretKey};
use crate::math::{centered_coefficients, ternary_coefficients};
use crate::rings::{Poly, RingError, invert_mod_prime, invert_mod_prime_power};
use log::{info, trace, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::{IntoParallelIterator, ParallelIterator};

/// Attempt cap used when the caller does not pick one.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Everything key generation produces. `h` and `f` form the key pair; the
/// rest is kept for test vectors and cached decryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    pub h: Poly,
    pub f: Poly,
    pub fp: Poly,
    pub fq: Poly,
    pub g: Poly,
}

impl KeyMaterial {
    /// Splits the artifacts into the key pair, keeping the cached `fp`.
    pub fn into_keypair(self, params: &NtruParams) -> (PublicKey, SecretKey) {
        (
            PublicKey::from_parts(*params, self.h),
            SecretKey::from_parts(*params, self.f, self.fp),
        )
    }
}

/// Length-`n` ternary polynomial with `positive` ones and `negative` minus
/// ones at uniformly chosen distinct positions.
pub fn random_ternary_poly<R: Rng + ?Sized>(
    n: usize,
    positive: usize,
    negative: usize,
    rng: &mut R,
) -> NtruResult<Poly> {
    ternary_coefficients(n, positive, negative, rng).map(Poly::from)
}

/// Uniform plaintext with coefficients in `[-floor(p/2), floor(p/2)]`,
/// truncated.
pub fn random_message<R: Rng + ?Sized>(n: usize, p: i64, rng: &mut R) -> Poly {
    Poly::from(centered_coefficients(n, p, rng)).truncate_zeros()
}

/// Generates NTRU key material for `(n, p, q, d)`.
///
/// Fails with [`NtruError::ParameterError`] for invalid parameters (notably a
/// `q` that is not a power of two) and with [`NtruError::KeyGenExhausted`]
/// when no sampled secret is invertible modulo both `p` and `q` within
/// `max_attempts` tries.
pub fn keygen<R: Rng + ?Sized>(
    n: usize,
    p: i64,
    q: i64,
    d: usize,
    max_attempts: usize,
    rng: &mut R,
) -> NtruResult<KeyMaterial> {
    let params = NtruParams::new(n, p, q, d)?;
    generate_key_material(&params, max_attempts, rng)
}

/// Same as [`keygen`] for already validated parameters.
pub fn generate_key_material<R: Rng + ?Sized>(
    params: &NtruParams,
    max_attempts: usize,
    rng: &mut R,
) -> NtruResult<KeyMaterial> {
    let seed: u64 = rng.random();
    let modulus = params.ring_modulus();

    let Some(found) = search(params, &modulus, seed, max_attempts) else {
        warn!("{params}: no invertible secret in {max_attempts} attempts");
        return Err(NtruError::KeyGenExhausted {
            attempts: max_attempts,
        });
    };
    let Candidate {
        attempt,
        f,
        fp,
        fq,
        mut rng,
    } = found?;
    info!("{params}: invertible secret found on attempt {}", attempt + 1);

    let (n, p, q, d) = params.as_tuple();
    let g = random_ternary_poly(n, d, d, &mut rng)?;
    let pfq = fq.scalar_mul_mod(p, q);
    let h = g
        .circular_convolution_mod(&pfq, n, q)
        .cast_mod(q)
        .truncate_zeros();

    Ok(KeyMaterial { h, f, fp, fq, g })
}

struct Candidate {
    attempt: usize,
    f: Poly,
    fp: Poly,
    fq: Poly,
    rng: ChaCha20Rng,
}

fn attempt_rng(seed: u64, attempt: usize) -> ChaCha20Rng {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    rng.set_stream(attempt as u64);
    rng
}

/// First attempt that either succeeds or fails with something other than
/// `NotCoprime`; `None` when every attempt was rejected.
#[cfg(not(feature = "parallel"))]
fn search(
    params: &NtruParams,
    modulus: &Poly,
    seed: u64,
    max_attempts: usize,
) -> Option<NtruResult<Candidate>> {
    (0..max_attempts).find_map(|attempt| try_attempt(params, modulus, seed, attempt).transpose())
}

#[cfg(feature = "parallel")]
fn search(
    params: &NtruParams,
    modulus: &Poly,
    seed: u64,
    max_attempts: usize,
) -> Option<NtruResult<Candidate>> {
    (0..max_attempts)
        .into_par_iter()
        .find_map_first(|attempt| try_attempt(params, modulus, seed, attempt).transpose())
}

fn try_attempt(
    params: &NtruParams,
    modulus: &Poly,
    seed: u64,
    attempt: usize,
) -> NtruResult<Option<Candidate>> {
    let mut rng = attempt_rng(seed, attempt);
    let (n, _, _, d) = params.as_tuple();
    let f = random_ternary_poly(n, d, d - 1, &mut rng)?.truncate_zeros();

    let Some((fp, fq)) = invert_secret(params, modulus, &f)? else {
        trace!("attempt {attempt}: secret rejected");
        return Ok(None);
    };
    Ok(Some(Candidate {
        attempt,
        f,
        fp,
        fq,
        rng,
    }))
}

/// `(f^-1 mod p, f^-1 mod q)`, or `None` when `f` shares a factor with the
/// ring modulus modulo 2 or modulo `p`.
fn invert_secret(
    params: &NtruParams,
    modulus: &Poly,
    f: &Poly,
) -> NtruResult<Option<(Poly, Poly)>> {
    let inverses = invert_mod_prime_power(f, modulus, 2, params.q_exponent())
        .and_then(|fq| invert_mod_prime(f, modulus, params.p()).map(|fp| (fp, fq)));
    match inverses {
        Ok(pair) => Ok(Some(pair)),
        Err(RingError::NotCoprime { modulus }) => {
            trace!("secret not invertible modulo {modulus}");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}
