use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use toy_ntru::keys::DEFAULT_MAX_ATTEMPTS;
use toy_ntru::{
    NtruEngine, NtruParams, Plaintext, Poly, SecretKey, TestVector, decrypt,
    encrypt_with_blinding, keygen, random_message, random_ternary_poly,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Exact integer value of p*g*r + f*m in Z[x]/(x^N - 1); the operands are
// small enough that a 2^40 modulus never wraps.
fn decryption_intermediate(p: i64, g: &Poly, r: &Poly, f: &Poly, m: &Poly, n: usize) -> Poly {
    const WIDE: i64 = 1 << 40;
    g.scalar_mul_mod(p, WIDE)
        .circular_convolution_mod(r, n, WIDE)
        .add_mod(&f.circular_convolution_mod(m, n, WIDE), WIDE)
        .center_mod(WIDE)
}

#[test]
fn presets_with_margin_always_round_trip() {
    init_logger();
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    for name in ["tiny", "small", "128bit"] {
        let engine = NtruEngine::builder().build_preset(name).unwrap();
        let (pk, sk) = engine.generate_keypair(&mut rng).unwrap();
        for _ in 0..5 {
            let pt = engine.random_message(&mut rng);
            let ct = engine.encrypt(&pt, &pk, &mut rng).unwrap();
            assert_eq!(engine.decrypt(&ct, &sk).unwrap(), pt, "{name}");
        }
    }
}

#[test]
fn n11_round_trip_holds_while_intermediate_fits() {
    init_logger();
    let (n, p, q, d) = (11, 3, 32, 4);
    let mut checked = 0;
    for seed in 0..40 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let keys = keygen(n, p, q, d, DEFAULT_MAX_ATTEMPTS, &mut rng).unwrap();
        let m = random_message(n, p, &mut rng);
        let r = random_ternary_poly(n, d, d, &mut rng).unwrap();
        let c = encrypt_with_blinding(n, q, &m, &keys.h, &r).unwrap();

        let a = decryption_intermediate(p, &keys.g, &r, &keys.f, &m, n);
        if a.coeffs().iter().all(|&x| x.abs() < q / 2) {
            assert_eq!(decrypt(n, p, q, &c, &keys.f), Ok(m), "seed {seed}");
            checked += 1;
        }
    }
    assert!(checked > 0);
}

#[test]
fn user_supplied_secret_decrypts() {
    init_logger();
    let params = NtruParams::new(11, 3, 32, 4).unwrap();
    let engine = NtruEngine::new(params, DEFAULT_MAX_ATTEMPTS);
    let f = Poly::from([-1, 1, 1, 0, -1, 0, 1, 0, 0, 1, -1]);
    let sk = SecretKey::from_f(f, &params).unwrap();
    let c = Poly::from([14, 11, 26, 24, 14, 16, 30, 7, 25, 6, 19]);
    let ct = toy_ntru::Ciphertext::new(c, &params).unwrap();
    let expected = Plaintext::new(Poly::from([-1, 0, 0, 1, -1, 0, 0, 0, -1, 1, 1]), &params);
    assert_eq!(engine.decrypt(&ct, &sk), expected);
}

#[test]
fn generated_vectors_pass_strict_validation() {
    init_logger();
    let mut rng = ChaCha20Rng::seed_from_u64(77);
    for name in ["tiny", "small"] {
        let params = NtruParams::preset(name).unwrap();
        for _ in 0..3 {
            let tv = TestVector::generate(&params, &mut rng).unwrap();
            assert_eq!(tv.validate_strict(), Ok(()));
        }
    }
}

#[test]
fn keys_depend_only_on_the_seed() {
    let params = NtruParams::preset("small").unwrap();
    let a = TestVector::generate(&params, &mut ChaCha20Rng::seed_from_u64(9)).unwrap();
    let b = TestVector::generate(&params, &mut ChaCha20Rng::seed_from_u64(9)).unwrap();
    let c = TestVector::generate(&params, &mut ChaCha20Rng::seed_from_u64(10)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a.f, c.f);
}
