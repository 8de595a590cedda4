pub mod crypto;
pub mod keys;
pub mod math;
pub mod rings;
pub mod validation;

pub use crypto::{
    Ciphertext, NtruEngine, NtruEngineBuilder, NtruError, NtruParams, NtruResult, Plaintext,
    decrypt, decrypt_with_fp, encrypt, encrypt_with_blinding,
};
pub use keys::{KeyMaterial, PublicKey, SecretKey, keygen, random_message, random_ternary_poly};
pub use rings::{
    Poly, RingError, RingResult, div_mod, invert_mod_prime, invert_mod_prime_power, xgcd,
};
pub use validation::TestVector;
