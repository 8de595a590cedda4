//! NTRU parameters, errors, the raw encrypt/decrypt operations and the typed
//! engine built on top of them.

pub mod builder;
pub mod engine;
pub mod errors;
pub mod operations;
pub mod params;
pub mod types;

pub use builder::NtruEngineBuilder;
pub use engine::NtruEngine;
pub use errors::{NtruError, NtruResult};
pub use operations::{decrypt, decrypt_with_fp, encrypt, encrypt_with_blinding};
pub use params::{NtruParams, PRESETS};
pub use types::{Ciphertext, Plaintext};
