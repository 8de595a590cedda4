pub mod keygen;
pub mod public_key;
pub mod secret_key;

pub use keygen::{
    DEFAULT_MAX_ATTEMPTS, KeyMaterial, generate_key_material, keygen, random_message,
    random_ternary_poly,
};
pub use public_key::PublicKey;
pub use secret_key::SecretKey;
