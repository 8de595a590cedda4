use super::builder::NtruEngineBuilder;
use super::types::{Ciphertext, Plaintext};
use super::{NtruError, NtruParams, NtruResult};
use crate::keys::{KeyMaterial, PublicKey, SecretKey, generate_key_material, random_message};
use log::debug;
use rand::Rng;

/// Typed front end over the raw NTRU operations for one parameter set.
#[derive(Debug, Clone)]
pub struct NtruEngine {
    params: NtruParams,
    max_keygen_attempts: usize,
}

impl NtruEngine {
    pub fn builder() -> NtruEngineBuilder {
        NtruEngineBuilder::new()
    }

    pub fn new(params: NtruParams, max_keygen_attempts: usize) -> Self {
        debug!("engine for {params}, up to {max_keygen_attempts} keygen attempts");
        Self {
            params,
            max_keygen_attempts,
        }
    }

    pub fn params(&self) -> &NtruParams {
        &self.params
    }

    pub fn max_keygen_attempts(&self) -> usize {
        self.max_keygen_attempts
    }

    /// Full key-generation output, including `fq` and `g`.
    pub fn generate_key_material<R: Rng + ?Sized>(&self, rng: &mut R) -> NtruResult<KeyMaterial> {
        generate_key_material(&self.params, self.max_keygen_attempts, rng)
    }

    pub fn generate_keypair<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> NtruResult<(PublicKey, SecretKey)> {
        Ok(self.generate_key_material(rng)?.into_keypair(&self.params))
    }

    pub fn random_message<R: Rng + ?Sized>(&self, rng: &mut R) -> Plaintext {
        Plaintext::from_trusted(random_message(self.params.n(), self.params.p(), rng))
    }

    pub fn encrypt<R: Rng + ?Sized>(
        &self,
        plaintext: &Plaintext,
        public_key: &PublicKey,
        rng: &mut R,
    ) -> NtruResult<Ciphertext> {
        self.ensure_same_params(public_key.params())?;
        let c = public_key.encrypt(plaintext.poly(), rng)?;
        Ok(Ciphertext::from_trusted(c))
    }

    /// Decrypts without failure detection: with unlucky parameters the
    /// returned plaintext differs from the one encrypted.
    pub fn decrypt(
        &self,
        ciphertext: &Ciphertext,
        secret_key: &SecretKey,
    ) -> NtruResult<Plaintext> {
        self.ensure_same_params(secret_key.params())?;
        Ok(Plaintext::from_trusted(
            secret_key.decrypt(ciphertext.poly()),
        ))
    }

    fn ensure_same_params(&self, key_params: &NtruParams) -> NtruResult<()> {
        if *key_params != self.params {
            return Err(NtruError::parameter(format!(
                "key belongs to {key_params}, engine uses {}",
                self.params
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn tiny_round_trip() {
        let mut rng = ChaCha20Rng::seed_from_u64(2024);
        let engine = NtruEngine::builder().build_preset("tiny").unwrap();
        let (pk, sk) = engine.generate_keypair(&mut rng).unwrap();
        for _ in 0..20 {
            let pt = engine.random_message(&mut rng);
            let ct = engine.encrypt(&pt, &pk, &mut rng).unwrap();
            assert!(engine.params().is_reduced_mod_q(ct.poly()));
            assert_eq!(engine.decrypt(&ct, &sk).unwrap(), pt);
        }
    }

    #[test]
    fn keys_from_another_parameter_set_are_rejected() {
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        let tiny = NtruEngine::builder().build_preset("tiny").unwrap();
        let small = NtruEngine::builder().build_preset("small").unwrap();
        let (pk, sk) = tiny.generate_keypair(&mut rng).unwrap();

        let pt = small.random_message(&mut rng);
        assert!(matches!(
            small.encrypt(&pt, &pk, &mut rng),
            Err(NtruError::ParameterError { .. })
        ));
        let ct = tiny
            .encrypt(&tiny.random_message(&mut rng), &pk, &mut rng)
            .unwrap();
        assert!(small.decrypt(&ct, &sk).is_err());
    }

    #[test]
    fn exhausted_keygen_surfaces() {
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        let engine = NtruEngine::builder()
            .max_keygen_attempts(0)
            .build_preset("tiny")
            .unwrap();
        assert_eq!(
            engine.generate_keypair(&mut rng).unwrap_err(),
            NtruError::KeyGenExhausted { attempts: 0 }
        );
    }
}
