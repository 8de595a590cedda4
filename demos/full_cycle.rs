use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use toy_ntru::{NtruEngine, TestVector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for name in ["tiny", "small"] {
        let engine = NtruEngine::builder().build_preset(name)?;
        println!("🔐 {} ({name})", engine.params());

        let (public_key, secret_key) = engine.generate_keypair(&mut rng)?;
        println!("✅ Keys generated");
        println!("  h = {:.8}", public_key.h());
        println!("  f = {:.8}", secret_key.f());

        let plaintext = engine.random_message(&mut rng);
        println!("\n📊 Message:   {:.8}", plaintext.poly());

        let ciphertext = engine.encrypt(&plaintext, &public_key, &mut rng)?;
        println!("🔒 Ciphertext: {:.8}", ciphertext.poly());

        let decrypted = engine.decrypt(&ciphertext, &secret_key)?;
        println!("🔓 Decrypted: {:.8}", decrypted.poly());

        if decrypted == plaintext {
            println!("✅ Round trip succeeded");
        } else {
            println!("❌ Decryption failure: parameters left too little margin");
        }

        let vector = TestVector::generate(engine.params(), &mut rng)?;
        vector.validate_strict()?;
        println!("✅ Recorded test vector validates\n");
    }

    Ok(())
}
