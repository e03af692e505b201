//! Encrypts a short message under a fresh AES-192 key and decrypts it back.

use aes_ecb_core::{decrypt, encrypt, to_hex, KeySize, MainKey};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn main() -> Result<(), aes_ecb_core::AesError> {
    // Deterministic seed for reproducibility in the example.
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let key = MainKey::generate(&mut rng, KeySize::Aes192);

    let message = b"first block here, then a short tail";
    let ciphertext = encrypt(message, &key)?;
    let recovered = decrypt(&ciphertext, &key)?;
    assert_eq!(recovered, message);

    println!("key:        {}", to_hex(key.as_bytes()));
    println!("ciphertext: {}", to_hex(&ciphertext));
    println!("example succeeded; {} bytes recovered", recovered.len());
    Ok(())
}
