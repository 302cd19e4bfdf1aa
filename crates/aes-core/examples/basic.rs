//! Expands a 256-bit key and encrypts then decrypts one block.

use aes_core::{decrypt_block, encrypt_block, expand_key, Aes256Key};

fn main() {
    let key = Aes256Key::from(*b"an example key of thirty-two b!!");
    let schedule = expand_key(&key);

    let block = *b"sixteen byte msg";
    let ciphertext = encrypt_block(&block, &schedule);
    let recovered = decrypt_block(&ciphertext, &schedule);
    assert_eq!(recovered, block);

    let hex: String = ciphertext.iter().map(|b| format!("{b:02x}")).collect();
    println!("ciphertext: {hex}");
    println!("round trip succeeded over {} rounds", schedule.rounds());
}
