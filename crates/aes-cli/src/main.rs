//! Command-line interface for `aes-core`.

#![forbid(unsafe_code)]

use aes_core::{
    decrypt_block, decrypt_block_traced, encrypt_block, encrypt_block_traced, Block, KeySchedule,
    KeySize, State, TraceStep, BLOCK_SIZE,
};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES block cipher CLI.
#[derive(Parser)]
#[command(name = "aes", version, author, about = "FIPS-197 AES block cipher CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the expanded key schedule, one round key per line.
    Expand {
        /// AES key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
    /// Encrypt a single 16-byte block.
    Enc {
        /// AES key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt a single 16-byte block.
    Dec {
        /// AES key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Print every intermediate state in FIPS-197 Appendix C style.
    Trace {
        /// AES key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
        /// Trace the inverse cipher instead.
        #[arg(long, default_value_t = false)]
        inverse: bool,
    },
    /// Run the FIPS-197 known answers and random round trips for every key size.
    Check {
        /// Number of random samples per key size.
        #[arg(long, default_value_t = 1000)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a local demo: random key and block, encrypt, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Expand { key_hex } => cmd_expand(&key_hex),
        Commands::Enc { key_hex, block_hex } => cmd_enc(&key_hex, &block_hex),
        Commands::Dec { key_hex, block_hex } => cmd_dec(&key_hex, &block_hex),
        Commands::Trace {
            key_hex,
            block_hex,
            inverse,
        } => cmd_trace(&key_hex, &block_hex, inverse),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_expand(key_hex: &str) -> Result<()> {
    let schedule = parse_key_hex(key_hex)?;
    for round in 0..=schedule.rounds() {
        let words: Vec<String> = schedule
            .round_key(round)
            .iter()
            .map(|w| format!("{w:08x}"))
            .collect();
        println!("round[{round:2}]: {}", words.join(" "));
    }
    Ok(())
}

fn cmd_enc(key_hex: &str, block_hex: &str) -> Result<()> {
    let schedule = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    println!("{}", hex::encode(encrypt_block(&block, &schedule)));
    Ok(())
}

fn cmd_dec(key_hex: &str, block_hex: &str) -> Result<()> {
    let schedule = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    println!("{}", hex::encode(decrypt_block(&block, &schedule)));
    Ok(())
}

fn cmd_trace(key_hex: &str, block_hex: &str, inverse: bool) -> Result<()> {
    let schedule = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    let print = |round: usize, step: TraceStep, state: &State| {
        println!("round[{round:2}].{:<8}{state:x}", step_label(step, inverse));
    };
    if inverse {
        decrypt_block_traced(&block, &schedule, print);
    } else {
        encrypt_block_traced(&block, &schedule, print);
    }
    Ok(())
}

fn step_label(step: TraceStep, inverse: bool) -> &'static str {
    match (step, inverse) {
        (TraceStep::Input, false) => "input",
        (TraceStep::Input, true) => "iinput",
        (TraceStep::SubBytes, _) => "s_box",
        (TraceStep::ShiftRows, _) => "s_row",
        (TraceStep::MixColumns, _) => "m_col",
        (TraceStep::AddRoundKey, false) => "k_add",
        (TraceStep::AddRoundKey, true) => "ik_add",
        (TraceStep::InvShiftRows, _) => "is_row",
        (TraceStep::InvSubBytes, _) => "is_box",
        (TraceStep::InvMixColumns, _) => "im_col",
        (TraceStep::Output, false) => "output",
        (TraceStep::Output, true) => "ioutput",
    }
}

/// FIPS-197 Appendix C: (key, plaintext, ciphertext).
const KNOWN_ANSWERS: [(&str, &str, &str); 3] = [
    (
        "000102030405060708090a0b0c0d0e0f",
        "00112233445566778899aabbccddeeff",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    ),
    (
        "000102030405060708090a0b0c0d0e0f1011121314151617",
        "00112233445566778899aabbccddeeff",
        "dda97ca4864cdfe06eaf70a0ec0d7191",
    ),
    (
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        "00112233445566778899aabbccddeeff",
        "8ea2b7ca516745bfeafc49904b496089",
    ),
];

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    for (key_hex, pt_hex, ct_hex) in KNOWN_ANSWERS {
        let schedule = parse_key_hex(key_hex)?;
        let pt = parse_block_hex(pt_hex)?;
        let ct = encrypt_block(&pt, &schedule);
        if hex::encode(ct) != ct_hex {
            bail!("known answer mismatch for key {key_hex}");
        }
        if decrypt_block(&ct, &schedule) != pt {
            bail!("known answer decryption mismatch for key {key_hex}");
        }
    }
    println!("known answers: ok");

    let mut rng = seeded_rng(seed);
    for size in KeySize::ALL {
        for _ in 0..samples {
            let mut key = vec![0u8; size.key_bytes()];
            let mut block = [0u8; BLOCK_SIZE];
            rng.fill_bytes(&mut key);
            rng.fill_bytes(&mut block);
            let schedule = KeySchedule::from_key_bytes(&key).context("expand random key")?;
            let ct = encrypt_block(&block, &schedule);
            if decrypt_block(&ct, &schedule) != block {
                bail!(
                    "round trip failed: key {} block {}",
                    hex::encode(&key),
                    hex::encode(block)
                );
            }
        }
        println!("AES-{} round trips: {samples} ok", size.key_bytes() * 8);
    }
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let schedule = KeySchedule::from_key_bytes(&key_bytes).context("expand demo key")?;

    let mut block = [0u8; BLOCK_SIZE];
    rng.fill_bytes(&mut block);

    let ciphertext = encrypt_block(&block, &schedule);
    let decrypted = decrypt_block(&ciphertext, &schedule);

    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext: {}", hex::encode(block));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted: {}", hex::encode(decrypted));
    if decrypted != block {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<KeySchedule> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    KeySchedule::from_key_bytes(&bytes)
        .context("AES key must be 16, 24 or 32 bytes (32, 48 or 64 hex characters)")
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).context("decode block hex")?;
    if bytes.len() != BLOCK_SIZE {
        bail!("block must be 16 bytes (32 hex characters), got {}", bytes.len());
    }
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(&bytes);
    Ok(block)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_size_inferred_from_hex() {
        let schedule = parse_key_hex(KNOWN_ANSWERS[1].0).expect("valid key");
        assert_eq!(schedule.key_size(), KeySize::Aes192);
        assert!(parse_key_hex("00112233").is_err());
        assert!(parse_key_hex("not hex").is_err());
    }

    #[test]
    fn block_must_be_sixteen_bytes() {
        assert!(parse_block_hex(KNOWN_ANSWERS[0].1).is_ok());
        assert!(parse_block_hex("0011").is_err());
    }

    #[test]
    fn check_passes_with_seed() {
        cmd_check(8, Some(7)).expect("self-check");
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
