//! AES block cipher per FIPS-197.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - Key expansion for 128-, 192- and 256-bit keys (`Nk` = 4, 6, 8).
//! - Single-block encryption and decryption over a fixed 128-bit block.
//! - The individual round transformations and GF(2^8) arithmetic.
//!
//! Modes of operation, padding and authentication are left to callers. The
//! implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
pub mod gf;
mod key;
pub mod round;
mod schedule;
mod state;
pub mod tables;

pub use crate::block::{pack_word, unpack_word, Block, Word, BLOCK_SIZE, NB};
pub use crate::cipher::{
    cipher, decrypt_block, decrypt_block_traced, encrypt_block, encrypt_block_traced, inv_cipher,
    TraceStep,
};
pub use crate::error::{Error, Result};
pub use crate::key::{Aes128Key, Aes192Key, Aes256Key, CipherKey, KeySchedule, KeySize};
pub use crate::schedule::{expand_key, key_expansion, rot_word, sub_word};
pub use crate::state::State;
pub use crate::tables::{inv_sbox, sbox};
