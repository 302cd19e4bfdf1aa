//! Key sizes, typed keys and the expanded round-key schedule.

use crate::block::{Word, NB};
use crate::error::{Error, Result};

/// Upper bound on `Nr` across all key sizes (AES-256).
pub const MAX_ROUNDS: usize = 14;

/// The three AES key sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, `Nk = 4`, `Nr = 10`.
    Aes128,
    /// 192-bit key, `Nk = 6`, `Nr = 12`.
    Aes192,
    /// 256-bit key, `Nk = 8`, `Nr = 14`.
    Aes256,
}

impl KeySize {
    /// All key sizes, smallest first.
    pub const ALL: [KeySize; 3] = [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256];

    /// Validates a key length expressed in words.
    pub fn from_nk(nk: usize) -> Result<Self> {
        match nk {
            4 => Ok(Self::Aes128),
            6 => Ok(Self::Aes192),
            8 => Ok(Self::Aes256),
            other => Err(Error::InvalidKeySize(other)),
        }
    }

    /// Infers the key size from a key length in bytes.
    pub fn from_key_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            other => Err(Error::InvalidKeyLength(other)),
        }
    }

    /// Key length in words (`Nk`).
    pub const fn nk(self) -> usize {
        match self {
            Self::Aes128 => 4,
            Self::Aes192 => 6,
            Self::Aes256 => 8,
        }
    }

    /// Number of rounds (`Nr = Nk + 6`).
    pub const fn nr(self) -> usize {
        self.nk() + 6
    }

    /// Key length in bytes.
    pub const fn key_bytes(self) -> usize {
        4 * self.nk()
    }

    /// Number of words in the expanded schedule, `Nb * (Nr + 1)`.
    pub const fn schedule_len(self) -> usize {
        NB * (self.nr() + 1)
    }
}

/// A cipher key of statically known size.
pub trait CipherKey {
    /// Size of this key type.
    const SIZE: KeySize;

    /// Raw key bytes, exactly `SIZE.key_bytes()` long.
    fn as_bytes(&self) -> &[u8];
}

macro_rules! cipher_key {
    ($(#[$doc:meta])* $name:ident, $len:literal, $size:expr) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name(pub [u8; $len]);

        impl From<[u8; $len]> for $name {
            fn from(value: [u8; $len]) -> Self {
                Self(value)
            }
        }

        impl CipherKey for $name {
            const SIZE: KeySize = $size;

            fn as_bytes(&self) -> &[u8] {
                &self.0
            }
        }
    };
}

cipher_key!(
    /// AES-128 key wrapper.
    Aes128Key, 16, KeySize::Aes128
);
cipher_key!(
    /// AES-192 key wrapper.
    Aes192Key, 24, KeySize::Aes192
);
cipher_key!(
    /// AES-256 key wrapper.
    Aes256Key, 32, KeySize::Aes256
);

/// Expanded round keys for one cipher key.
///
/// Read-only once built; a single schedule can serve any number of
/// concurrent encrypt/decrypt calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeySchedule {
    size: KeySize,
    round_keys: [[Word; NB]; MAX_ROUNDS + 1],
}

impl KeySchedule {
    /// Expands a typed key.
    pub fn new<K: CipherKey>(key: &K) -> Self {
        crate::schedule::expand_key(key)
    }

    /// Expands a raw key, inferring `Nk` from its length.
    pub fn from_key_bytes(key: &[u8]) -> Result<Self> {
        let size = KeySize::from_key_len(key.len())?;
        Ok(crate::schedule::expand(size, key))
    }

    pub(crate) fn from_words(size: KeySize, words: &[Word]) -> Self {
        let mut round_keys = [[0; NB]; MAX_ROUNDS + 1];
        for (round_key, chunk) in round_keys.iter_mut().zip(words.chunks_exact(NB)) {
            round_key.copy_from_slice(chunk);
        }
        Self { size, round_keys }
    }

    /// Key size the schedule was expanded from.
    #[inline]
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Number of rounds (`Nr`).
    #[inline]
    pub fn rounds(&self) -> usize {
        self.size.nr()
    }

    /// The whole schedule, exactly `Nb * (Nr + 1)` words.
    pub fn words(&self) -> &[Word] {
        self.round_keys[..=self.rounds()].as_flattened()
    }

    /// Returns the round key at the requested index (`0..=Nr`).
    ///
    /// # Panics
    ///
    /// Panics if `round > Nr`.
    #[inline]
    pub fn round_key(&self, round: usize) -> &[Word; NB] {
        &self.round_keys[..=self.rounds()][round]
    }
}
