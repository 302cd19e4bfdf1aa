//! Key expansion (FIPS-197 §5.2).

use crate::block::{pack_word, unpack_word, Word};
use crate::error::{Error, Result};
use crate::key::{CipherKey, KeySchedule, KeySize, MAX_ROUNDS};
use crate::tables::{sbox, RCON};

const MAX_WORDS: usize = 4 * (MAX_ROUNDS + 1);

/// Cyclic left rotation by one byte: `[a0, a1, a2, a3] -> [a1, a2, a3, a0]`.
#[inline]
pub fn rot_word(word: Word) -> Word {
    word.rotate_left(8)
}

/// Applies the S-box to each byte of `word`.
#[inline]
pub fn sub_word(word: Word) -> Word {
    pack_word(unpack_word(word).map(sbox))
}

/// Expands a typed key into its round-key schedule.
pub fn expand_key<K: CipherKey>(key: &K) -> KeySchedule {
    expand(K::SIZE, key.as_bytes())
}

/// Expands `key` for a key length of `nk` words.
///
/// Fails with [`Error::InvalidKeySize`] unless `nk` is 4, 6 or 8, and with
/// [`Error::ContractViolation`] if `key` is not `4 * nk` bytes.
pub fn key_expansion(nk: usize, key: &[u8]) -> Result<KeySchedule> {
    let size = KeySize::from_nk(nk)?;
    if key.len() != size.key_bytes() {
        return Err(Error::ContractViolation {
            context: "cipher key length",
            expected: size.key_bytes(),
            actual: key.len(),
        });
    }
    Ok(expand(size, key))
}

/// Caller guarantees `key.len() == size.key_bytes()`.
pub(crate) fn expand(size: KeySize, key: &[u8]) -> KeySchedule {
    let nk = size.nk();
    let total = size.schedule_len();
    let mut w: [Word; MAX_WORDS] = [0; MAX_WORDS];

    for (slot, chunk) in w.iter_mut().zip(key.chunks_exact(4)) {
        *slot = pack_word([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in nk..total {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ (Word::from(RCON[i / nk]) << 24);
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w[i] = w[i - nk] ^ temp;
    }

    KeySchedule::from_words(size, &w[..total])
}
