//! Block and word representation helpers.

/// Size of an AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Block width in 32-bit words (`Nb`), fixed for AES.
pub const NB: usize = 4;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_SIZE];

/// Four bytes packed big-endian: byte 0 is the most significant.
pub type Word = u32;

/// Packs four bytes into a word, first byte most significant.
#[inline]
pub fn pack_word(bytes: [u8; 4]) -> Word {
    Word::from_be_bytes(bytes)
}

/// Unpacks a word into its four bytes, most significant first.
#[inline]
pub fn unpack_word(word: Word) -> [u8; 4] {
    word.to_be_bytes()
}
